pub mod catalog_service;

// Re-export commonly used functions
pub use catalog_service::{load_catalog, load_regions_from_file, parse_regions, CatalogSource};
