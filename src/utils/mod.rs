// Parsing utilities
pub mod parse_name_list;

// JSON utilities
pub mod table_cell;

// Re-export all utilities for convenient access
pub use parse_name_list::parse_name_list;
pub use table_cell::{cell_text, coordinates_text};
