//! The in-memory site catalog and the errors raised while loading it.

mod error;
mod index;

pub use error::LoadError;
pub use index::{CatalogEntry, CatalogIndex};
