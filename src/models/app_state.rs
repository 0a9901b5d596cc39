use std::sync::Arc;

use crate::catalog::CatalogIndex;

/// Shared state handed to every request handler.
///
/// The catalog is immutable after startup, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogIndex>,
    /// Maximum number of sites returned by the region lookup.
    pub region_cap: usize,
    /// Recommendation count used when a request does not specify one.
    pub recommend_count: usize,
}

impl AppState {
    pub fn new(catalog: CatalogIndex, region_cap: usize, recommend_count: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            region_cap,
            recommend_count,
        }
    }
}
