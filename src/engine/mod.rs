//! Recommendation core: similarity scoring, ranking, region inference and
//! language projection over an immutable [`CatalogIndex`].
//!
//! Every operation here is synchronous and pure; the catalog is only read.
//!
//! # Examples
//!
//! ```
//! use tourguide::catalog::CatalogIndex;
//! use tourguide::engine;
//! use tourguide::models::{Lang, Region};
//!
//! let regions: Vec<Region> = serde_json::from_str(r#"[
//!     {"governorateName": "Cairo", "HistoricalSites": [
//!         {"siteId": "c1", "en_Site_Name": "Pyramids"},
//!         {"siteId": "c2", "en_Site_Name": "Museum"}
//!     ]}
//! ]"#).unwrap();
//! let catalog = CatalogIndex::build(regions);
//!
//! let top = engine::recommend(&catalog, &["Pyramid".to_string()], 1, Lang::En).unwrap();
//! assert_eq!(top[0].name(), Some("Pyramids"));
//! ```

mod error;
mod projector;
mod recommender;
mod region_locator;
mod similarity;

use rand::Rng;

use crate::catalog::CatalogIndex;
use crate::models::{Lang, ProjectedSite};

pub use error::EngineError;
pub use projector::project;
pub use recommender::{rank, ScoredSite};
pub use region_locator::{sites_by_region_of_interest, RegionMatch};
pub use similarity::similarity;

/// The `count` sites most similar to `input_names`, rendered in `lang`.
pub fn recommend(
    catalog: &CatalogIndex,
    input_names: &[String],
    count: usize,
    lang: Lang,
) -> Result<Vec<ProjectedSite>, EngineError> {
    tracing::debug!(?input_names, count, %lang, "Recommend request");
    rank(input_names, catalog.all_sites(), count)?
        .into_iter()
        .map(|scored| project(&scored.entry.site, lang))
        .collect()
}

/// Every site in the regions of `input_names`, shuffled and capped at `cap`.
pub fn sites_by_region<R: Rng + ?Sized>(
    catalog: &CatalogIndex,
    input_names: &[String],
    lang: Lang,
    cap: usize,
    rng: &mut R,
) -> Result<RegionMatch, EngineError> {
    tracing::debug!(?input_names, %lang, cap, "Region lookup request");
    let found = sites_by_region_of_interest(input_names, lang, catalog, cap, rng)?;
    tracing::debug!(
        regions = found.matched_regions,
        returned = found.number_of_places,
        "Region lookup matched"
    );
    Ok(found)
}

/// All `<lang>_Site_Name` values in catalog order. Sites without one are skipped.
pub fn list_all_names(catalog: &CatalogIndex, lang: Lang) -> Vec<String> {
    catalog
        .all_sites()
        .iter()
        .filter_map(|entry| entry.site.name(lang).map(str::to_string))
        .collect()
}
