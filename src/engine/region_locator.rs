use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::models::{Lang, ProjectedSite};

use super::error::EngineError;
use super::projector::project;

/// Sites sharing a region with at least one of the requested names.
#[derive(Clone, Debug, Serialize)]
pub struct RegionMatch {
    /// Number of distinct regions that contained a requested name.
    #[serde(skip)]
    pub matched_regions: usize,
    pub number_of_places: usize,
    pub sites: Vec<ProjectedSite>,
}

/// Find the regions owning any site named in `input_names` (in `lang`), then
/// return every site of those regions projected into `lang`, shuffled with
/// `rng` and cut to `cap` entries.
pub fn sites_by_region_of_interest<R: Rng + ?Sized>(
    input_names: &[String],
    lang: Lang,
    catalog: &CatalogIndex,
    cap: usize,
    rng: &mut R,
) -> Result<RegionMatch, EngineError> {
    if input_names.is_empty() {
        return Err(EngineError::InvalidInput("no site names given".into()));
    }

    let regions: HashSet<&str> = input_names
        .iter()
        .flat_map(|name| catalog.sites_by_name(lang, name))
        .map(|entry| entry.region.as_str())
        .collect();
    if regions.is_empty() {
        return Err(EngineError::NotFound(
            "No sites matched the provided names.".into(),
        ));
    }

    let mut sites = catalog
        .all_sites()
        .iter()
        .filter(|entry| regions.contains(entry.region.as_str()))
        .map(|entry| project(&entry.site, lang))
        .collect::<Result<Vec<_>, _>>()?;

    sites.shuffle(rng);
    sites.truncate(cap);

    Ok(RegionMatch {
        matched_regions: regions.len(),
        number_of_places: sites.len(),
        sites,
    })
}
