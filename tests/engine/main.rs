//! Scenario and property tests for the recommendation engine
mod recommend_tests;
mod region_tests;

use tourguide::catalog::CatalogIndex;
use tourguide::models::Region;

pub fn fixture_catalog() -> CatalogIndex {
    let regions: Vec<Region> =
        serde_json::from_str(include_str!("../fixtures/sites.json")).expect("fixture parses");
    CatalogIndex::build(regions)
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
