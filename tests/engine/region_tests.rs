use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tourguide::catalog::CatalogIndex;
use tourguide::config::DEFAULT_REGION_CAP;
use tourguide::engine::{self, EngineError};
use tourguide::models::{Lang, Region};

use super::{fixture_catalog, names};

fn returned_names(found: &engine::RegionMatch) -> HashSet<String> {
    found.sites.iter().filter_map(|s| s.name()).map(str::to_string).collect()
}

#[test]
fn test_pyramids_bring_their_governorate_only() {
    let regions: Vec<Region> = serde_json::from_value(json!([
        {"governorateName": "Cairo", "HistoricalSites": [
            {"siteId": 1, "en_Site_Name": "Pyramids"},
            {"siteId": 2, "en_Site_Name": "Museum"}
        ]},
        {"governorateName": "Luxor", "HistoricalSites": [
            {"siteId": 3, "en_Site_Name": "Temple"}
        ]}
    ]))
    .unwrap();
    let catalog = CatalogIndex::build(regions);
    let mut rng = StdRng::seed_from_u64(42);

    let found = engine::sites_by_region(&catalog, &names(&["Pyramids"]), Lang::En, 30, &mut rng).unwrap();
    let got = returned_names(&found);
    let expected: HashSet<String> = names(&["Pyramids", "Museum"]).into_iter().collect();
    assert_eq!(got, expected);
    assert!(!got.contains("Temple"));
}

#[test]
fn test_every_returned_site_shares_a_region_with_an_input() {
    let catalog = fixture_catalog();
    let inputs = names(&["Museum", "Philae Temple"]);
    let mut rng = StdRng::seed_from_u64(3);
    let found = engine::sites_by_region(&catalog, &inputs, Lang::En, DEFAULT_REGION_CAP, &mut rng).unwrap();

    let matched_regions: HashSet<&str> = inputs
        .iter()
        .flat_map(|n| catalog.sites_by_name(Lang::En, n))
        .map(|e| e.region.as_str())
        .collect();
    assert_eq!(found.matched_regions, 2);
    for site in &found.sites {
        let owner = catalog
            .all_sites()
            .iter()
            .find(|e| e.site.site_id.as_ref() == Some(&site.site_id))
            .map(|e| e.region.as_str())
            .unwrap();
        assert!(matched_regions.contains(owner));
    }
    assert_eq!(found.number_of_places, 4);
}

#[test]
fn test_projection_has_no_language_prefixes() {
    let catalog = fixture_catalog();
    let mut rng = StdRng::seed_from_u64(5);
    let found = engine::sites_by_region(&catalog, &names(&["المعبد"]), Lang::Ar, 30, &mut rng).unwrap();
    assert_eq!(found.number_of_places, 2);
    for site in &found.sites {
        let value = serde_json::to_value(site).unwrap();
        for key in value.as_object().unwrap().keys() {
            assert!(!key.starts_with("ar_") && !key.starts_with("en_"), "{}", key);
        }
        assert_eq!(value["Location"], json!({"Coordinates": []}));
    }
}

#[test]
fn test_result_is_capped_at_thirty() {
    let sites: Vec<serde_json::Value> = (0..45)
        .map(|i| json!({"siteId": i, "en_Site_Name": format!("Site {}", i)}))
        .collect();
    let regions: Vec<Region> =
        serde_json::from_value(json!([{"governorateName": "Giza", "HistoricalSites": sites}])).unwrap();
    let catalog = CatalogIndex::build(regions);

    let mut rng = StdRng::seed_from_u64(9);
    let found = engine::sites_by_region(&catalog, &names(&["Site 3"]), Lang::En, DEFAULT_REGION_CAP, &mut rng).unwrap();
    assert_eq!(found.sites.len(), 30);
    assert_eq!(found.number_of_places, 30);
    let distinct: HashSet<String> = found.sites.iter().map(|s| s.site_id.to_string()).collect();
    assert_eq!(distinct.len(), 30);
}

#[test]
fn test_unknown_names_are_not_found() {
    let catalog = fixture_catalog();
    let mut rng = StdRng::seed_from_u64(0);
    let err = engine::sites_by_region(&catalog, &names(&["Atlantis"]), Lang::En, 30, &mut rng).unwrap_err();
    assert_eq!(err, EngineError::NotFound("No sites matched the provided names.".into()));
}

#[test]
fn test_site_without_id_fails_fast() {
    let regions: Vec<Region> = serde_json::from_value(json!([
        {"governorateName": "Sinai", "HistoricalSites": [
            {"siteId": "s1", "en_Site_Name": "Saint Catherine"},
            {"en_Site_Name": "Mount Sinai"}
        ]}
    ]))
    .unwrap();
    let catalog = CatalogIndex::build(regions);
    let mut rng = StdRng::seed_from_u64(0);
    let err = engine::sites_by_region(&catalog, &names(&["Saint Catherine"]), Lang::En, 30, &mut rng).unwrap_err();
    assert_eq!(
        err,
        EngineError::DataIntegrity {
            site: "Mount Sinai".into(),
            field: "siteId"
        }
    );
}

#[test]
fn test_unsupported_language_never_reaches_the_engine() {
    assert!("fr".parse::<Lang>().is_err());
    assert!("en-US".parse::<Lang>().is_err());
}
