use tourguide::engine::{self, rank, similarity, EngineError};
use tourguide::models::Lang;

use super::{fixture_catalog, names};

#[test]
fn test_pyramid_recommends_pyramids_first() {
    let catalog = fixture_catalog();
    let top = engine::recommend(&catalog, &names(&["Pyramid"]), 1, Lang::En).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name(), Some("Pyramids"));
    assert_eq!(top[0].site_id.to_string(), "cai-1");
}

#[test]
fn test_recommendations_are_rendered_in_requested_language() {
    let catalog = fixture_catalog();
    let top = engine::recommend(&catalog, &names(&["Pyramid"]), 1, Lang::Ar).unwrap();
    assert_eq!(top[0].name(), Some("الأهرامات"));
    assert_eq!(top[0].fields["Description"], "مجمع أهرامات الجيزة.");
}

#[test]
fn test_inputs_never_come_back() {
    let catalog = fixture_catalog();
    let inputs = names(&["Temple", "Museum"]);
    let all = engine::recommend(&catalog, &inputs, 100, Lang::En).unwrap();
    for site in &all {
        let name = site.name().unwrap();
        assert!(!inputs.iter().any(|i| i == name), "{} was an input", name);
    }
}

#[test]
fn test_result_length_is_min_of_count_and_pool() {
    let catalog = fixture_catalog();
    let inputs = names(&["Temple"]);
    let pool = catalog.len() - 1;
    for count in 1..=pool + 2 {
        let got = engine::recommend(&catalog, &inputs, count, Lang::En).unwrap();
        assert_eq!(got.len(), count.min(pool));
    }
}

#[test]
fn test_ranked_scores_never_increase() {
    let catalog = fixture_catalog();
    let inputs = names(&["Karnak", "Azhar Garden"]);
    let ranked = rank(&inputs, catalog.all_sites(), catalog.len()).unwrap();
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for scored in &ranked {
        let name = scored.entry.site.name(Lang::En).unwrap();
        let best = inputs.iter().map(|i| similarity(i, name)).fold(0.0, f64::max);
        assert_eq!(scored.score, best);
    }
}

#[test]
fn test_temple_inputs_favour_temples() {
    let catalog = fixture_catalog();
    let top = engine::recommend(&catalog, &names(&["Temple"]), 2, Lang::En).unwrap();
    let got: Vec<&str> = top.iter().filter_map(|s| s.name()).collect();
    assert_eq!(got, vec!["Karnak Temple", "Philae Temple"]);
}

#[test]
fn test_empty_input_is_invalid() {
    let catalog = fixture_catalog();
    let err = engine::recommend(&catalog, &[], 3, Lang::En).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn test_exhausted_pool_returns_empty() {
    let catalog = fixture_catalog();
    let every_name = engine::list_all_names(&catalog, Lang::En);
    let got = engine::recommend(&catalog, &every_name, 5, Lang::En).unwrap();
    assert!(got.is_empty());
}

#[test]
fn test_list_all_names_in_catalog_order() {
    let catalog = fixture_catalog();
    assert_eq!(
        engine::list_all_names(&catalog, Lang::En),
        names(&["Pyramids", "Museum", "Al-Azhar Park", "Temple", "Karnak Temple", "Philae Temple"])
    );
    assert_eq!(engine::list_all_names(&catalog, Lang::Ar)[0], "الأهرامات");
}
