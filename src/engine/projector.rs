use serde_json::{json, Map, Value};

use crate::models::site::{NEUTRAL_KEYS, SITE_ID_KEY};
use crate::models::{Lang, ProjectedSite, Site};

use super::error::EngineError;

/// Render `site` in `lang`: that language's fields with the prefix stripped,
/// plus `Photo_URL`, `Entry_Fee`, `Location` and `siteId`.
///
/// A missing `Location` becomes `{"Coordinates": []}`; missing photo or fee
/// become `null`. A site without `siteId` is rejected.
pub fn project(site: &Site, lang: Lang) -> Result<ProjectedSite, EngineError> {
    let site_id = site.site_id.clone().ok_or_else(|| EngineError::DataIntegrity {
        site: site.label(),
        field: SITE_ID_KEY,
    })?;

    let fields: Map<String, Value> = site
        .by_language(lang)
        .iter()
        .filter(|(key, _)| !NEUTRAL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(ProjectedSite {
        fields,
        photo_url: site.photo_url.clone().unwrap_or(Value::Null),
        entry_fee: site.entry_fee.clone().unwrap_or(Value::Null),
        location: site
            .location
            .clone()
            .unwrap_or_else(|| json!({ "Coordinates": [] })),
        site_id,
    })
}
