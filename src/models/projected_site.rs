use serde::Serialize;
use serde_json::{Map, Value};

use super::site::{SiteId, SITE_NAME_FIELD};

/// A site rendered into a single language plus the neutral fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedSite {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(rename = "Photo_URL")]
    pub photo_url: Value,
    #[serde(rename = "Entry_Fee")]
    pub entry_fee: Value,
    #[serde(rename = "Location")]
    pub location: Value,
    #[serde(rename = "siteId")]
    pub site_id: SiteId,
}

impl ProjectedSite {
    pub fn name(&self) -> Option<&str> {
        self.fields.get(SITE_NAME_FIELD).and_then(|v| v.as_str())
    }
}
