use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::lang::Lang;

pub const SITE_ID_KEY: &str = "siteId";
pub const PHOTO_URL_KEY: &str = "Photo_URL";
pub const ENTRY_FEE_KEY: &str = "Entry_Fee";
pub const LOCATION_KEY: &str = "Location";
pub const SITE_NAME_FIELD: &str = "Site_Name";

/// Keys copied into every projection regardless of language.
pub const NEUTRAL_KEYS: [&str; 4] = [PHOTO_URL_KEY, ENTRY_FEE_KEY, LOCATION_KEY, SITE_ID_KEY];

/// Site identifier as stored in the source data (either a string or a number).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteId {
    Text(String),
    Number(serde_json::Number),
}

impl SiteId {
    fn from_value(value: &Value) -> Option<SiteId> {
        match value {
            Value::String(s) => Some(SiteId::Text(s.clone())),
            Value::Number(n) => Some(SiteId::Number(n.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteId::Text(s) => f.write_str(s),
            SiteId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A tourist site with its bilingual fields split per language at load time.
///
/// Source keys of the form `en_<Field>` / `ar_<Field>` end up in the matching
/// per-language map with the prefix removed. The neutral keys are kept as
/// typed fields. Anything else is dropped.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Site {
    pub site_id: Option<SiteId>,
    pub photo_url: Option<Value>,
    pub entry_fee: Option<Value>,
    pub location: Option<Value>,
    en: Map<String, Value>,
    ar: Map<String, Value>,
}

impl Site {
    /// Language fields for `lang`, keyed without their prefix.
    pub fn by_language(&self, lang: Lang) -> &Map<String, Value> {
        match lang {
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        }
    }

    /// The `<lang>_Site_Name` value, if present and a string.
    pub fn name(&self, lang: Lang) -> Option<&str> {
        self.by_language(lang).get(SITE_NAME_FIELD).and_then(|v| v.as_str())
    }

    /// Best available human label, used in log lines and error messages.
    pub fn label(&self) -> String {
        self.name(Lang::En)
            .or_else(|| self.name(Lang::Ar))
            .map(str::to_string)
            .or_else(|| self.site_id.as_ref().map(|id| id.to_string()))
            .unwrap_or_else(|| "<unnamed site>".to_string())
    }
}

impl From<Map<String, Value>> for Site {
    fn from(raw: Map<String, Value>) -> Self {
        let mut site = Site::default();
        for (key, value) in raw {
            match key.as_str() {
                SITE_ID_KEY => site.site_id = SiteId::from_value(&value),
                PHOTO_URL_KEY => site.photo_url = Some(value),
                ENTRY_FEE_KEY => site.entry_fee = Some(value),
                LOCATION_KEY => site.location = Some(value),
                _ => {
                    let tagged = Lang::ALL.into_iter().find_map(|lang| {
                        key.strip_prefix(lang.prefix()).map(|field| (lang, field.to_string()))
                    });
                    match tagged {
                        Some((Lang::En, field)) => {
                            site.en.insert(field, value);
                        }
                        Some((Lang::Ar, field)) => {
                            site.ar.insert(field, value);
                        }
                        None => {}
                    }
                }
            }
        }
        site
    }
}
