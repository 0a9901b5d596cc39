use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a response can be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English (`en_` field prefix).
    En,
    /// Arabic (`ar_` field prefix).
    Ar,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    /// Two-letter code used in requests and as the field key prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Key prefix for bilingual fields, including the trailing underscore.
    pub fn prefix(&self) -> &'static str {
        match self {
            Lang::En => "en_",
            Lang::Ar => "ar_",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code is neither `en` nor `ar`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid lang_res code. Use 'en' or 'ar'.")]
pub struct UnsupportedLang(pub String);

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "ar" => Ok(Lang::Ar),
            other => Err(UnsupportedLang(other.to_string())),
        }
    }
}
