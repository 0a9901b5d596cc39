use serde::Deserialize;

use super::site::Site;

/// A governorate and the sites it owns.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Region {
    #[serde(rename = "governorateName")]
    pub name: String,
    #[serde(rename = "HistoricalSites", default)]
    pub historical_sites: Vec<Site>,
    #[serde(rename = "RecreationalSites", default)]
    pub recreational_sites: Vec<Site>,
}

impl Region {
    /// Historical sites followed by recreational ones, in source order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.historical_sites.iter().chain(self.recreational_sites.iter())
    }
}
