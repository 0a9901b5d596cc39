use std::path::Path;

use crate::api::load_regions_from_api;
use crate::catalog::{CatalogIndex, LoadError};
use crate::config;
use crate::models::Region;

/// Where the catalog is read from at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogSource {
    File(String),
    Api { base_url: String, token: String },
}

impl CatalogSource {
    /// The document store when `CATALOG_API_URL` is set, otherwise `DATA_FILE`.
    pub fn from_env() -> Self {
        match config::get_catalog_api_url() {
            Some(base_url) => CatalogSource::Api {
                base_url,
                token: config::get_catalog_api_token(),
            },
            None => CatalogSource::File(config::get_data_file()),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "file {}", path),
            CatalogSource::Api { base_url, .. } => write!(f, "api {}", base_url),
        }
    }
}

/// Read the region list from a JSON file. A leading UTF-8 BOM is ignored.
pub async fn load_regions_from_file(path: impl AsRef<Path>) -> Result<Vec<Region>, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_regions(&text)
}

pub fn parse_regions(text: &str) -> Result<Vec<Region>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

/// Load the regions from `source` and build the catalog index.
pub async fn load_catalog(source: &CatalogSource) -> Result<CatalogIndex, LoadError> {
    let regions = match source {
        CatalogSource::File(path) => load_regions_from_file(path).await?,
        CatalogSource::Api { base_url, token } => {
            let client = reqwest::Client::builder()
                .user_agent(format!("tourguide/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| LoadError::Network(e.to_string()))?;
            load_regions_from_api(&client, base_url, token).await?
        }
    };

    let missing_ids = regions
        .iter()
        .flat_map(|r| r.sites())
        .filter(|s| s.site_id.is_none())
        .count();
    if missing_ids > 0 {
        tracing::warn!(missing_ids, "Catalog contains sites without a siteId");
    }

    let catalog = CatalogIndex::build(regions);
    tracing::info!(
        regions = catalog.region_names().len(),
        sites = catalog.len(),
        %source,
        "Catalog loaded"
    );
    Ok(catalog)
}
