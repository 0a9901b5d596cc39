use serde_json::Value;

use crate::catalog::LoadError;
use crate::models::Region;
use super::client::get_json;

/// Load every region from the catalog document store.
/// Accepts either a bare array or an envelope with the array under `data`.
pub async fn load_regions_from_api(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Result<Vec<Region>, LoadError> {
    let payload = get_json(client, api_base_url, api_token, "/regions").await?;
    regions_from_payload(payload)
}

pub(crate) fn regions_from_payload(payload: Value) -> Result<Vec<Region>, LoadError> {
    let list = match payload {
        Value::Array(_) => payload,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => {
                return Err(LoadError::Api(
                    "response has no `data` array of regions".to_string(),
                ))
            }
        },
        _ => return Err(LoadError::Api("unexpected response shape".to_string())),
    };
    Ok(serde_json::from_value(list)?)
}
