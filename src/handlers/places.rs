use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::engine::{self, RegionMatch};
use crate::models::AppState;

use super::helpers::{parse_lang, require_names, ApiError, ApiJson};

#[derive(Deserialize)]
pub struct PlaceRequest {
    pub places: Vec<String>,
    pub lang_res: String,
}

/// POST /places/ — every site in the regions of the given places, shuffled and capped.
pub async fn places_post(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PlaceRequest>,
) -> Result<Json<RegionMatch>, ApiError> {
    let lang = parse_lang(&req.lang_res)?;
    require_names(&req.places)?;
    let found = engine::sites_by_region(
        &state.catalog,
        &req.places,
        lang,
        state.region_cap,
        &mut rand::thread_rng(),
    )?;
    Ok(Json(found))
}
