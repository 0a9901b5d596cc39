use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::engine;
use crate::models::{AppState, ProjectedSite};

use super::helpers::{parse_lang, require_names, ApiError, ApiJson};

#[derive(Deserialize)]
pub struct RecommendRequest {
    pub places: Vec<String>,
    pub lang_res: String,
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub number_of_places: usize,
    pub sites: Vec<ProjectedSite>,
}

/// POST /recommend/ — the sites whose names are closest to the given places.
pub async fn recommend_post(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let lang = parse_lang(&req.lang_res)?;
    require_names(&req.places)?;
    let count = req.count.unwrap_or(state.recommend_count);
    let sites = engine::recommend(&state.catalog, &req.places, count, lang)?;
    if sites.is_empty() {
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "No data available for recommendations.",
        ));
    }
    Ok(Json(RecommendResponse {
        number_of_places: sites.len(),
        sites,
    }))
}
