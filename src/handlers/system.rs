use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::models::AppState;

/// GET /health — liveness plus catalog size.
pub async fn health_get(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "regions": state.catalog.region_names().len(),
        "sites": state.catalog.len(),
    }))
}
