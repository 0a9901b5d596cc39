use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::engine;
use crate::models::AppState;

use super::helpers::{parse_lang, ApiError};

#[derive(Deserialize)]
pub struct NamesQuery {
    pub lang: Option<String>,
}

#[derive(Serialize)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

/// GET /names?lang=en — every site name in the catalog.
pub async fn names_get(
    State(state): State<AppState>,
    Query(q): Query<NamesQuery>,
) -> Result<Json<NamesResponse>, ApiError> {
    let lang = parse_lang(q.lang.as_deref().unwrap_or("en"))?;
    Ok(Json(NamesResponse {
        names: engine::list_all_names(&state.catalog, lang),
    }))
}
