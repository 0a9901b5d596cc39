use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::engine::EngineError;
use crate::models::{Lang, UnsupportedLang};

/// Error returned by the JSON endpoints, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidInput(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            EngineError::NotFound(msg) => ApiError::new(StatusCode::NOT_FOUND, msg),
            err @ EngineError::DataIntegrity { .. } => {
                tracing::error!(%err, "Catalog data integrity failure");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Catalog data is inconsistent.")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

/// JSON request body whose rejections render as `{"detail": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<UnsupportedLang> for ApiError {
    fn from(e: UnsupportedLang) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
    }
}

/// Validate a language code from a request.
pub fn parse_lang(raw: &str) -> Result<Lang, ApiError> {
    Ok(raw.parse::<Lang>()?)
}

/// Reject an empty or all-blank name list before it reaches the engine.
pub fn require_names(places: &[String]) -> Result<(), ApiError> {
    if places.iter().all(|p| p.trim().is_empty()) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "At least one place name is required.",
        ));
    }
    Ok(())
}
