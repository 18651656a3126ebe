use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, details) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Error::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            Error::Validation(err) => {
                let details = serde_json::to_value(&err).ok();
                (StatusCode::BAD_REQUEST, "Invalid input".to_string(), details)
            }
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            Error::Reqwest(err) => (
                StatusCode::BAD_GATEWAY,
                format!("External service error: {}. Please try again.", err),
                None,
            ),
            Error::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("External service error: {}. Please try again.", msg),
                None,
            ),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
            Error::Anyhow(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
                None,
            ),
        };

        let body = Json(json!({
            "data": null,
            "error": error_message,
            "details": details,
        }));
        (status, body).into_response()
    }
}
