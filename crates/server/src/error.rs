use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seoscope_core::SeoError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] tokio::task::JoinError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Failures before the server starts accepting requests.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Failed to load scoring config: {0}")]
    ScoringConfig(#[from] SeoError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
