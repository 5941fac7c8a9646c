use crate::config::ConfigError;
use crate::passport::{DocumentError, PassportImportError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Top-level failure for the binaries. Data-quality findings never end up
/// here; they are part of the score.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("passport import error: {0}")]
    Import(#[from] PassportImportError),
    #[error("companion document error: {0}")]
    Document(#[from] DocumentError),
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Usage faults are the caller's to fix.
    pub fn is_usage_fault(&self) -> bool {
        matches!(self, AppError::Import(_) | AppError::Document(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_usage_fault() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
