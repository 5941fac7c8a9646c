use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::document::CompanionDocument;
use super::domain::{AttributeFact, PassportDataset};
use super::importer::{PassportImportError, PassportImporter};
use super::scoring::ScoringEngine;

/// Scoring request: the passport either as raw CSV export or as JSON facts,
/// plus the optional companion document (`null` means none).
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub passport_csv: Option<String>,
    #[serde(default)]
    pub facts: Option<Vec<AttributeFact>>,
    #[serde(default)]
    pub document: Option<CompanionDocument>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreRequestError {
    #[error("request must include either passport_csv or facts")]
    MissingPassport,
    #[error("request must include only one of passport_csv or facts")]
    AmbiguousPassport,
    #[error(transparent)]
    Import(#[from] PassportImportError),
}

impl ScoreRequest {
    pub fn dataset(&self) -> Result<PassportDataset, ScoreRequestError> {
        match (&self.passport_csv, &self.facts) {
            (Some(csv), None) => Ok(PassportImporter::from_str(csv)?),
            (None, Some(facts)) => Ok(PassportDataset::new(facts.clone())),
            (Some(_), Some(_)) => Err(ScoreRequestError::AmbiguousPassport),
            (None, None) => Err(ScoreRequestError::MissingPassport),
        }
    }
}

/// Router exposing the scoring engine over HTTP.
pub fn passport_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/passport/score", post(score_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    let dataset = match request.dataset() {
        Ok(dataset) => dataset,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let report = engine.audit(&dataset, request.document.as_ref());
    info!(
        score = report.result.score,
        facts = dataset.len(),
        "passport audited"
    );

    (StatusCode::OK, Json(report)).into_response()
}
