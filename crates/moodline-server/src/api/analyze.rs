use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Extension, Json,
};
use moodline_engines::{AnalysisResult, Library};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeQuery {
    pub library: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    /// Missing text is treated the same as empty text.
    #[serde(default)]
    pub text: String,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    let selector = query
        .library
        .unwrap_or_else(|| Library::default().as_str().to_string());

    state
        .dispatcher
        .analyze(&request.text, &selector)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_sentiment(req_id.0, &e))
}
