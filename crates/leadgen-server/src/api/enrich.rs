use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use leadgen_core::Lead;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_pipeline_error, parse_limit, ApiError, ApiResponse, AppState, ResultsData};

/// `limit` is kept as raw JSON so both `5` and `"5"` are accepted.
#[derive(Debug, Deserialize)]
pub(super) struct EnrichRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
}

pub(super) async fn enrich_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ResultsData<Lead>>>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let query = request.query.unwrap_or_default();
    let limit = parse_limit(request.limit.as_ref());

    let results = state
        .pipeline
        .enrich(&query, limit)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, ResultsData { results })))
}
