use axum::{
    extract::{Query, State},
    Extension, Json,
};
use leadgen_core::{DetailOutcome, PlaceDetails, PlaceSummary};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_pipeline_error, parse_limit_str, ApiError, ApiResponse, AppState, ResultsData};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub query: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsQuery {
    pub place_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct FindData {
    place_id: Option<String>,
}

pub(super) async fn find(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<FindData>>, ApiError> {
    let query = params.query.unwrap_or_default();
    let place_id = state
        .pipeline
        .find_place(&query)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, FindData { place_id })))
}

pub(super) async fn details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<DetailsQuery>,
) -> Result<Json<ApiResponse<PlaceDetails>>, ApiError> {
    let place_id = params.place_id.unwrap_or_default();
    let outcome = state
        .pipeline
        .fetch_details(&place_id)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    match outcome {
        DetailOutcome::Found(details) => Ok(Json(ApiResponse::new(req_id.0, details))),
        DetailOutcome::Failed { error_message, .. } => {
            Err(ApiError::new(req_id.0, "upstream_error", error_message))
        }
    }
}

pub(super) async fn search_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<ResultsData<PlaceSummary>>>, ApiError> {
    let query = params.query.unwrap_or_default();
    let limit = params
        .limit
        .as_deref()
        .and_then(parse_limit_str)
        .and_then(|n| usize::try_from(n).ok());

    let results = state
        .pipeline
        .search_text(&query, limit)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, ResultsData { results })))
}
