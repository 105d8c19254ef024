//! Axum route handlers for the Prospects API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::prospects::display::ProspectCard;
use crate::prospects::models::default_icp;
use crate::prospects::request::prospect_response_schema;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Raw ICP text as typed into the form; JSON expected but not required.
    pub icp: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub prospects: Vec<ProspectCard>,
}

/// POST /api/v1/prospects/search
///
/// Runs one prospect search. Each call is independent; results are not retained.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let search_id = Uuid::new_v4();
    let prospects = state.searcher.search_with_id(search_id, &request.icp).await?;

    Ok(Json(SearchResponse {
        search_id,
        generated_at: Utc::now(),
        count: prospects.len(),
        prospects: prospects.into_iter().map(ProspectCard::from).collect(),
    }))
}

/// GET /api/v1/prospects/icp/default
pub async fn handle_default_icp() -> Json<Value> {
    Json(default_icp())
}

/// GET /api/v1/prospects/schema
///
/// The output schema the generation service is asked to conform to.
pub async fn handle_response_schema() -> Json<Value> {
    Json(prospect_response_schema())
}
