use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizeRequest {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeResponse {
    pub original_text: String,
    pub summary: String,
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    state
        .summary_service
        .summarize(&body.text)
        .await
        .map_err(ApiError::from)
        .map(|summary| {
            Json(SummarizeResponse {
                original_text: summary.original_text,
                summary: summary.summary,
            })
        })
}
