use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::prompt::{build_explorer_prompt, build_plan_prompt};

use super::AppState;
use super::models::{AskRequest, AskResponse, PlanRequest, PlanResponse};

/// The ask path never requests fewer than 3 or more than 8 results.
fn clamp_max_results(requested: u32) -> u32 {
    requested.clamp(3, 8)
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn ask_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    // Character count, not bytes: a two-character CJK query must reject too.
    if request.query.trim().chars().count() < 3 {
        return Err(ApiError::BadRequest("Query too short".to_string()));
    }

    let sources = state
        .search
        .search(
            &request.query,
            clamp_max_results(request.max_results),
            request.fresh_only,
            request.official_only,
        )
        .await?;

    tracing::info!(query = %request.query, sources = sources.len(), "answering travel question");

    let prompt = build_explorer_prompt(&request.query, &sources);
    let answer = state.llm.complete(&prompt).await?;

    Ok(Json(AskResponse { answer, sources }))
}

pub async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    // Itineraries always want fresh, authoritative grounding.
    let query = format!(
        "{}-day itinerary {} {} max {}h drives",
        request.days, request.month, request.interests, request.max_drive
    );
    let sources = state.search.search(&query, 6, true, true).await?;

    tracing::info!(days = request.days, month = %request.month, sources = sources.len(), "building itinerary");

    let prompt = build_plan_prompt(
        request.days,
        &request.month,
        &request.party,
        request.max_drive,
        &request.interests,
        &request.budget,
        &sources,
    );
    let answer = state.llm.complete(&prompt).await?;

    Ok(Json(PlanResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_max_results() {
        assert_eq!(clamp_max_results(1), 3);
        assert_eq!(clamp_max_results(3), 3);
        assert_eq!(clamp_max_results(6), 6);
        assert_eq!(clamp_max_results(8), 8);
        assert_eq!(clamp_max_results(100), 8);
    }
}
