use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{City, RecommendationRequest};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List city names in catalog order
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .recommender
        .catalog()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

/// Recommend a city from a lived-in city, a dream city and a priority feature
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<City>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "Rejected recommendation request body"
        );
        AppError::from(rejection)
    })?;

    tracing::info!(
        request_id = %request_id,
        lived_city = %request.lived_city,
        dream_city = %request.dream_city,
        priority = %request.priority,
        "Processing recommendation request"
    );

    let scored = state.recommender.recommend_scored(
        &request.lived_city,
        &request.dream_city,
        &request.priority,
    )?;

    tracing::debug!(request_id = %request_id, score = scored.score, "Winning score");
    tracing::info!(
        request_id = %request_id,
        recommended = %scored.city.name,
        "Recommendation completed"
    );

    Ok(Json(scored.city.clone()))
}
