use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message returned when a requested city is not in the catalog
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please choose a city from the list.";

/// Message returned when every catalog city was excluded from scoring
pub const NO_CANDIDATE_MESSAGE: &str = "No suitable city to recommend was found.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NoCandidate(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn city_not_found() -> Self {
        AppError::NotFound(CITY_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn no_candidate() -> Self {
        AppError::NoCandidate(NO_CANDIDATE_MESSAGE.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::NoCandidate(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
