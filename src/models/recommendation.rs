use serde::{Deserialize, Serialize};

use super::City;

/// Body of a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// A city the user has lived in
    pub lived_city: String,
    /// A city the user would like to live in
    pub dream_city: String,
    /// Feature key the user cares about most (exact match against feature keys)
    pub priority: String,
}

/// Winning candidate together with its final score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCity<'a> {
    pub city: &'a City,
    pub score: f64,
}
