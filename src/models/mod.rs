mod city;
mod recommendation;

pub use city::{City, FeatureScores};
pub use recommendation::{RecommendationRequest, ScoredCity};
