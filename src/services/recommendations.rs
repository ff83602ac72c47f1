use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{City, ScoredCity},
};

/// Multiplier applied to the priority feature inside the user profile
pub const PRIORITY_WEIGHT: f64 = 2.0;

/// Multiplier applied to a candidate's own score on the priority feature
pub const BOOST_WEIGHT: f64 = 2.0;

/// Per-request taste profile derived from the two reference cities
pub type UserProfile = BTreeMap<String, f64>;

/// Builds the user profile from a lived-in city and a dream city
///
/// Every feature present in either city is averaged (a missing score counts
/// as 0). If `priority` is one of those features its value is then doubled.
/// A priority absent from both cities leaves the profile untouched.
pub fn build_profile(lived: &City, dream: &City, priority: &str) -> UserProfile {
    let mut profile: UserProfile = lived
        .features
        .keys()
        .chain(dream.features.keys())
        .map(|feature| {
            let average = (lived.score(feature) + dream.score(feature)) / 2.0;
            (feature.clone(), average)
        })
        .collect();

    if let Some(score) = profile.get_mut(priority) {
        *score *= PRIORITY_WEIGHT;
    }

    profile
}

/// Dot product of the profile with the candidate, plus the priority boost
///
/// Only profile keys take part in the similarity. The boost uses the
/// candidate's raw priority score whether or not the profile has that key.
pub fn score_candidate(profile: &UserProfile, candidate: &City, priority: &str) -> f64 {
    let similarity: f64 = profile
        .iter()
        .map(|(feature, weight)| weight * candidate.score(feature))
        .sum();

    similarity + candidate.score(priority) * BOOST_WEIGHT
}

/// Picks the best city for a user out of an injected catalog
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the best matching city, excluding both reference cities
    pub fn recommend(
        &self,
        lived_city: &str,
        dream_city: &str,
        priority: &str,
    ) -> AppResult<&City> {
        self.recommend_scored(lived_city, dream_city, priority)
            .map(|scored| scored.city)
    }

    /// Same as [`Recommender::recommend`] but also returns the winning score
    ///
    /// Candidates are scanned in catalog order and only a strictly greater
    /// score replaces the current best, so ties go to the earlier city.
    pub fn recommend_scored(
        &self,
        lived_city: &str,
        dream_city: &str,
        priority: &str,
    ) -> AppResult<ScoredCity<'_>> {
        let (lived, dream) = match (self.catalog.get(lived_city), self.catalog.get(dream_city)) {
            (Some(lived), Some(dream)) => (lived, dream),
            (lived, dream) => {
                tracing::warn!(
                    lived_city,
                    dream_city,
                    lived_found = lived.is_some(),
                    dream_found = dream.is_some(),
                    "Reference city not in catalog"
                );
                return Err(AppError::city_not_found());
            }
        };

        let profile = build_profile(lived, dream, priority);

        tracing::debug!(
            lived = %lived.name,
            dream = %dream.name,
            priority,
            features = profile.len(),
            "User profile built"
        );

        let mut best: Option<ScoredCity<'_>> = None;

        // Names are unique case-insensitively, so the resolved references
        // identify exactly the cities to exclude.
        for candidate in self
            .catalog
            .iter()
            .filter(|city| !std::ptr::eq(*city, lived) && !std::ptr::eq(*city, dream))
        {
            let score = score_candidate(&profile, candidate, priority);
            if best.as_ref().map_or(true, |current| score > current.score) {
                best = Some(ScoredCity {
                    city: candidate,
                    score,
                });
            }
        }

        best.ok_or_else(|| {
            tracing::warn!(
                lived = %lived.name,
                dream = %dream.name,
                catalog_size = self.catalog.len(),
                "No candidate left after excluding reference cities"
            );
            AppError::no_candidate()
        })
    }
}
