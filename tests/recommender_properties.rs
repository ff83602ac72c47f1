//! Property tests for the recommender.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical inputs give the identical city.
//! - **Exclusion:** the result is never one of the reference cities.
//! - **Symmetry:** swapping lived and dream cities changes nothing.
//! - **Priority monotonicity:** raising a candidate's priority score never
//!   lowers its final score and never unseats it as the winner.

use std::sync::Arc;

use proptest::prelude::*;

use city_match_api::{
    catalog::Catalog,
    models::{City, FeatureScores},
    services::{build_profile, score_candidate, Recommender},
};

const FEATURES: &[&str] = &["cost", "safety", "nature", "culture", "food", "climate"];

fn features_strategy() -> impl Strategy<Value = FeatureScores> {
    prop::collection::btree_map(
        prop::sample::select(FEATURES).prop_map(str::to_string),
        (0u8..=5).prop_map(f64::from),
        0..FEATURES.len(),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec(features_strategy(), 3..10).prop_map(|features| {
        features
            .into_iter()
            .enumerate()
            .map(|(i, features)| City::new(format!("City{}", i), features))
            .collect()
    })
}

/// Catalog plus two reference indices (possibly equal) and a priority key
fn scenario() -> impl Strategy<Value = (Vec<City>, usize, usize, String)> {
    catalog_strategy().prop_flat_map(|cities| {
        let len = cities.len();
        (
            Just(cities),
            0..len,
            0..len,
            prop::sample::select(FEATURES).prop_map(str::to_string),
        )
    })
}

fn recommender(cities: Vec<City>) -> Recommender {
    Recommender::new(Arc::new(Catalog::from_cities(cities).unwrap()))
}

proptest! {
    #[test]
    fn recommend_is_deterministic((cities, lived, dream, priority) in scenario()) {
        let lived_name = cities[lived].name.clone();
        let dream_name = cities[dream].name.clone();
        let recommender = recommender(cities);

        let first = recommender.recommend(&lived_name, &dream_name, &priority).unwrap();
        let second = recommender.recommend(&lived_name, &dream_name, &priority).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn result_excludes_reference_cities((cities, lived, dream, priority) in scenario()) {
        let lived_name = cities[lived].name.to_uppercase();
        let dream_name = cities[dream].name.to_lowercase();
        let recommender = recommender(cities);

        let chosen = recommender.recommend(&lived_name, &dream_name, &priority).unwrap();
        prop_assert!(!chosen.is_named(&lived_name));
        prop_assert!(!chosen.is_named(&dream_name));
    }

    #[test]
    fn swapping_references_is_symmetric((cities, lived, dream, priority) in scenario()) {
        prop_assert_eq!(
            build_profile(&cities[lived], &cities[dream], &priority),
            build_profile(&cities[dream], &cities[lived], &priority)
        );

        let lived_name = cities[lived].name.clone();
        let dream_name = cities[dream].name.clone();
        let recommender = recommender(cities);

        let forward = recommender.recommend(&lived_name, &dream_name, &priority).unwrap();
        let backward = recommender.recommend(&dream_name, &lived_name, &priority).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn raising_priority_score_never_hurts(
        (cities, lived, dream, priority) in scenario(),
        bump in 1u8..=5,
    ) {
        let lived_name = cities[lived].name.clone();
        let dream_name = cities[dream].name.clone();

        let before = recommender(cities.clone())
            .recommend(&lived_name, &dream_name, &priority)
            .unwrap()
            .name
            .clone();

        let winner = cities.iter().position(|c| c.name == before).unwrap();
        let profile = build_profile(&cities[lived], &cities[dream], &priority);
        let old_score = score_candidate(&profile, &cities[winner], &priority);

        let mut boosted = cities.clone();
        *boosted[winner].features.entry(priority.clone()).or_insert(0.0) += f64::from(bump);
        let new_score = score_candidate(&profile, &boosted[winner], &priority);
        prop_assert!(new_score >= old_score);

        let after = recommender(boosted)
            .recommend(&lived_name, &dream_name, &priority)
            .unwrap()
            .name
            .clone();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn unknown_city_never_panics(
        cities in catalog_strategy(),
        name in "[A-Za-z ]{1,12}",
    ) {
        prop_assume!(!cities.iter().any(|c| c.is_named(&name)));
        let known = cities[0].name.clone();
        let recommender = recommender(cities);

        prop_assert!(recommender.recommend(&name, &known, "food").is_err());
        prop_assert!(recommender.recommend(&known, &name, "food").is_err());
    }
}
