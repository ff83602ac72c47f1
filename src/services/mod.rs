pub mod recommendations;

pub use recommendations::{
    build_profile, score_candidate, Recommender, UserProfile, BOOST_WEIGHT, PRIORITY_WEIGHT,
};
