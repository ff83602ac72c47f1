//! City recommendation service
//!
//! Given a city the user has lived in, a city they dream of and a priority
//! feature, picks the single best matching city from a fixed catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use catalog::{Catalog, CatalogError};
pub use error::{AppError, AppResult};
pub use models::City;
pub use services::Recommender;
