use std::sync::Arc;

use crate::catalog::Catalog;
use crate::services::Recommender;

/// Shared application state
///
/// The catalog is loaded once before the server starts and is only read
/// afterwards, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            recommender: Recommender::new(Arc::new(catalog)),
        }
    }
}
