pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use crate::api::OddsApiClient;

pub use routes::router;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<OddsApiClient>,
    pub default_sport: Arc<str>,
}

impl AppState {
    pub fn new(client: OddsApiClient, default_sport: &str) -> Self {
        Self {
            client: Arc::new(client),
            default_sport: Arc::from(default_sport),
        }
    }
}
