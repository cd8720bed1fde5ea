pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use services::gemini::GeminiClient;
use std::sync::Arc;

/// Shared application state.
///
/// `gemini` is `None` when no API key was configured at startup; every query
/// is then answered with the canned "not configured" reply instead of failing
/// the process.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    pub fn new(gemini: Option<Arc<GeminiClient>>) -> Self {
        Self { gemini }
    }
}
