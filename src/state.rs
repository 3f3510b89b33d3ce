use std::sync::Arc;

use crate::config::Config;
use crate::gemini::{GeminiClient, GenerativeModel};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model: Arc<dyn GenerativeModel>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(GeminiClient::new(&config));
        Self { config, model }
    }

    /// Builds state around an alternative model implementation; used by
    /// tests to inject stubs.
    #[cfg(test)]
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        Self { config, model }
    }
}
