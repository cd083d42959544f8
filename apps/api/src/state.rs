use std::sync::Arc;

use crate::agent::graph::Evaluator;
use crate::config::Config;
use crate::web::Pages;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; each submission keeps its own conversation state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Evaluator loop bound to the process-wide `ChatModel`.
    pub evaluator: Evaluator,
    pub pages: Arc<Pages>,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(model: Arc<dyn crate::llm_client::ChatModel>) -> Self {
        let config = Config::for_tests();
        Self {
            evaluator: Evaluator::new(model, config.max_agent_iterations),
            pages: Arc::new(Pages::new().expect("page templates")),
            config,
        }
    }
}
