pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::agent::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route(
            "/static/agent-flow.svg",
            get(handlers::handle_agent_flow_diagram),
        )
        // Form submission (HTML)
        .route("/evaluate", post(handlers::handle_evaluate_form))
        // Evaluation API (JSON)
        .route("/api/v1/evaluate", post(handlers::handle_evaluate_api))
        .layer(upload_limit)
        .with_state(state)
}
