//! Axum route handlers for the evaluation form and API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::agent::submission::{evaluate_submission, EvaluationReport, Submission};
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::{PageView, AGENT_FLOW_SVG};

/// GET /
///
/// The submission form with the informational panel.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.render(&PageView::idle())?))
}

/// POST /evaluate
///
/// Form submission. Renders the verdict, or the form again with the error.
pub async fn handle_evaluate_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    let upload_limit = state.config.max_upload_bytes;
    let submission = match Submission::from_multipart(multipart, upload_limit).await {
        Ok(submission) => submission,
        Err(e) => return render_error(&state, String::new(), e),
    };

    match evaluate_submission(&state.evaluator, &submission).await {
        Ok(report) => {
            let view = PageView::result(
                submission.job_description,
                &report.markdown,
                report.tools_used,
            );
            match state.pages.render(&view) {
                Ok(html) => Html(html).into_response(),
                Err(e) => e.into_response(),
            }
        }
        Err(e) => render_error(&state, submission.job_description, e),
    }
}

/// POST /api/v1/evaluate
///
/// Same multipart contract as the form; returns the report as JSON.
pub async fn handle_evaluate_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationReport>, AppError> {
    let submission =
        Submission::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let report = evaluate_submission(&state.evaluator, &submission).await?;
    Ok(Json(report))
}

/// GET /static/agent-flow.svg
pub async fn handle_agent_flow_diagram() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        AGENT_FLOW_SVG,
    )
}

fn render_error(state: &AppState, job_description: String, error: AppError) -> Response {
    let (status, _, message) = error.parts();
    match state.pages.render(&PageView::error(job_description, message)) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
