//! Server-rendered pages: the submission form, the informational panel and
//! the evaluation result.

pub mod markdown;

use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::AppError;

pub use markdown::render_markdown;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");
/// Flow diagram shown on the idle page.
pub const AGENT_FLOW_SVG: &str = include_str!("../../static/agent-flow.svg");

/// Everything the page template can show.
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    /// Echoed back into the textarea after a submission.
    pub job_description: String,
    /// Rendered HTML of the evaluator's answer.
    pub result_html: Option<String>,
    pub tools_used: Vec<String>,
    pub error: Option<String>,
}

impl PageView {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn result(job_description: String, markdown: &str, tools_used: Vec<String>) -> Self {
        Self {
            job_description,
            result_html: Some(render_markdown(markdown)),
            tools_used,
            error: None,
        }
    }

    pub fn error(job_description: String, message: String) -> Self {
        Self {
            job_description,
            error: Some(message),
            ..Self::default()
        }
    }
}

/// Template registry, built once at startup.
pub struct Pages {
    hb: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, AppError> {
        let mut hb = Handlebars::new();
        hb.register_template_string("page", PAGE_TEMPLATE)
            .map_err(|e| AppError::Render(e.to_string()))?;
        Ok(Self { hb })
    }

    pub fn render(&self, view: &PageView) -> Result<String, AppError> {
        self.hb
            .render("page", view)
            .map_err(|e| AppError::Render(e.to_string()))
    }
}
