//! The closed set of tools the evaluator may call.

use serde::Serialize;
use serde_json::{json, Value};

use crate::agent::extraction::{extract_job_description, extract_resume};
use crate::agent::state::ConversationState;
use crate::errors::AppError;
use crate::llm_client::{ChatModel, ToolSpec};
use crate::models::{JobDescriptionRecord, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ResumeDataExtractor,
    JdDataExtractor,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::ResumeDataExtractor, Tool::JdDataExtractor];

    pub fn name(self) -> &'static str {
        match self {
            Tool::ResumeDataExtractor => "resume_data_extractor",
            Tool::JdDataExtractor => "JD_data_extractor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Name of the argument carrying the raw text.
    fn argument(self) -> &'static str {
        match self {
            Tool::ResumeDataExtractor => "resume",
            Tool::JdDataExtractor => "jd",
        }
    }

    pub fn spec(self) -> ToolSpec {
        let (description, argument_description) = match self {
            Tool::ResumeDataExtractor => (
                "Extracts the relevant information from a resume and returns an object with \
                 the keys: name (string), skills (list of strings), experience (number, years), \
                 email (string), phone (string), summary (string).",
                "The full resume text",
            ),
            Tool::JdDataExtractor => (
                "Extracts the relevant information from a job description and returns an object \
                 with the keys: job_role (string), required_skills (list of strings), \
                 experience (number, years), summary (string).",
                "The full job description text",
            ),
        };

        ToolSpec {
            name: self.name(),
            description,
            input_schema: json!({
                "type": "object",
                "properties": {
                    self.argument(): {
                        "type": "string",
                        "description": argument_description
                    }
                },
                "required": [self.argument()]
            }),
        }
    }

    pub fn specs() -> Vec<ToolSpec> {
        Self::ALL.into_iter().map(Tool::spec).collect()
    }

    /// Runs the extraction this tool stands for against the call's arguments.
    pub async fn invoke(
        self,
        model: &dyn ChatModel,
        arguments: &Value,
    ) -> Result<ToolOutput, AppError> {
        let input = arguments.get(self.argument()).unwrap_or(&Value::Null);
        match self {
            Tool::ResumeDataExtractor => extract_resume(model, input).await.map(ToolOutput::UserData),
            Tool::JdDataExtractor => extract_job_description(model, input).await.map(ToolOutput::Jd),
        }
    }
}

/// A tool's result, tagged with the state slot it fills.
/// Serializes as `{"user_data": …}` or `{"jd": …}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ToolOutput {
    #[serde(rename = "user_data")]
    UserData(Option<ResumeRecord>),
    #[serde(rename = "jd")]
    Jd(Option<JobDescriptionRecord>),
}

impl ToolOutput {
    pub fn payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Stores a produced record in its slot. An empty result keeps the previous one.
    pub fn merge_into(self, state: &mut ConversationState) {
        match self {
            ToolOutput::UserData(Some(record)) => state.user_data = Some(record),
            ToolOutput::Jd(Some(record)) => state.jd = Some(record),
            ToolOutput::UserData(None) | ToolOutput::Jd(None) => {}
        }
    }
}
