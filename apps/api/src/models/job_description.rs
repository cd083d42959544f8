use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::StructuredRecord;

/// Role requirements pulled out of a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionRecord {
    pub job_role: String,
    pub required_skills: Vec<String>,
    /// Years of experience the role asks for.
    pub experience: f64,
    #[serde(default)]
    pub summary: String,
}

impl StructuredRecord for JobDescriptionRecord {
    const SCHEMA_NAME: &'static str = "record_job_description";
    const DESCRIPTION: &'static str = "Record the information extracted from a job description.";

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "job_role": {
                    "type": "string",
                    "description": "extract the name of the Job role"
                },
                "required_skills": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "extract the required skills for the job role"
                },
                "experience": {
                    "type": "number",
                    "description": "extract the total work experience required for the job role"
                },
                "summary": {
                    "type": "string",
                    "description": "extract the summary and responsibilities of the role"
                }
            },
            "required": ["job_role", "required_skills", "experience"]
        })
    }
}
