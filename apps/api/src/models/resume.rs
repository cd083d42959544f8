use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::StructuredRecord;

/// Candidate details pulled out of a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub skills: Vec<String>,
    /// Total work experience in years.
    pub experience: f64,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub summary: String,
}

impl StructuredRecord for ResumeRecord {
    const SCHEMA_NAME: &'static str = "record_resume";
    const DESCRIPTION: &'static str = "Record the information extracted from a resume.";

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "extract the name of the person"
                },
                "skills": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "extract list of the skills of the person"
                },
                "experience": {
                    "type": "number",
                    "description": "extract the total work experience of the person"
                },
                "email": {
                    "type": "string",
                    "description": "extract the email of the person"
                },
                "phone": {
                    "type": "string",
                    "description": "extract the phone number of the person"
                },
                "summary": {
                    "type": "string",
                    "description": "extract the profile summary of the person"
                }
            },
            "required": ["name", "skills", "experience", "email", "phone"]
        })
    }
}
