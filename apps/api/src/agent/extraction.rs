//! Structured extraction: turns raw resume / job-description text into records.
//! The model does the extraction; field semantics live in each record's schema.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::STRUCTURED_EXTRACTION_SYSTEM;
use crate::llm_client::{call_structured, ChatModel, LlmError, ToolSpec};
use crate::models::{JobDescriptionRecord, ResumeRecord, StructuredRecord};

/// Extracts a `ResumeRecord`. Non-string input yields `None` without a model call.
pub async fn extract_resume(
    model: &dyn ChatModel,
    input: &Value,
) -> Result<Option<ResumeRecord>, AppError> {
    let Some(text) = input.as_str() else {
        return Ok(None);
    };
    let record = extract_record::<ResumeRecord>(model, text).await?;
    info!("Resume tool called");
    Ok(Some(record))
}

/// Extracts a `JobDescriptionRecord`. Non-string input yields `None` without a model call.
pub async fn extract_job_description(
    model: &dyn ChatModel,
    input: &Value,
) -> Result<Option<JobDescriptionRecord>, AppError> {
    let Some(text) = input.as_str() else {
        return Ok(None);
    };
    let record = extract_record::<JobDescriptionRecord>(model, text).await?;
    info!("JD tool called");
    Ok(Some(record))
}

async fn extract_record<T: StructuredRecord>(
    model: &dyn ChatModel,
    text: &str,
) -> Result<T, AppError> {
    let spec = ToolSpec {
        name: T::SCHEMA_NAME,
        description: T::DESCRIPTION,
        input_schema: T::schema(),
    };

    call_structured::<T>(model, STRUCTURED_EXTRACTION_SYSTEM, text, &spec)
        .await
        .map_err(|e| match e {
            LlmError::Parse(_) | LlmError::MissingToolCall(_) => {
                AppError::SchemaValidation(format!("{}: {e}", T::SCHEMA_NAME))
            }
            other => AppError::ModelInvocation(format!("{}: {other}", T::SCHEMA_NAME)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::ScriptedModel;
    use serde_json::json;

    fn resume_json() -> Value {
        json!({
            "name": "Ada Lovelace",
            "skills": ["Go", "gRPC"],
            "experience": 6.0,
            "email": "ada@example.com",
            "phone": "+1 555 0100",
            "summary": "Backend engineer"
        })
    }

    #[tokio::test]
    async fn test_resume_extraction_returns_model_record() {
        let model = ScriptedModel::new().with_structured("record_resume", resume_json());

        let record = extract_resume(&model, &json!("Ada Lovelace, 6 years Go"))
            .await
            .unwrap()
            .expect("record");

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.skills, vec!["Go", "gRPC"]);

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].forced_tool.as_deref(), Some("record_resume"));
        assert_eq!(calls[0].tool_names, vec!["record_resume"]);
        assert_eq!(calls[0].system, STRUCTURED_EXTRACTION_SYSTEM);
    }

    #[tokio::test]
    async fn test_non_text_input_yields_none_without_model_call() {
        let model = ScriptedModel::new();
        for input in [json!(null), json!(42), json!({"text": "x"}), json!(["a"])] {
            assert!(extract_resume(&model, &input).await.unwrap().is_none());
            assert!(extract_job_description(&model, &input)
                .await
                .unwrap()
                .is_none());
        }
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_schema_validation_error() {
        let model = ScriptedModel::new().with_structured(
            "record_job_description",
            json!({"job_role": "SRE", "required_skills": "Go", "experience": 3}),
        );

        let err = extract_job_description(&model, &json!("SRE, 3 years"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_model_failure_is_model_invocation_error() {
        // No scripted output registered → the mock fails the call.
        let model = ScriptedModel::new();
        let err = extract_resume(&model, &json!("resume text"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelInvocation(_)), "got {err:?}");
    }
}
