//! One form submission: PDF → text → seeded conversation → evaluator run.

use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::agent::graph::Evaluator;
use crate::agent::prompts::submission_message;
use crate::agent::state::ConversationState;
use crate::document::{extract_text_blocking, is_pdf};
use crate::errors::AppError;
use crate::models::{JobDescriptionRecord, ResumeRecord};

/// A file part from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// The decoded form: free-text job description plus an optional resume file.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub job_description: String,
    pub resume: Option<UploadedFile>,
}

impl Submission {
    /// Reads the `job_description` and `resume` parts; other parts are ignored.
    /// A file part with no bytes counts as no file (browsers send one when
    /// nothing was picked). `upload_limit` is the body cap the router enforces,
    /// reported back when a body runs past it.
    pub async fn from_multipart(
        mut multipart: Multipart,
        upload_limit: usize,
    ) -> Result<Self, AppError> {
        let read_error = |e: MultipartError| multipart_error(e, upload_limit);
        let mut submission = Submission::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(read_error)?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("job_description") => {
                    submission.job_description = field
                        .text()
                        .await
                        .map_err(read_error)?;
                }
                Some("resume") => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(read_error)?;
                    if !bytes.is_empty() {
                        submission.resume = Some(UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(submission)
    }

    /// The attached resume, if it is present and looks like a PDF.
    pub fn resume_pdf(&self) -> Result<&UploadedFile, AppError> {
        let file = self
            .resume
            .as_ref()
            .ok_or_else(|| AppError::Validation("A resume PDF is required".to_string()))?;

        if !is_pdf(file.content_type.as_deref(), &file.bytes) {
            return Err(AppError::Validation(format!(
                "'{}' is not a PDF file",
                file.file_name.as_deref().unwrap_or("resume")
            )));
        }
        Ok(file)
    }
}

fn multipart_error(e: MultipartError, upload_limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge(upload_limit)
    } else {
        AppError::Validation(e.body_text())
    }
}

/// What a finished evaluation reports back to callers.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: Uuid,
    pub markdown: String,
    pub tools_used: Vec<String>,
    pub iterations: usize,
    pub resume: Option<ResumeRecord>,
    pub job_description: Option<JobDescriptionRecord>,
    pub evaluated_at: DateTime<Utc>,
}

/// Runs the whole pipeline for one submission. Nothing outlives the call.
pub async fn evaluate_submission(
    evaluator: &Evaluator,
    submission: &Submission,
) -> Result<EvaluationReport, AppError> {
    let evaluation_id = Uuid::new_v4();
    let span = info_span!("evaluation", %evaluation_id);

    async move {
        let resume = submission.resume_pdf()?;
        let resume_text = extract_text_blocking(resume.bytes.clone()).await?;
        info!(
            resume_chars = resume_text.chars().count(),
            jd_chars = submission.job_description.chars().count(),
            "Starting evaluation"
        );

        let state =
            ConversationState::seeded(submission_message(&submission.job_description, &resume_text));
        let evaluation = evaluator.run(state).await?;

        info!(
            iterations = evaluation.iterations,
            "Evaluation finished"
        );

        Ok(EvaluationReport {
            evaluation_id,
            markdown: evaluation.markdown,
            tools_used: evaluation.tools_used,
            iterations: evaluation.iterations,
            resume: evaluation.state.user_data,
            job_description: evaluation.state.jd,
            evaluated_at: Utc::now(),
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::sample_pdf;
    use crate::llm_client::mock::ScriptedModel;
    use crate::llm_client::Message;
    use serde_json::json;
    use std::sync::Arc;

    fn pdf_submission(jd: &str, pages: &[&str]) -> Submission {
        Submission {
            job_description: jd.to_string(),
            resume: Some(UploadedFile {
                file_name: Some("resume.pdf".into()),
                content_type: Some("application/pdf".into()),
                bytes: Bytes::from(sample_pdf(pages)),
            }),
        }
    }

    #[test]
    fn test_missing_resume_is_rejected_regardless_of_jd() {
        for jd in ["", "Senior backend engineer, 5+ years Go"] {
            let submission = Submission {
                job_description: jd.into(),
                resume: None,
            };
            assert!(matches!(
                submission.resume_pdf(),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_non_pdf_upload_is_rejected() {
        let submission = Submission {
            job_description: "jd".into(),
            resume: Some(UploadedFile {
                file_name: Some("resume.docx".into()),
                content_type: Some("application/vnd.openxmlformats".into()),
                bytes: Bytes::from_static(b"PK\x03\x04"),
            }),
        };
        let err = submission.resume_pdf().unwrap_err();
        assert!(err.to_string().contains("resume.docx"));
    }

    #[tokio::test]
    async fn test_seed_message_combines_jd_and_resume_text() {
        let model = Arc::new(ScriptedModel::new().with_final("### Verdict\n✅ Yes"));
        let evaluator = Evaluator::new(model.clone(), 4);
        let submission = pdf_submission(
            "Senior backend engineer, 5+ years Go",
            &["Ada Lovelace", "6 years of Go"],
        );

        let report = evaluate_submission(&evaluator, &submission).await.unwrap();
        assert_eq!(report.markdown, "### Verdict\n✅ Yes");
        assert_eq!(report.iterations, 1);

        let calls = model.calls();
        match &calls[0].messages[..] {
            [Message::Human(text)] => {
                assert!(text.starts_with(
                    "This is the job description data:\nSenior backend engineer, 5+ years Go"
                ));
                let jd_at = text.find("This is the resume data:").unwrap();
                assert!(text[jd_at..].contains("Ada Lovelace"));
                assert!(text[jd_at..].contains("6 years of Go"));
            }
            other => panic!("unexpected seed: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_report_carries_extracted_records() {
        let model = Arc::new(
            ScriptedModel::new()
                .with_tool_turn(&[("t1", "resume_data_extractor", json!({"resume": "Ada"}))])
                .with_final("✅")
                .with_structured(
                    "record_resume",
                    json!({
                        "name": "Ada Lovelace",
                        "skills": ["Go"],
                        "experience": 6,
                        "email": "ada@example.com",
                        "phone": "555-0100"
                    }),
                ),
        );
        let evaluator = Evaluator::new(model, 4);

        let report = evaluate_submission(&evaluator, &pdf_submission("Go", &["Ada"]))
            .await
            .unwrap();
        assert_eq!(report.resume.unwrap().name, "Ada Lovelace");
        assert!(report.job_description.is_none());
        assert_eq!(report.tools_used, vec!["resume_data_extractor"]);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_aborts_before_any_model_call() {
        let model = Arc::new(ScriptedModel::new().with_final("unused"));
        let evaluator = Evaluator::new(model.clone(), 4);
        let submission = Submission {
            job_description: "jd".into(),
            resume: Some(UploadedFile {
                file_name: Some("broken.pdf".into()),
                content_type: Some("application/pdf".into()),
                bytes: Bytes::from_static(b"%PDF-1.4 truncated"),
            }),
        };

        let err = evaluate_submission(&evaluator, &submission).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)), "got {err:?}");
        assert!(model.calls().is_empty());
    }
}
