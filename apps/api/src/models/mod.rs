pub mod job_description;
pub mod resume;

pub use job_description::JobDescriptionRecord;
pub use resume::ResumeRecord;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A record the model fills in from free-form text.
///
/// The JSON schema's field descriptions are the extraction instructions; the
/// model, not this crate, decides what "total work experience" means.
pub trait StructuredRecord: DeserializeOwned + Send {
    /// Name of the forced tool that carries the schema.
    const SCHEMA_NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn schema() -> Value;
}
