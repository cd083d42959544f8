use anyhow::{ensure, Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Messages endpoint; overridable for proxies.
    pub anthropic_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on evaluator turns per submission.
    pub max_agent_iterations: usize,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| ANTHROPIC_API_URL.to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_agent_iterations: parse_env("AGENT_MAX_ITERATIONS", 8)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.max_agent_iterations >= 1,
            "AGENT_MAX_ITERATIONS must be at least 1, got {}",
            self.max_agent_iterations
        );
        ensure!(
            self.max_upload_bytes >= 1,
            "MAX_UPLOAD_BYTES must be at least 1"
        );
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config used by unit tests; never touches the process environment.
    pub fn for_tests() -> Self {
        Config {
            anthropic_api_key: "test-key".to_string(),
            anthropic_api_url: ANTHROPIC_API_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_agent_iterations: 4,
            llm_timeout_secs: 5,
            max_upload_bytes: 1024 * 1024,
        }
    }
}
