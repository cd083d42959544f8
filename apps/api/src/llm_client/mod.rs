/// LLM Client: the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Callers depend on the `ChatModel` trait; `LlmClient` is the production backend.
///
/// Model: claude-sonnet-4-5 (hardcoded)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod mock;
pub mod prompts;
pub mod types;

pub use types::{ChatRequest, ChatResponse, Message, ToolCall, ToolChoice, ToolSpec};

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM did not call the '{0}' tool")]
    MissingToolCall(String),
}

/// A chat-completion backend with tool calling.
///
/// Carried in `AppState` as `Arc<dyn ChatModel>` so tests can script replies.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatResponse, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    system: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<AnthropicTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<AnthropicToolChoice<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: Vec<RequestBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RequestBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
    },
}

#[derive(Debug, Serialize)]
struct AnthropicTool<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicToolChoice<'a> {
    Auto,
    Tool { name: &'a str },
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Joins all text blocks and collects tool-use blocks in the order returned.
    fn into_chat_response(self) -> Result<ChatResponse, LlmError> {
        if self.content.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        let mut response = ChatResponse::default();
        for block in self.content {
            match block {
                ContentBlock::Text { text } => response.content.push_str(&text),
                ContentBlock::ToolUse { id, name, input } => response.tool_calls.push(ToolCall {
                    id,
                    name,
                    arguments: input,
                }),
                ContentBlock::Other => {}
            }
        }
        Ok(response)
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Converts the conversation into Anthropic's shape.
///
/// The system prompt goes into the top-level `system` field. Consecutive
/// turns with the same role are merged, which keeps every `tool_result` for one
/// assistant turn inside a single user turn.
fn build_request<'a>(request: &ChatRequest<'a>) -> AnthropicRequest<'a> {
    let system = request.system.trim().to_string();
    let mut messages: Vec<AnthropicMessage> = Vec::with_capacity(request.messages.len());

    for message in request.messages {
        let (role, blocks) = match message {
            Message::Human(text) => ("user", vec![RequestBlock::Text { text: text.clone() }]),
            Message::Ai {
                content,
                tool_calls,
            } => {
                let mut blocks = Vec::with_capacity(tool_calls.len() + 1);
                // Anthropic rejects empty text blocks.
                if !content.trim().is_empty() {
                    blocks.push(RequestBlock::Text {
                        text: content.clone(),
                    });
                }
                blocks.extend(tool_calls.iter().map(|call| RequestBlock::ToolUse {
                    id: call.id.clone(),
                    name: call.name.clone(),
                    input: call.arguments.clone(),
                }));
                ("assistant", blocks)
            }
            Message::ToolResult {
                tool_call_id,
                payload,
                ..
            } => (
                "user",
                vec![RequestBlock::ToolResult {
                    tool_use_id: tool_call_id.clone(),
                    content: payload.to_string(),
                }],
            ),
        };

        if blocks.is_empty() {
            continue;
        }

        match messages.last_mut() {
            Some(last) if last.role == role => last.content.extend(blocks),
            _ => messages.push(AnthropicMessage {
                role,
                content: blocks,
            }),
        }
    }

    let tools = request
        .tools
        .iter()
        .map(|tool| AnthropicTool {
            name: tool.name,
            description: tool.description,
            input_schema: &tool.input_schema,
        })
        .collect::<Vec<_>>();

    let tool_choice = if tools.is_empty() {
        None
    } else {
        Some(match request.tool_choice {
            ToolChoice::Auto => AnthropicToolChoice::Auto,
            ToolChoice::Tool(name) => AnthropicToolChoice::Tool { name },
        })
    };

    AnthropicRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        system,
        messages,
        tools,
        tool_choice,
    }
}

/// The production LLM client.
/// Wraps the Anthropic Messages API. Failures are returned to the caller as-is;
/// there is no retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: ANTHROPIC_API_URL.to_string(),
        })
    }

    /// Points the client at a different Messages endpoint (proxies, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(&self, request: &ChatRequest<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}, stop_reason={:?}",
            llm_response.usage.input_tokens,
            llm_response.usage.output_tokens,
            llm_response.stop_reason
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        self.call(&request).await?.into_chat_response()
    }
}

/// Asks the model to fill `schema` from `input` and deserializes the result.
///
/// The schema is offered as the only tool and the model is forced to call it,
/// so the tool arguments are the structured output.
pub async fn call_structured<T: DeserializeOwned>(
    model: &dyn ChatModel,
    system: &str,
    input: &str,
    schema: &ToolSpec,
) -> Result<T, LlmError> {
    let messages = [Message::Human(input.to_string())];
    let response = model
        .chat(ChatRequest {
            system,
            messages: &messages,
            tools: std::slice::from_ref(schema),
            tool_choice: ToolChoice::Tool(schema.name),
        })
        .await?;

    let call = response
        .tool_calls
        .into_iter()
        .find(|call| call.name == schema.name)
        .ok_or_else(|| LlmError::MissingToolCall(schema.name.to_string()))?;

    serde_json::from_value(call.arguments).map_err(LlmError::Parse)
}
