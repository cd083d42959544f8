//! Provider-neutral conversation types shared by the agent and the LLM client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned id; a later `Message::ToolResult` echoes it back.
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// One entry in a conversation. System prompts are not part of the history;
/// they travel per turn in `ChatRequest::system`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Human(String),
    Ai {
        content: String,
        tool_calls: Vec<ToolCall>,
    },
    ToolResult {
        tool_call_id: String,
        name: String,
        payload: Value,
    },
}

impl Message {
    /// Tool calls still waiting for a result. Empty for every non-AI message.
    pub fn pending_tool_calls(&self) -> &[ToolCall] {
        match self {
            Message::Ai { tool_calls, .. } => tool_calls,
            _ => &[],
        }
    }
}

/// A tool the model may select, described by a JSON schema for its input.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolChoice<'a> {
    /// The model decides whether to call a tool.
    Auto,
    /// The model must call exactly this tool.
    Tool(&'a str),
}

/// Everything needed for one model turn.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub messages: &'a [Message],
    pub tools: &'a [ToolSpec],
    pub tool_choice: ToolChoice<'a>,
}

/// The model's reply, reduced to text plus requested tool calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatResponse {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

impl ChatResponse {
    pub fn into_message(self) -> Message {
        Message::Ai {
            content: self.content,
            tool_calls: self.tool_calls,
        }
    }
}
