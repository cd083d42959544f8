//! Scripted `ChatModel` for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ChatModel, ChatRequest, ChatResponse, LlmError, Message, ToolCall, ToolChoice};

/// What the mock saw on one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub messages: Vec<Message>,
    pub tool_names: Vec<String>,
    pub forced_tool: Option<String>,
}

/// Replies to free-choice turns from a queue, and to forced-tool turns with a
/// fixed argument object per tool name.
#[derive(Default)]
pub struct ScriptedModel {
    turns: Mutex<VecDeque<ChatResponse>>,
    structured: HashMap<String, Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next evaluator reply.
    pub fn with_turn(self, response: ChatResponse) -> Self {
        self.turns.lock().unwrap().push_back(response);
        self
    }

    /// Queues an evaluator reply that requests the given tools.
    pub fn with_tool_turn(self, calls: &[(&str, &str, Value)]) -> Self {
        let tool_calls = calls
            .iter()
            .map(|(id, name, arguments)| ToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: arguments.clone(),
            })
            .collect();
        self.with_turn(ChatResponse {
            content: String::new(),
            tool_calls,
        })
    }

    /// Queues a final evaluator answer.
    pub fn with_final(self, markdown: &str) -> Self {
        self.with_turn(ChatResponse {
            content: markdown.to_string(),
            tool_calls: Vec::new(),
        })
    }

    /// Registers the arguments returned whenever `tool` is forced.
    pub fn with_structured(mut self, tool: &str, arguments: Value) -> Self {
        self.structured.insert(tool.to_string(), arguments);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn forced_calls(&self, tool: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.forced_tool.as_deref() == Some(tool))
            .count()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let forced_tool = match request.tool_choice {
            ToolChoice::Tool(name) => Some(name.to_string()),
            ToolChoice::Auto => None,
        };
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            messages: request.messages.to_vec(),
            tool_names: request.tools.iter().map(|t| t.name.to_string()).collect(),
            forced_tool: forced_tool.clone(),
        });

        match forced_tool {
            Some(name) => {
                let arguments = self.structured.get(&name).cloned().ok_or(LlmError::Api {
                    status: 500,
                    message: format!("no scripted output for {name}"),
                })?;
                Ok(ChatResponse {
                    content: String::new(),
                    tool_calls: vec![ToolCall {
                        id: format!("forced_{name}"),
                        name,
                        arguments,
                    }],
                })
            }
            None => self
                .turns
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::EmptyContent),
        }
    }
}
