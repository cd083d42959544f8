use anyhow::anyhow;

use crate::errors::AppError;
use crate::llm_client::Message;
use crate::models::{JobDescriptionRecord, ResumeRecord};

/// Per-submission agent state.
///
/// Messages are append-only: `push` is the only way in, and nothing is ever
/// edited or removed. The record slots hold the latest extraction results.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    pub user_data: Option<ResumeRecord>,
    pub jd: Option<JobDescriptionRecord>,
}

impl ConversationState {
    /// Seeds a conversation with a single human message and empty record slots.
    pub fn seeded(message: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::Human(message.into())],
            user_data: None,
            jd: None,
        }
    }

    /// Appends a message. A tool result must answer a tool call made earlier
    /// in this conversation.
    pub fn push(&mut self, message: Message) -> Result<(), AppError> {
        if let Message::ToolResult { tool_call_id, .. } = &message {
            let requested = self
                .messages
                .iter()
                .flat_map(|m| m.pending_tool_calls())
                .any(|call| &call.id == tool_call_id);
            if !requested {
                return Err(AppError::Internal(anyhow!(
                    "tool result '{tool_call_id}' has no matching tool call"
                )));
            }
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
