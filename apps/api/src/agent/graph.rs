//! The evaluator ⇄ tool-execution loop.

use std::sync::Arc;

use anyhow::anyhow;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::agent::prompts::EVALUATOR_SYSTEM;
use crate::agent::state::ConversationState;
use crate::agent::tools::Tool;
use crate::errors::AppError;
use crate::llm_client::{ChatModel, ChatRequest, Message, ToolCall, ToolChoice, ToolSpec};

enum Phase {
    Evaluating,
    ExecutingTools(Vec<ToolCall>),
    Done,
}

/// Result of a finished run.
#[derive(Debug)]
pub struct Evaluation {
    /// Content of the final AI message.
    pub markdown: String,
    pub state: ConversationState,
    /// Names of the tools that ran, in execution order.
    pub tools_used: Vec<String>,
    /// Number of evaluator turns.
    pub iterations: usize,
}

/// Drives the evaluator model until it answers without requesting a tool.
#[derive(Clone)]
pub struct Evaluator {
    model: Arc<dyn ChatModel>,
    tools: Vec<ToolSpec>,
    max_iterations: usize,
}

impl Evaluator {
    pub fn new(model: Arc<dyn ChatModel>, max_iterations: usize) -> Self {
        Self {
            model,
            tools: Tool::specs(),
            max_iterations,
        }
    }

    pub async fn run(&self, mut state: ConversationState) -> Result<Evaluation, AppError> {
        let mut phase = Phase::Evaluating;
        let mut iterations = 0;
        let mut tools_used = Vec::new();

        loop {
            phase = match phase {
                Phase::Evaluating => {
                    if iterations >= self.max_iterations {
                        return Err(AppError::IterationLimit(self.max_iterations));
                    }
                    iterations += 1;

                    let message = self.evaluate(&state).await?;
                    let pending = message.pending_tool_calls().to_vec();
                    state.push(message)?;

                    if pending.is_empty() {
                        debug!(iterations, "Evaluator answered, stopping");
                        Phase::Done
                    } else {
                        debug!(iterations, requested = pending.len(), "Evaluator requested tools");
                        Phase::ExecutingTools(pending)
                    }
                }
                Phase::ExecutingTools(calls) => {
                    for call in calls {
                        self.execute(&mut state, call, &mut tools_used).await?;
                    }
                    Phase::Evaluating
                }
                Phase::Done => break,
            };
        }

        let markdown = match state.last() {
            Some(Message::Ai {
                content,
                tool_calls,
            }) if tool_calls.is_empty() => content.clone(),
            _ => {
                return Err(AppError::Internal(anyhow!(
                    "evaluation finished without a final answer"
                )))
            }
        };

        info!("TOOL Used: {:?}", tools_used);

        Ok(Evaluation {
            markdown,
            state,
            tools_used,
            iterations,
        })
    }

    async fn evaluate(&self, state: &ConversationState) -> Result<Message, AppError> {
        info!("Job relevancy agent called");
        let response = self
            .model
            .chat(ChatRequest {
                system: EVALUATOR_SYSTEM,
                messages: state.messages(),
                tools: &self.tools,
                tool_choice: ToolChoice::Auto,
            })
            .await
            .map_err(|e| AppError::ModelInvocation(format!("evaluator: {e}")))?;
        Ok(response.into_message())
    }

    async fn execute(
        &self,
        state: &mut ConversationState,
        call: ToolCall,
        tools_used: &mut Vec<String>,
    ) -> Result<(), AppError> {
        let payload = match Tool::from_name(&call.name) {
            Some(tool) => {
                let output = tool.invoke(self.model.as_ref(), &call.arguments).await?;
                let payload = output.payload();
                output.merge_into(state);
                tools_used.push(call.name.clone());
                payload
            }
            None => {
                warn!(tool = %call.name, "Evaluator requested an unknown tool");
                json!({ "error": format!("unknown tool '{}'", call.name) })
            }
        };

        state.push(Message::ToolResult {
            tool_call_id: call.id,
            name: call.name,
            payload,
        })
    }
}
