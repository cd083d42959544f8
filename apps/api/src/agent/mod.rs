// Job relevancy agent: an evaluator model that may call two extraction tools
// before producing a markdown verdict. All LLM calls go through llm_client.

pub mod extraction;
pub mod graph;
pub mod handlers;
pub mod prompts;
pub mod state;
pub mod submission;
pub mod tools;
