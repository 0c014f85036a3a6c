// Job posting analysis: extraction prompt, JSON recovery and skill normalization.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod job_analyzer;
pub mod normalize;
pub mod prompts;
