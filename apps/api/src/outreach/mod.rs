// Cold outreach drafting. Consumes an analyzed job plus externally matched
// skills and portfolio links; all LLM calls go through llm_client.

pub mod email_composer;
pub mod handlers;
pub mod prompts;
