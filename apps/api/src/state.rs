use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::outreach::email_composer::CandidateProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model-inference capability. `LlmClient` in production.
    pub llm: Arc<dyn ChatModel>,
    /// Persona used for every drafted email.
    pub profile: CandidateProfile,
}
