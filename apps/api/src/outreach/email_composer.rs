//! Email Composer — drafts a cold outreach email body for an analyzed job.
//!
//! Output is free text: no JSON parsing, only sanitization of fences and
//! reasoning spans.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::render;
use crate::llm_client::sanitize::sanitize_output;
use crate::llm_client::ChatModel;
use crate::outreach::prompts::{COLD_EMAIL_PROMPT_TEMPLATE, EMAIL_TEMPERATURE};

/// The persona the email is written as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    /// Completes "You are {name}, ...".
    pub background: String,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            name: "Jemil Dharia".to_string(),
            background: "a Master's student in Computer Science at Arizona State University"
                .to_string(),
        }
    }
}

/// Renders the cold email prompt. `job` is serialized whole as JSON for context.
pub fn build_email_prompt<J: Serialize + ?Sized>(
    profile: &CandidateProfile,
    job: &J,
    links: &str,
    matched_skills: &[String],
) -> Result<String, AppError> {
    let job_description =
        serde_json::to_string(job).context("Failed to serialize job for email prompt")?;
    let matched = matched_skills.join(", ");

    Ok(render(
        COLD_EMAIL_PROMPT_TEMPLATE,
        &[
            ("job_description", job_description.as_str()),
            ("matched_skills", matched.as_str()),
            ("link_list", links),
            ("candidate_name", profile.name.as_str()),
            ("candidate_background", profile.background.as_str()),
        ],
    ))
}

/// Drafts the email body with a single model call and returns the sanitized text.
pub async fn write_mail<J: Serialize + ?Sized>(
    llm: &dyn ChatModel,
    profile: &CandidateProfile,
    job: &J,
    links: &str,
    matched_skills: &[String],
) -> Result<String, AppError> {
    let prompt = build_email_prompt(profile, job, links, matched_skills)?;
    info!(
        "Drafting cold email ({} matched skills) as {}",
        matched_skills.len(),
        profile.name
    );

    let raw = llm.invoke(&prompt, EMAIL_TEMPERATURE).await?;
    Ok(sanitize_output(&raw))
}
