//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::outreach::email_composer::write_mail;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WriteMailRequest {
    /// Any job representation; usually the `job` returned by the analyze endpoint.
    pub job: Value,
    /// Portfolio links, already formatted by the caller.
    #[serde(default)]
    pub links: String,
    #[serde(default)]
    pub matched_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WriteMailResponse {
    pub email: String,
}

/// POST /api/v1/emails
///
/// Drafts a cold email body (no subject line) for the given job.
pub async fn handle_write_mail(
    State(state): State<AppState>,
    Json(request): Json<WriteMailRequest>,
) -> Result<Json<WriteMailResponse>, AppError> {
    if request.job.is_null() {
        return Err(AppError::Validation("job is required".to_string()));
    }

    let email = write_mail(
        state.llm.as_ref(),
        &state.profile,
        &request.job,
        &request.links,
        &request.matched_skills,
    )
    .await?;

    Ok(Json(WriteMailResponse { email }))
}
