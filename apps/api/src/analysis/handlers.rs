//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::job_analyzer::{analyze_job, JobRecord};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    pub scraped_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub job: JobRecord,
}

/// POST /api/v1/jobs/analyze
///
/// Extracts job details, skills and work-authorization flags from scraped page text.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    if request.scraped_text.trim().is_empty() {
        return Err(AppError::Validation(
            "scraped_text cannot be empty".to_string(),
        ));
    }

    let job = analyze_job(state.llm.as_ref(), &request.scraped_text).await?;

    Ok(Json(AnalyzeJobResponse { job }))
}
