//! Job Analyzer — extracts job metadata, required skills and work-authorization
//! flags from scraped posting text in a single model call.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::analysis::normalize::normalize_skills;
use crate::analysis::prompts::{EXTRACTION_TEMPERATURE, JOB_EXTRACT_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::render;
use crate::llm_client::sanitize::{recover_json_object, sanitize_output};
use crate::llm_client::ChatModel;

pub const PARSE_FAILURE_MESSAGE: &str = "Unable to parse job analysis";

/// Work-authorization restrictions found in the posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaAnalysis {
    #[serde(default)]
    pub green_card_only: bool,
    #[serde(default)]
    pub us_citizen_only: bool,
    #[serde(default)]
    pub no_h1b: bool,
    #[serde(default)]
    pub no_opt_cpt: bool,
    #[serde(default)]
    pub security_clearance: bool,
    /// Quoted restriction, or the model's statement that none was found.
    #[serde(default)]
    pub analysis: String,
}

impl VisaAnalysis {
    /// True when any restriction flag is set.
    pub fn is_restricted(&self) -> bool {
        self.green_card_only
            || self.us_citizen_only
            || self.no_h1b
            || self.no_opt_cpt
            || self.security_clearance
    }
}

/// Structured result of analyzing one job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub normalized_required_skills: BTreeSet<String>,
    #[serde(default)]
    pub visa_analysis: VisaAnalysis,
    /// Any other keys the model emitted, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const KNOWN_FIELDS: &[&str] = &[
    "role",
    "company",
    "location",
    "experience",
    "description",
    "required_skills",
    "normalized_required_skills",
    "visa_analysis",
];

/// Analyzes scraped posting text with one zero-temperature model call.
///
/// Fails with `AppError::Parse` only when the completion cannot be recovered as a
/// JSON object. Model failures propagate unchanged as `AppError::Llm`.
pub async fn analyze_job(llm: &dyn ChatModel, scraped_text: &str) -> Result<JobRecord, AppError> {
    info!("Analyzing job posting ({} chars)", scraped_text.len());

    let prompt = render(JOB_EXTRACT_PROMPT_TEMPLATE, &[("page_data", scraped_text)]);
    let raw = llm.invoke(&prompt, EXTRACTION_TEMPERATURE).await?;
    debug!("Raw job analysis completion: {raw}");

    let parsed = parse_job_json(&sanitize_output(&raw))?;
    let record = job_record_from_value(parsed)?;

    info!(
        "Job analyzed: role={:?}, company={:?}, {} skills ({} normalized)",
        record.role,
        record.company,
        record.required_skills.len(),
        record.normalized_required_skills.len()
    );
    if record.visa_analysis.is_restricted() {
        info!(
            "Work-authorization restriction detected: {}",
            record.visa_analysis.analysis
        );
    }

    Ok(record)
}

/// Parses sanitized model text, falling back to JSON recovery.
pub fn parse_job_json(sanitized: &str) -> Result<Value, AppError> {
    if let Ok(value) = serde_json::from_str::<Value>(sanitized) {
        return Ok(value);
    }

    warn!("Job analysis was not clean JSON, attempting recovery");
    recover_json_object(sanitized).ok_or_else(|| AppError::Parse(PARSE_FAILURE_MESSAGE.to_string()))
}

/// Builds a `JobRecord` from the parsed model object without validating it.
/// Missing text fields become empty, missing flags become `false`.
pub fn job_record_from_value(value: Value) -> Result<JobRecord, AppError> {
    let Value::Object(mut obj) = value else {
        return Err(AppError::Parse(PARSE_FAILURE_MESSAGE.to_string()));
    };

    let required_skills = match obj.get("required_skills") {
        Some(Value::Array(items)) => items.iter().filter_map(skill_text).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!("required_skills is not an array ({other}), treating as empty");
            Vec::new()
        }
    };
    let normalized_required_skills = normalize_skills(&required_skills);

    let visa_analysis = obj
        .get("visa_analysis")
        .map(visa_from_value)
        .unwrap_or_default();

    let record = JobRecord {
        role: text_field(&obj, "role"),
        company: text_field(&obj, "company"),
        location: text_field(&obj, "location"),
        experience: text_field(&obj, "experience"),
        description: text_field(&obj, "description"),
        required_skills,
        normalized_required_skills,
        visa_analysis,
        extra: Map::new(),
    };

    obj.retain(|key, _| !KNOWN_FIELDS.contains(&key.as_str()));
    Ok(JobRecord { extra: obj, ..record })
}

fn skill_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn visa_from_value(value: &Value) -> VisaAnalysis {
    let flag = |key: &str| value.get(key).and_then(Value::as_bool).unwrap_or(false);
    VisaAnalysis {
        green_card_only: flag("green_card_only"),
        us_citizen_only: flag("us_citizen_only"),
        no_h1b: flag("no_h1b"),
        no_opt_cpt: flag("no_opt_cpt"),
        security_clearance: flag("security_clearance"),
        analysis: value
            .get("analysis")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
