// LLM prompt constants for the Outreach module.

/// Sampling temperature for email drafting.
pub const EMAIL_TEMPERATURE: f32 = 0.0;

/// Cold email prompt template.
/// Replace: {job_description}, {matched_skills}, {link_list}, {candidate_name},
///          {candidate_background}
pub const COLD_EMAIL_PROMPT_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### CANDIDATE'S MATCHING SKILLS:
{matched_skills}

### CANDIDATE'S PORTFOLIO LINKS:
{link_list}

### INSTRUCTION:
You are {candidate_name}, {candidate_background}.
Write a cold email to the hiring manager.

Guidelines:
1. Keep it professional but concise.
2. Mention the company name if available.
3. Connect your {matched_skills} to their requirements.
4. Do not include a subject line in the body."#;
