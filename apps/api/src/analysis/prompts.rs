// LLM prompt constants for the Analysis module.

/// Sampling temperature for extraction. Zero requests deterministic decoding.
pub const EXTRACTION_TEMPERATURE: f32 = 0.0;

/// Consolidated extraction prompt: job details, skills and work-authorization scan
/// in one pass. Replace `{page_data}` before sending.
pub const JOB_EXTRACT_PROMPT_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
You are an expert technical recruiter. Extract job details, technical requirements, and legal restrictions.

1. **Job Details**: Extract role, company, location, experience level, and a detailed description.
2. **Skills**: Identify ALL technical skills, tools, and methodologies (Languages, Cloud, DevOps, Agile, etc.).
3. **Work Authorization (CRITICAL)**: specific search for:
   - "U.S. Person" / "Citizen Only" / "Security Clearance"
   - "Green Card" / "Permanent Resident"
   - "No Sponsorship" / "No H1B" / "No CPT/OPT"

### OUTPUT FORMAT (STRICT JSON ONLY):
{
    "role": "Job Title",
    "company": "Company Name",
    "location": "City, State",
    "experience": "Junior/Senior/Years",
    "description": "Detailed summary...",
    "required_skills": ["Python", "React", "AWS", "Agile", "Git", "Docker"],
    "visa_analysis": {
        "green_card_only": boolean,
        "us_citizen_only": boolean,
        "no_h1b": boolean,
        "no_opt_cpt": boolean,
        "security_clearance": boolean,
        "analysis": "Quote the specific restriction found or 'No restrictions detected'"
    }
}"#;
