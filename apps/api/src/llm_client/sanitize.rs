//! Cleanup of raw model completions before they are parsed or returned.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn think_span() -> &'static Regex {
    static THINK_SPAN: OnceLock<Regex> = OnceLock::new();
    THINK_SPAN.get_or_init(|| Regex::new(r"(?s)<think>.*?</think>").expect("static regex"))
}

/// Strips markdown code fences and `<think>...</think>` reasoning spans, then trims.
/// The result is not guaranteed to be valid JSON.
pub fn sanitize_output(raw: &str) -> String {
    let mut text = raw.to_string();
    if text.contains("```") {
        text = text.replace("```json", "").replace("```", "");
    }
    think_span().replace_all(&text, "").trim().to_string()
}

/// Best-effort recovery of a JSON value from model text.
///
/// Tries, in order: the whole text; the slice from the first `{` to the last `}`;
/// the first complete JSON value starting at the first `{` (tolerates trailing
/// prose that itself contains braces).
pub fn recover_json_object(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    let start = text.find('{')?;
    if let Some(end) = text.rfind('}').filter(|&end| end > start) {
        if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
            return Some(value);
        }
    }

    serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<Value>()
        .next()
        .and_then(Result::ok)
}
