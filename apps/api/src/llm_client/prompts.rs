// Shared prompt utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("static regex"))
}

/// Substitutes `{name}` placeholders in `template` with the matching value.
///
/// Substitution is a single pass over the template: inserted values are never
/// re-scanned, and placeholders with no matching variable are left as written
/// (so literal JSON examples in a template survive untouched).
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let out = render("{a} and {a} then {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and x then y");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let out = render("{known} {unknown}", &[("known", "v")]);
        assert_eq!(out, "v {unknown}");
    }

    #[test]
    fn test_render_does_not_rescan_inserted_text() {
        let out = render("{page_data}|{b}", &[("page_data", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b}|B");
    }

    #[test]
    fn test_render_ignores_json_braces() {
        let template = "{\n  \"role\": \"Job Title\"\n}\n{page_data}";
        let out = render(template, &[("page_data", "text")]);
        assert_eq!(out, "{\n  \"role\": \"Job Title\"\n}\ntext");
    }
}
