//! Skill token normalization — canonical lowercase tokens for comparing job
//! requirements against portfolio tech stacks ("React.js" and "react" meet as "react").

use std::collections::BTreeSet;
use std::fmt::Display;

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '+' | '#')
}

fn normalize_once(token: &str) -> String {
    let lowered = token.to_lowercase();
    let without_dots: String = lowered.trim().chars().filter(|&c| c != '.').collect();
    let without_suffix = without_dots.strip_suffix("js").unwrap_or(&without_dots);
    let filtered: String = without_suffix.chars().filter(|&c| is_token_char(c)).collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a skill token: lowercase, drop periods, drop a trailing "js",
/// keep only `[a-z0-9 +#]`, collapse whitespace.
///
/// Applied until the token is stable, so the result is always a fixed point
/// (`"nodejsjs"` becomes `"node"`, not `"nodejs"`).
pub fn normalize_token(token: impl Display) -> String {
    let mut current = normalize_once(&token.to_string());
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Normalizes every skill and collects the distinct, non-empty tokens.
pub fn normalize_skills<I>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    skills
        .into_iter()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}
