use std::sync::LazyLock;

use regex::Regex;

static FAILED_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+failed").expect("static regex must compile"));
static PASSED_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+passed").expect("static regex must compile"));

/// Remove `prefix` from the start of `text` and trim what remains.
///
/// Exact, case-sensitive match. Text without the prefix comes back untouched.
pub fn strip_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.strip_prefix(prefix) {
        Some(rest) => rest.trim(),
        None => text,
    }
}

/// Pull `(failed, passed)` out of a summary detail such as `2 failed, 4 skipped, 98 passed`.
///
/// Each count is searched for on its own; a missing one is 0.
pub fn extract_pair_counts(detail: &str) -> (u32, u32) {
    (first_count(&FAILED_COUNT_RE, detail), first_count(&PASSED_COUNT_RE, detail))
}

fn first_count(re: &Regex, text: &str) -> u32 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Collapse a node's text to a trimmed string, `None` when nothing is left.
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
