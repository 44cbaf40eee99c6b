//! Jira issue key extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Jira issue key: 1-5 uppercase letters, a hyphen, digits.
static JIRA_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{1,5}-[0-9]+").expect("Invalid Jira key regex"));

/// Find every Jira key in `text`, left to right, duplicates included.
pub fn find_jira_keys(text: &str) -> Vec<String> {
    JIRA_KEY_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keys referenced by an issue: body matches first, then title matches.
///
/// Keys mentioned in both places are returned twice.
pub fn issue_keys(title: &str, body: &str) -> Vec<String> {
    let mut keys = find_jira_keys(body);
    keys.extend(find_jira_keys(title));
    keys
}
