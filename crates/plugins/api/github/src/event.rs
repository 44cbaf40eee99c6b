//! Loading the triggering event of a GitHub Actions run.

use std::path::Path;

use remote_link_core::{Error, Event, IssueEvent, Result};
use tracing::debug;

use crate::types::GitHubIssuesEvent;

/// Name GitHub uses for issue events in `GITHUB_EVENT_NAME`.
pub const ISSUES_EVENT: &str = "issues";

/// Read and decode the event payload at `path`.
pub fn load_event(name: &str, path: &Path) -> Result<Event> {
    debug!(event = name, path = ?path, "Loading event payload");

    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Event(format!(
            "Failed to read event payload {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_event(name, &contents)
}

/// Decode an event payload.
///
/// Only `issues` payloads are decoded; anything else becomes
/// [`Event::Unsupported`] without looking at the JSON.
pub fn parse_event(name: &str, json: &str) -> Result<Event> {
    match name {
        ISSUES_EVENT => {
            let raw: GitHubIssuesEvent = serde_json::from_str(json)
                .map_err(|e| Error::Event(format!("Invalid issues event payload: {}", e)))?;
            Ok(Event::Issues(IssueEvent::from(raw)))
        }
        other => Ok(Event::Unsupported {
            name: other.to_string(),
        }),
    }
}
