//! GitHub webhook payload types.
//!
//! These types represent the raw JSON event payloads GitHub Actions writes to
//! `GITHUB_EVENT_PATH`. They are deserialized and then mapped to unified types.

use remote_link_core::{IssueAction, IssueDetails, IssueEvent, IssueState, Repository};
use serde::Deserialize;

// =============================================================================
// Issues event
// =============================================================================

/// Payload of an `issues` event.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssuesEvent {
    pub action: String,
    pub issue: GitHubIssue,
    pub repository: GitHubRepository,
}

/// GitHub issue representation.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
    pub number: u64,
    pub title: String,
    /// `null` when the issue was opened without a description
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    pub state: String,
}

/// GitHub repository representation.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepository {
    pub full_name: String,
}

// =============================================================================
// Mapping to unified types
// =============================================================================

impl From<GitHubIssuesEvent> for IssueEvent {
    fn from(event: GitHubIssuesEvent) -> Self {
        IssueEvent {
            action: IssueAction::from(event.action.as_str()),
            issue: IssueDetails {
                number: event.issue.number,
                title: event.issue.title,
                body: event.issue.body.unwrap_or_default(),
                html_url: event.issue.html_url,
                state: IssueState::from(event.issue.state.as_str()),
            },
            repository: Repository {
                full_name: event.repository.full_name,
            },
        }
    }
}
