//! Common types shared between event sources and link providers.

use std::fmt;

// =============================================================================
// Inbound event
// =============================================================================

/// The CI event that triggered this run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An issue was created, edited, deleted, reopened, ...
    Issues(IssueEvent),
    /// Any event type the linker does not handle.
    Unsupported { name: String },
}

/// An issue event, already mapped from the source's raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueEvent {
    pub action: IssueAction,
    pub issue: IssueDetails,
    pub repository: Repository,
}

/// Action carried by an issue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueAction {
    Created,
    Edited,
    Deleted,
    Reopened,
    Other(String),
}

impl IssueAction {
    pub fn as_str(&self) -> &str {
        match self {
            IssueAction::Created => "created",
            IssueAction::Edited => "edited",
            IssueAction::Deleted => "deleted",
            IssueAction::Reopened => "reopened",
            IssueAction::Other(action) => action,
        }
    }
}

impl From<&str> for IssueAction {
    fn from(action: &str) -> Self {
        match action {
            "created" => IssueAction::Created,
            "edited" => IssueAction::Edited,
            "deleted" => IssueAction::Deleted,
            "reopened" => IssueAction::Reopened,
            other => IssueAction::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IssueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
}

impl IssueState {
    pub fn as_str(&self) -> &str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::Other(state) => state,
        }
    }
}

impl From<&str> for IssueState {
    fn from(state: &str) -> Self {
        match state {
            "open" => IssueState::Open,
            "closed" => IssueState::Closed,
            other => IssueState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of an issue the linker reads.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDetails {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub html_url: String,
    pub state: IssueState,
}

/// Repository the issue lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
}

// =============================================================================
// Outbound link
// =============================================================================

/// Display status attached to a remote link.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    pub title: String,
    pub resolved: bool,
    pub icon_url: String,
}

/// A remote link to register on a Jira issue, independent of wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteLink {
    /// Stable identifier; the same value upserts the same link.
    pub global_id: String,
    pub application: String,
    pub url: String,
    pub title: String,
    pub status: StatusInfo,
    pub relationship: String,
}
