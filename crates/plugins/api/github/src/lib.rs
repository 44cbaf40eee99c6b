//! GitHub Actions integration for jira-remote-link.
//!
//! This crate reads the event that triggered a workflow run and reports
//! failures and notices back to the runner as workflow commands.

mod event;
mod reporter;
mod types;

pub use event::{load_event, parse_event, ISSUES_EVENT};
pub use reporter::ActionsReporter;
pub use types::*;

/// Environment variable holding the triggering event name.
pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";

/// Environment variable holding the path of the event payload file.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
