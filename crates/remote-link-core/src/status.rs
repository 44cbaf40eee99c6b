//! Mapping from issue action/state to the status shown on a remote link.

use crate::types::{IssueAction, IssueState, StatusInfo};
use crate::{Error, Result};

/// Icon shown while the issue is open.
pub const ICON_OPENED: &str =
    "https://raw.githubusercontent.com/carlsberg/jira-remote-link-action/main/assets/opened.png?raw=true";

/// Icon shown once the issue is closed.
pub const ICON_CLOSED: &str =
    "https://raw.githubusercontent.com/carlsberg/jira-remote-link-action/main/assets/closed.png?raw=true";

/// Icon shown when the issue has been reopened.
pub const ICON_REOPENED: &str =
    "https://raw.githubusercontent.com/carlsberg/jira-remote-link-action/main/assets/reopened.png?raw=true";

/// Resolve the link status for an event.
///
/// A `reopened` action wins over the issue state; otherwise the state decides.
pub fn resolve_status(action: &IssueAction, state: &IssueState) -> Result<StatusInfo> {
    let (title, resolved, icon_url) = match (action, state) {
        (IssueAction::Reopened, _) => ("Reopened", false, ICON_REOPENED),
        (_, IssueState::Open) => ("Opened", false, ICON_OPENED),
        (_, IssueState::Closed) => ("Closed", true, ICON_CLOSED),
        (_, IssueState::Other(_)) => {
            return Err(Error::StatusUnresolvable {
                action: action.to_string(),
                state: state.to_string(),
            })
        }
    };

    Ok(StatusInfo {
        title: title.to_string(),
        resolved,
        icon_url: icon_url.to_string(),
    })
}
