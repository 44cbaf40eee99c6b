//! Links GitHub issues to the Jira issues they mention.
//!
//! For every `created`/`edited` issue event the linker extracts Jira keys from
//! the issue body and title, resolves the link status once, and asks the
//! provider to register one remote link per key. A failing key is reported
//! and the remaining keys are still published.

use tracing::{debug, info, warn};

use crate::error::Disposition;
use crate::keys::issue_keys;
use crate::provider::RemoteLinkProvider;
use crate::reporter::{metadata, Metadata, Reporter};
use crate::status::resolve_status;
use crate::types::{Event, IssueAction, IssueEvent, RemoteLink, StatusInfo};
use crate::Error;

/// Application name shown on the remote link.
pub const APP_NAME: &str = "GitHub";

/// Source identifier embedded in every global id.
pub const APP_SOURCE: &str = "jira-remote-link-action";

/// Relationship between the Jira issue and the linked GitHub issue.
pub const RELATIONSHIP: &str = "links to";

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Links were attempted for every key found.
    Published { attempted: usize, failed: usize },
    /// A failure stopped publication for this event.
    Aborted { attempted: usize, failed: usize },
    /// An issue event whose action does not publish links.
    Ignored { action: String },
    /// Not an issue event.
    Skipped { event: String },
}

impl Outcome {
    /// Whether any failure was reported while handling the event.
    pub fn has_failures(&self) -> bool {
        match self {
            Outcome::Published { failed, .. } => *failed > 0,
            Outcome::Aborted { .. } => true,
            Outcome::Ignored { .. } | Outcome::Skipped { .. } => false,
        }
    }
}

/// Global id for the link of `repo`'s issue `issue_number`.
///
/// Stable across runs so Jira updates the existing link instead of adding one.
pub fn global_id(repo: &str, issue_number: u64) -> String {
    format!("source={APP_NAME}-{APP_SOURCE}&repo={repo}&issue={issue_number}")
}

/// Link title, e.g. `Fix bug (acme/widgets#42)`.
pub fn link_title(title: &str, repo: &str, issue_number: u64) -> String {
    format!("{title} ({repo}#{issue_number})")
}

/// Build the remote link for an issue event with an already resolved status.
pub fn build_remote_link(event: &IssueEvent, status: &StatusInfo) -> RemoteLink {
    let repo = &event.repository.full_name;
    let number = event.issue.number;

    RemoteLink {
        global_id: global_id(repo, number),
        application: APP_NAME.to_string(),
        url: event.issue.html_url.clone(),
        title: link_title(&event.issue.title, repo, number),
        status: status.clone(),
        relationship: RELATIONSHIP.to_string(),
    }
}

/// Publishes remote links for issue events.
pub struct Linker<'a> {
    provider: &'a dyn RemoteLinkProvider,
    reporter: &'a dyn Reporter,
}

impl<'a> Linker<'a> {
    pub fn new(provider: &'a dyn RemoteLinkProvider, reporter: &'a dyn Reporter) -> Self {
        Self { provider, reporter }
    }

    /// Handle one triggering event.
    pub async fn handle(&self, event: &Event) -> Outcome {
        match event {
            Event::Issues(issue_event) => self.handle_issue_event(issue_event).await,
            Event::Unsupported { name } => {
                self.reporter.notice(
                    "jira-remote-link skipped: only runs for issues events",
                    &metadata([("event", name.as_str())]),
                );
                Outcome::Skipped {
                    event: name.clone(),
                }
            }
        }
    }

    async fn handle_issue_event(&self, event: &IssueEvent) -> Outcome {
        match event.action {
            IssueAction::Created | IssueAction::Edited => self.publish(event).await,
            IssueAction::Deleted => {
                debug!(
                    repo = event.repository.full_name,
                    issue = event.issue.number,
                    "Issue deleted, remote link removal is not implemented"
                );
                Outcome::Ignored {
                    action: event.action.to_string(),
                }
            }
            IssueAction::Reopened | IssueAction::Other(_) => {
                debug!(action = %event.action, "Action does not publish links");
                Outcome::Ignored {
                    action: event.action.to_string(),
                }
            }
        }
    }

    /// Publish one remote link per Jira key mentioned in the issue.
    pub async fn publish(&self, event: &IssueEvent) -> Outcome {
        let repo = event.repository.full_name.as_str();
        let number = event.issue.number;
        let keys = issue_keys(&event.issue.title, &event.issue.body);

        if keys.is_empty() {
            info!(repo, issue = number, "No Jira keys found");
            return Outcome::Published {
                attempted: 0,
                failed: 0,
            };
        }

        debug!(repo, issue = number, keys = ?keys, "Found Jira keys");

        let event_meta = metadata([("repo", repo.to_string()), ("issue", number.to_string())]);

        let status = match resolve_status(&event.action, &event.issue.state) {
            Ok(status) => status,
            Err(error) => {
                // Without a status there is nothing to publish, whatever the disposition.
                self.report(&error, &event_meta);
                return Outcome::Aborted {
                    attempted: 0,
                    failed: 0,
                };
            }
        };

        let link = build_remote_link(event, &status);
        let mut attempted = 0;
        let mut failed = 0;

        for key in &keys {
            attempted += 1;
            match self.provider.create_remote_link(key, &link).await {
                Ok(()) => {
                    info!(key = key.as_str(), global_id = link.global_id, "Remote link created");
                }
                Err(error) => {
                    failed += 1;
                    let mut key_meta = event_meta.clone();
                    key_meta.insert("jira_key".to_string(), key.clone());

                    if self.report(&error, &key_meta) == Disposition::AbortEvent {
                        return Outcome::Aborted { attempted, failed };
                    }
                }
            }
        }

        Outcome::Published { attempted, failed }
    }

    fn report(&self, error: &Error, metadata: &Metadata) -> Disposition {
        let disposition = error.disposition();
        warn!(error = %error, ?disposition, "Remote link failure");
        self.reporter.failure(error, metadata);
        disposition
    }
}
