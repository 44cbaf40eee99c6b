//! Provider trait for issue trackers that accept remote links.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RemoteLink;

/// Trait for trackers that can register a remote link on an issue (Jira, ...).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteLinkProvider: Send + Sync {
    /// Create or update the remote link identified by `link.global_id`
    /// on the issue `issue_key`.
    async fn create_remote_link(&self, issue_key: &str, link: &RemoteLink) -> Result<()>;
}
