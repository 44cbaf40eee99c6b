//! Jira API client implementation.
//!
//! Only the remote link endpoint is used: `POST /rest/api/3/issue/{key}/remotelink`.
//! Jira treats a repeated `globalId` as an update of the existing link.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use remote_link_core::{Error, RemoteLink, RemoteLinkProvider, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::types::RemoteLinkPayload;
use crate::DEFAULT_TIMEOUT;

/// Jira Cloud API version prefix.
const JIRA_API_PREFIX: &str = "/rest/api/3";

/// Jira API client.
pub struct JiraClient {
    base_url: String,
    email: String,
    token: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl JiraClient {
    /// Create a new Jira client for a Jira host such as `acme.atlassian.net`.
    pub fn new(
        host: impl AsRef<str>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(build_api_base(host.as_ref()), email, token)
    }

    /// Create a new Jira client with explicit base URL (for testing with httpmock).
    /// The base URL is used as-is (no `/rest/api/3` suffix appended).
    pub fn with_base_url(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("jira-remote-link")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            client,
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn remote_link_url(&self, issue_key: &str) -> String {
        format!("{}/issue/{}/remotelink", self.base_url, issue_key)
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }

    /// Build an authenticated JSON POST request.
    fn post_request(&self, url: &str, body: Vec<u8>) -> Result<reqwest::Request> {
        self.client
            .post(url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(body)
            .build()
            .map_err(|e| Error::InvalidRequest(e.to_string()))
    }
}

#[async_trait]
impl RemoteLinkProvider for JiraClient {
    async fn create_remote_link(&self, issue_key: &str, link: &RemoteLink) -> Result<()> {
        let url = self.remote_link_url(issue_key);
        let body = serde_json::to_vec(&RemoteLinkPayload::from(link))?;
        let request = self.post_request(&url, body)?;

        debug!(url = url, global_id = link.global_id, "Jira POST request");

        let response = self.client.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(format!("request timed out after {:?}: {}", self.timeout, e))
            } else {
                Error::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status_code,
                message = message,
                issue = issue_key,
                "Jira API error response"
            );
            return Err(Error::from_status(status_code, message));
        }

        Ok(())
    }
}

// =============================================================================
// URL building
// =============================================================================

/// Build the API base from a Jira host.
///
/// The host is expected without scheme; a leading `https://` and trailing
/// slashes are tolerated.
fn build_api_base(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let host = host.strip_prefix("https://").unwrap_or(host);
    format!("https://{}{}", host, JIRA_API_PREFIX)
}

// =============================================================================
// Tests
// =============================================================================
