//! Jira provider implementation for jira-remote-link.
//!
//! This crate registers remote links on Jira Cloud issues through the
//! REST API v3, authenticating with an account email and API token.

mod client;
mod types;

pub use client::JiraClient;
pub use types::*;

/// Per-request timeout used unless overridden with [`JiraClient::with_timeout`].
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);
