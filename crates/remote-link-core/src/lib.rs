//! Core traits, types, and linking logic for jira-remote-link.
//!
//! This crate provides the foundational abstractions used across all components:
//! Jira key extraction, status mapping, and the [`Linker`] that publishes one
//! remote link per key through a [`RemoteLinkProvider`].

pub mod config;
pub mod error;
pub mod keys;
pub mod linker;
pub mod provider;
pub mod reporter;
pub mod status;
pub mod types;

pub use config::{Config, JiraConfig, JiraSettings};
pub use error::{Disposition, Error, Result};
pub use keys::{find_jira_keys, issue_keys};
pub use linker::{build_remote_link, global_id, link_title, Linker, Outcome};
pub use provider::RemoteLinkProvider;
pub use reporter::{metadata, Metadata, Reporter};
pub use status::resolve_status;
pub use types::*;
