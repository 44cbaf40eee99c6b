//! Configuration management for jira-remote-link.
//!
//! Inputs normally arrive as GitHub Actions step inputs. For local runs they
//! can also come from a TOML file stored in a platform-specific location:
//!
//! - **macOS/Linux**: `~/.config/jira-remote-link/config.toml`
//! - **Windows**: `%APPDATA%\jira-remote-link\config.toml`
//!
//! # Example
//!
//! ```toml
//! [jira]
//! url = "acme.atlassian.net"
//! email = "bot@acme.com"
//! token = "api-token"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, Result};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "jira-remote-link";

// =============================================================================
// Configuration structures
// =============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Jira configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

/// Jira connection settings as read from a file; every field may be missing.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Jira host, e.g. `acme.atlassian.net`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// User email used for Basic auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// API token used for Basic auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}

/// Validated Jira settings; all three inputs are present.
#[derive(Clone)]
pub struct JiraSettings {
    pub url: String,
    pub email: String,
    pub token: String,
}

impl fmt::Debug for JiraSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraSettings")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("token", &"<hidden>")
            .finish()
    }
}

// =============================================================================
// Config implementation
// =============================================================================

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        debug!(path = ?path, "Loading config");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Overlay values from another source; `Some` values win.
    pub fn merge(mut self, overrides: JiraConfig) -> Self {
        let jira = self.jira.get_or_insert_with(JiraConfig::default);
        if overrides.url.is_some() {
            jira.url = overrides.url;
        }
        if overrides.email.is_some() {
            jira.email = overrides.email;
        }
        if overrides.token.is_some() {
            jira.token = overrides.token;
        }
        self
    }

    /// Validate that every required Jira input is set.
    pub fn jira_settings(&self) -> Result<JiraSettings> {
        let jira = self.jira.clone().unwrap_or_default();

        Ok(JiraSettings {
            url: required(jira.url, "jira-url")?,
            email: required(jira.email, "jira-email")?,
            token: required(jira.token, "jira-token")?,
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Config(format!("missing required input: {}", name))),
    }
}

// =============================================================================
// Tests
// =============================================================================
