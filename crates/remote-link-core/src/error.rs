//! Error types for jira-remote-link.

use thiserror::Error;

/// Main error type for remote link operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport failure, including request timeouts
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request could not be constructed (bad URL, bad header value)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Neither the action nor the issue state maps to a link status
    #[error("Couldn't detect status from event (action: {action}, state: {state})")]
    StatusUnresolvable { action: String, state: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The triggering event could not be read or decoded
    #[error("Event error: {0}")]
    Event(String),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// What the linker does after an error has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Abandon the current key and carry on with the next one.
    ContinueKeys,
    /// Publish nothing more for the current event.
    AbortEvent,
}

impl Error {
    /// Build an error from a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// The single decision point for how each error kind affects publication.
    pub fn disposition(&self) -> Disposition {
        match self {
            Error::StatusUnresolvable { .. } | Error::Config(_) | Error::Event(_) => {
                Disposition::AbortEvent
            }
            Error::Http(_)
            | Error::InvalidRequest(_)
            | Error::Api { .. }
            | Error::Serialization(_)
            | Error::Other(_) => Disposition::ContinueKeys,
        }
    }
}

/// Result type alias for remote link operations.
pub type Result<T> = std::result::Result<T, Error>;
