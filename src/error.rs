//! Error types for the page bindings.

use thiserror::Error;

use crate::modal::ModalPhase;

/// Inline configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config decode failed: {0}")]
    Parse(String),
}

/// Rejected modal transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModalError {
    #[error("cannot {action} modal while {from:?}")]
    InvalidTransition {
        from: ModalPhase,
        action: &'static str,
    },
}

/// Failures at the browser boundary.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("window unavailable")]
    NoWindow,

    #[error("document unavailable")]
    NoDocument,

    #[error("failed to listen for '{event}': {message}")]
    Listener { event: &'static str, message: String },
}
