//! Error types for the landing page.
//!
//! Nothing here is fatal to the page: lead form errors keep the form where it
//! is, config errors fall back to the built-in business profile.

use thiserror::Error;

use crate::state::FormStatus;

/// Errors raised by the lead form and the site configuration.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A required lead field was left blank
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    /// Email does not look like `local@domain`
    #[error("email address is not valid")]
    InvalidEmail,

    /// Status machine was asked for a transition it does not allow
    #[error("cannot {action} while the lead form is {from}")]
    InvalidTransition {
        /// Status the form was in
        from: FormStatus,
        /// Requested action
        action: &'static str,
    },

    /// Config override JSON did not parse
    #[error("site config is not valid JSON: {0}")]
    Config(#[from] serde_json::Error),

    /// Config override parsed but holds unusable values
    #[error("site config rejected: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
