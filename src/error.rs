//! Error and result types shared across the crate.
//!
//! Application plumbing (terminal, runtime, config) uses `anyhow`.
//! Lookup outcomes that end up on screen use the typed [`LookupError`].

use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

/// User-facing text for a profile endpoint that answered with a non-success status.
pub const PROFILE_FETCH_FAILED: &str = "An error occurred while fetching the profile.";

/// Fallback text for transport failures that carry no message of their own.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Why a profile lookup did not produce a profile.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Username was empty after trimming; no request is made.
    #[error("Please enter a username.")]
    EmptyInput,
    /// The profile endpoint answered 404.
    #[error("Profile not found. Please try another username.")]
    NotFound,
    /// Anything else: bad status, malformed body, network failure, timeout.
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    /// Build a transport error from an underlying message, falling back to a
    /// generic text when the message is blank.
    pub fn transport(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            Self::Transport(UNEXPECTED_ERROR.to_string())
        } else {
            Self::Transport(msg)
        }
    }

    /// Transport error for a non-success status or an unreadable body.
    pub fn fetch_failed() -> Self {
        Self::Transport(PROFILE_FETCH_FAILED.to_string())
    }
}
