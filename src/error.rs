//! Error types produced by load sequences.
//!
//! One enum covers the whole crate:
//!
//! - [`LoadError::Failed`] — an attempt (or the whole sequence) failed with an
//!   opaque, human-readable reason. The only kind a user ever sees.
//! - [`LoadError::Canceled`] — the screen was torn down while a call was in
//!   flight; the sequence exits quietly and nothing is surfaced.
//!
//! Helper methods (`as_label`, `as_message`) follow the same shape as the
//! event metadata, for logs and subscribers.

use thiserror::Error;

/// # Errors produced by a load sequence.
///
/// Failure causes (network, server, parsing) are deliberately not
/// distinguished: every failure is an opaque [`LoadError::Failed`] with a
/// description, and all of them are retried uniformly.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The load call failed with a human-readable reason.
    #[error("load failed: {reason}")]
    Failed {
        /// The underlying error description, surfaced verbatim to the user
        /// when the sequence exhausts its retries.
        reason: String,
    },

    /// The observer of the sequence went away before the terminal outcome.
    ///
    /// Never surfaced to the user and never retried.
    #[error("load canceled")]
    Canceled,
}

impl LoadError {
    /// Shorthand for [`LoadError::Failed`] from any string-ish reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        LoadError::Failed {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use loadvisor::LoadError;
    ///
    /// assert_eq!(LoadError::failed("boom").as_label(), "load_failed");
    /// assert_eq!(LoadError::Canceled.as_label(), "load_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LoadError::Failed { .. } => "load_failed",
            LoadError::Canceled => "load_canceled",
        }
    }

    /// Returns the description exactly as it should be shown to the user.
    ///
    /// For [`LoadError::Failed`] this is the raw reason text, with no prefix:
    /// the error display collaborator receives it verbatim.
    pub fn as_message(&self) -> String {
        match self {
            LoadError::Failed { reason } => reason.clone(),
            LoadError::Canceled => "load canceled".to_string(),
        }
    }

    /// Indicates whether the error may be absorbed by the retry policy.
    ///
    /// Every [`LoadError::Failed`] is retryable; [`LoadError::Canceled`]
    /// terminates the sequence immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadError::Failed { .. })
    }
}
