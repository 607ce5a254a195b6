//! # Bounded retry policy.
//!
//! [`RetryPolicy`] is parameterized by:
//! - [`RetryPolicy::max_attempts`] the total call budget per sequence
//!   (initial call included);
//! - [`RetryPolicy::delay`] a fixed pause before each re-issued call
//!   (`Duration::ZERO` = immediate, the default).
//!
//! Attempts are counted 0-based: a failure at attempt `n` may be absorbed
//! only while `n + 1 < max_attempts`. With the default budget of 3 the
//! sequence issues the initial call plus at most 2 retries, and the failure
//! observed on attempt 2 is the one that terminates the sequence.
//!
//! # Example
//! ```rust
//! use loadvisor::RetryPolicy;
//!
//! let policy = RetryPolicy::default();
//!
//! // Failures on attempts 0 and 1 are absorbed...
//! assert!(policy.allows_retry(0));
//! assert!(policy.allows_retry(1));
//!
//! // ...the one on attempt 2 terminates the sequence.
//! assert!(!policy.allows_retry(2));
//! ```

use std::time::Duration;

/// Bounded retry policy for one load sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of calls per sequence, initial call included.
    ///
    /// `0` is treated as `1`: at least one call is always issued.
    pub max_attempts: u32,

    /// Fixed pause before each re-issued call.
    ///
    /// `Duration::ZERO` re-issues immediately. The pause is cancellable: a
    /// sequence whose observer goes away mid-pause exits without another
    /// call.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    /// Returns the reference policy: 3 attempts total, immediate re-issue.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// Answers whether a failure at 0-based `attempt` may be absorbed.
    ///
    /// Returns `false` exactly when `attempt` is the last one in the budget,
    /// i.e. the failure must become the sequence's terminal outcome.
    pub fn allows_retry(&self, attempt: u32) -> bool {
        attempt.saturating_add(1) < self.max_attempts.max(1)
    }

    /// Returns the pause before a re-issued call, or `None` for immediate.
    pub fn retry_delay(&self) -> Option<Duration> {
        (self.delay > Duration::ZERO).then_some(self.delay)
    }
}
