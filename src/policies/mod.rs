//! # Retry policy for load sequences.
//!
//! A single policy type lives here:
//! - [`RetryPolicy`] bounds how many calls a sequence may issue and how long
//!   to pause before a re-issued call.
//!
//! The decision the policy answers is deliberately narrow: *may a failure at
//! this attempt be absorbed?* It never inspects the error itself — every
//! failure is retried uniformly until the bound is reached.

mod retry;

pub use retry::RetryPolicy;
