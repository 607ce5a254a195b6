//! # Screen-level configuration.
//!
//! [`Config`] centralizes the knobs a [`FriendsScreen`](crate::FriendsScreen)
//! is built with:
//!
//! 1. **Retry behavior**: the [`RetryPolicy`] handed to the loader.
//! 2. **Event system**: capacity of the broadcast bus ring buffer.
//!
//! All fields are public; defaults reproduce the reference behavior
//! (3 attempts, immediate re-issue).

use crate::policies::RetryPolicy;

/// Configuration for a screen and its loader.
#[derive(Clone, Debug)]
pub struct Config {
    /// Retry policy applied to every load sequence.
    ///
    /// Can also be passed directly to
    /// [`RetryLoader::new`](crate::RetryLoader::new) when the loader is used
    /// without a screen.
    pub retry: RetryPolicy,

    /// Capacity of the event bus broadcast ring buffer.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events will
    /// skip over the oldest items. `0` is clamped to the bus minimum of 1.
    pub bus_capacity: usize,
}

impl Default for Config {
    /// Returns a config with:
    /// - `retry = RetryPolicy::default()` (3 attempts, no delay);
    /// - `bus_capacity = 64`.
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            bus_capacity: 64,
        }
    }
}
