//! # Lifecycle events emitted by the loader and the screen.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Sequence events**: the per-attempt flow of one load sequence
//!   (starting, attempt failed, retry scheduled, terminal success/failure)
//! - **Screen events**: user-facing moments (row selection, dismissal)
//!
//! The [`Event`] struct carries additional metadata such as timestamps,
//! attempt numbers, reasons, and retry delays.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order.
//!
//! ## Example
//! ```rust
//! use loadvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::AttemptFailed)
//!     .with_attempt(2)
//!     .with_reason("connection refused");
//!
//! assert_eq!(ev.kind, EventKind::AttemptFailed);
//! assert_eq!(ev.attempt, Some(2));
//! assert_eq!(ev.reason.as_deref(), Some("connection refused"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Sequence events ===
    /// A load call is about to be issued.
    ///
    /// Sets:
    /// - `attempt`: attempt number (0-based within the sequence)
    LoadStarting,

    /// A call failed; the failure may still be absorbed by the policy.
    ///
    /// Sets:
    /// - `attempt`: attempt number
    /// - `reason`: failure description
    AttemptFailed,

    /// A failed attempt was absorbed; the call will be re-issued.
    ///
    /// Sets:
    /// - `attempt`: the attempt that failed (the next call uses `attempt + 1`)
    /// - `delay_ms`: pause before the re-issued call (ms), if any
    /// - `reason`: the absorbed failure's description
    RetryScheduled,

    /// The sequence terminated with data.
    ///
    /// Sets:
    /// - `attempt`: the attempt that succeeded
    /// - `rows`: number of rows delivered
    LoadSucceeded,

    /// The sequence exhausted its call budget.
    ///
    /// Sets:
    /// - `attempt`: the final attempt
    /// - `reason`: the final failure's description (the one surfaced)
    LoadFailed,

    // === Screen events ===
    /// A rendered row was selected and handed to the detail collaborator.
    ///
    /// Sets:
    /// - `rows`: the selected row index
    RowSelected,

    /// The screen was torn down; in-flight outcomes become no-ops.
    ScreenDismissed,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Attempt number within the sequence (0-based).
    pub attempt: Option<u32>,
    /// Human-readable reason (failure descriptions).
    pub reason: Option<Arc<str>>,
    /// Retry pause before the next call, in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Row count for terminal success, or row index for selection.
    pub rows: Option<usize>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next global sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            attempt: None,
            reason: None,
            delay_ms: None,
            rows: None,
        }
    }

    /// Attaches an attempt number.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a retry delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a row count (or, for selections, a row index).
    #[inline]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// True for the two kinds that end a sequence.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, EventKind::LoadSucceeded | EventKind::LoadFailed)
    }
}
