//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for demos or debugging.
//!
//! ## Example output
//! ```text
//! [starting] attempt=0
//! [attempt-failed] attempt=0 reason="connection refused"
//! [retry] after_attempt=0 delay_ms=None
//! [starting] attempt=1
//! [loaded] attempt=1 rows=2
//! [row-selected] index=0
//! [dismissed]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event printer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::LoadStarting => {
                println!("[starting] attempt={}", e.attempt.unwrap_or(0));
            }
            EventKind::AttemptFailed => {
                println!(
                    "[attempt-failed] attempt={} reason={:?}",
                    e.attempt.unwrap_or(0),
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
            EventKind::RetryScheduled => {
                println!(
                    "[retry] after_attempt={} delay_ms={:?}",
                    e.attempt.unwrap_or(0),
                    e.delay_ms,
                );
            }
            EventKind::LoadSucceeded => {
                println!(
                    "[loaded] attempt={} rows={}",
                    e.attempt.unwrap_or(0),
                    e.rows.unwrap_or(0),
                );
            }
            EventKind::LoadFailed => {
                println!(
                    "[load-failed] attempt={} reason={:?}",
                    e.attempt.unwrap_or(0),
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
            EventKind::RowSelected => {
                println!("[row-selected] index={}", e.rows.unwrap_or(0));
            }
            EventKind::ScreenDismissed => {
                println!("[dismissed]");
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
