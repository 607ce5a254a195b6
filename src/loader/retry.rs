//! # RetryLoader: bounded-retry sequence driver.
//!
//! Drives calls against a [`FriendsApi`](crate::FriendsApi) under a
//! [`RetryPolicy`], delivering exactly one terminal outcome per sequence.
//!
//! ## Event flow
//! For each attempt, the loader publishes:
//! ```text
//! LoadStarting → [API call] → LoadSucceeded            (terminal)
//!                           → AttemptFailed
//!                                ├─ budget left  → RetryScheduled → [pause] → next attempt
//!                                └─ budget spent → LoadFailed     (terminal)
//! ```
//!
//! ## Rules
//! - Calls run **sequentially** within one sequence (never parallel); each
//!   call fully completes before the next is issued.
//! - At most `max_attempts` calls per sequence.
//! - Intermediate failures are absorbed silently; only the **final**
//!   attempt's failure is delivered.
//! - The liveness token is checked immediately before any terminal outcome
//!   is delivered: a cancelled observer receives [`LoadError::Canceled`]
//!   instead, and no terminal lifecycle event is published.

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::{
    api::ApiRef,
    error::LoadError,
    events::{Bus, Event, EventKind},
    loader::RetrySequence,
    model::LoadResult,
    policies::RetryPolicy,
};

/// Drives one [`FriendsApi`] call budget per triggered sequence.
///
/// ### Responsibilities
/// - **Bounded retry**: absorbs failures while [`RetryPolicy`] allows
/// - **Liveness**: suppresses delivery once the observer's token is cancelled
/// - **Event publishing**: reports the per-attempt lifecycle to the bus
///
/// The loader is stateless between sequences; each [`RetryLoader::load`]
/// call owns a fresh attempt counter starting at 0.
pub struct RetryLoader {
    api: ApiRef,
    policy: RetryPolicy,
    bus: Bus,
}

impl RetryLoader {
    /// Creates a loader over the given API, policy, and event bus.
    pub fn new(api: ApiRef, policy: RetryPolicy, bus: Bus) -> Self {
        Self { api, policy, bus }
    }

    /// The policy this loader runs under.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Runs one full load sequence to its terminal outcome.
    ///
    /// ### Flow
    /// 1. Issue one API call (`LoadStarting` published per call)
    /// 2. On success, deliver the friends (`LoadSucceeded`)
    /// 3. On failure, absorb and re-issue while the policy allows
    ///    (`AttemptFailed`, `RetryScheduled`), pausing if the policy says so
    /// 4. On the final failure, deliver exactly that error (`LoadFailed`)
    ///
    /// ### Cancellation semantics
    /// `token` is the observer's liveness flag. It is checked at every safe
    /// point — before each call, during the call, during the retry pause,
    /// and immediately before terminal delivery. Once cancelled, the
    /// sequence returns [`LoadError::Canceled`] without another call and
    /// without publishing a terminal event: the outcome of a dead observer
    /// is a no-op, not an error display.
    ///
    /// ### Guarantees
    /// - at most `policy.max_attempts` API calls per sequence;
    /// - exactly one terminal outcome per sequence;
    /// - the delivered failure is the **most recent** one, never an earlier
    ///   absorbed failure.
    pub async fn load(&self, token: &CancellationToken) -> LoadResult {
        let mut seq = RetrySequence::new();

        loop {
            if token.is_cancelled() {
                return Err(LoadError::Canceled);
            }

            seq.begin_attempt();
            self.bus
                .publish(Event::new(EventKind::LoadStarting).with_attempt(seq.attempt()));

            match self.run_attempt(token).await {
                Ok(friends) => {
                    seq.succeed();
                    if token.is_cancelled() {
                        return Err(LoadError::Canceled);
                    }
                    self.bus.publish(
                        Event::new(EventKind::LoadSucceeded)
                            .with_attempt(seq.attempt())
                            .with_rows(friends.len()),
                    );
                    return Ok(friends);
                }
                Err(LoadError::Canceled) => return Err(LoadError::Canceled),
                Err(err) => {
                    self.bus.publish(
                        Event::new(EventKind::AttemptFailed)
                            .with_attempt(seq.attempt())
                            .with_reason(err.as_message()),
                    );

                    if !self.policy.allows_retry(seq.attempt()) {
                        seq.fail();
                        if token.is_cancelled() {
                            return Err(LoadError::Canceled);
                        }
                        self.bus.publish(
                            Event::new(EventKind::LoadFailed)
                                .with_attempt(seq.attempt())
                                .with_reason(err.as_message()),
                        );
                        return Err(err);
                    }

                    let failed_attempt = seq.attempt();
                    seq.absorb_failure();

                    let mut ev = Event::new(EventKind::RetryScheduled)
                        .with_attempt(failed_attempt)
                        .with_reason(err.as_message());
                    if let Some(delay) = self.policy.retry_delay() {
                        ev = ev.with_delay(delay);
                    }
                    self.bus.publish(ev);

                    if let Some(delay) = self.policy.retry_delay() {
                        let sleep = time::sleep(delay);
                        tokio::pin!(sleep);
                        select! {
                            _ = &mut sleep => {}
                            _ = token.cancelled() => return Err(LoadError::Canceled),
                        }
                    }
                }
            }
        }
    }

    /// Issues a single API call, racing it against the liveness token.
    async fn run_attempt(&self, token: &CancellationToken) -> LoadResult {
        select! {
            res = self.api.load_friends() => res,
            _ = token.cancelled() => Err(LoadError::Canceled),
        }
    }
}
