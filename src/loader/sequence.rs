//! # Per-sequence state machine.
//!
//! One [`RetrySequence`] exists for the lifetime of one load sequence and
//! owns two pieces of transient state: the 0-based attempt counter and the
//! current [`LoadState`].
//!
//! ## States
//! ```text
//! Idle ──► Requesting ──► Succeeded        (terminal)
//!              │  ▲
//!              ▼  │
//!           Retrying      (transient decision point)
//!              │
//!  Requesting ─┴─► FailedTerminal          (terminal)
//! ```
//!
//! ## Rules
//! - `Requesting` is entered once per issued call.
//! - `Retrying` bumps the attempt counter; it is the only transition that
//!   does.
//! - Terminal states have no outgoing transitions; a fresh trigger builds a
//!   fresh sequence instead of leaving a terminal state.
//! - Invalid transitions are rejected, not panicked on.

/// Observable classification of a load sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Constructed, no call issued yet.
    Idle,
    /// A call is in flight.
    Requesting,
    /// A failure was absorbed; the next call is about to be issued.
    Retrying,
    /// Terminal: data was delivered.
    Succeeded,
    /// Terminal: the call budget is exhausted.
    FailedTerminal,
}

impl LoadState {
    /// True for the two states no transition leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Succeeded | LoadState::FailedTerminal)
    }

    fn can_transition_to(self, next: LoadState) -> bool {
        matches!(
            (self, next),
            (LoadState::Idle, LoadState::Requesting)
                | (LoadState::Requesting, LoadState::Succeeded)
                | (LoadState::Requesting, LoadState::Retrying)
                | (LoadState::Requesting, LoadState::FailedTerminal)
                | (LoadState::Retrying, LoadState::Requesting)
        )
    }
}

/// Transient bookkeeping owned by one load sequence.
pub(crate) struct RetrySequence {
    attempt: u32,
    state: LoadState,
}

impl RetrySequence {
    pub(crate) fn new() -> Self {
        Self {
            attempt: 0,
            state: LoadState::Idle,
        }
    }

    /// Current 0-based attempt number.
    pub(crate) fn attempt(&self) -> u32 {
        self.attempt
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> LoadState {
        self.state
    }

    /// Enters `Requesting` for the next call. Valid from `Idle` and
    /// `Retrying`.
    pub(crate) fn begin_attempt(&mut self) -> bool {
        self.advance(LoadState::Requesting)
    }

    /// Absorbs a failure: moves to `Retrying` and bumps the attempt counter.
    pub(crate) fn absorb_failure(&mut self) -> bool {
        if self.advance(LoadState::Retrying) {
            self.attempt += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn succeed(&mut self) -> bool {
        self.advance(LoadState::Succeeded)
    }

    pub(crate) fn fail(&mut self) -> bool {
        self.advance(LoadState::FailedTerminal)
    }

    fn advance(&mut self, next: LoadState) -> bool {
        if self.state.can_transition_to(next) {
            self.state = next;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let mut seq = RetrySequence::new();
        assert_eq!(seq.state(), LoadState::Idle);
        assert!(seq.begin_attempt());
        assert_eq!(seq.state(), LoadState::Requesting);
        assert!(seq.succeed());
        assert!(seq.state().is_terminal());
    }

    #[test]
    fn test_retry_loop_bumps_attempt() {
        let mut seq = RetrySequence::new();
        assert!(seq.begin_attempt());
        assert_eq!(seq.attempt(), 0);

        assert!(seq.absorb_failure());
        assert_eq!(seq.state(), LoadState::Retrying);
        assert_eq!(seq.attempt(), 1);

        assert!(seq.begin_attempt());
        assert!(seq.absorb_failure());
        assert_eq!(seq.attempt(), 2);

        assert!(seq.begin_attempt());
        assert!(seq.fail());
        assert!(seq.state().is_terminal());
        assert_eq!(seq.attempt(), 2, "terminal failure does not bump attempts");
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        let mut seq = RetrySequence::new();
        seq.begin_attempt();
        seq.succeed();

        assert!(!seq.begin_attempt());
        assert!(!seq.absorb_failure());
        assert!(!seq.fail());
        assert_eq!(seq.state(), LoadState::Succeeded);
    }

    #[test]
    fn test_idle_cannot_terminate_directly() {
        let mut seq = RetrySequence::new();
        assert!(!seq.succeed());
        assert!(!seq.fail());
        assert!(!seq.absorb_failure());
        assert_eq!(seq.state(), LoadState::Idle);
        assert_eq!(seq.attempt(), 0);
    }
}
