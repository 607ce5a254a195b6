//! # Produced collaborator seams.
//!
//! The screen produces exactly two calls toward the platform UI: "show this
//! friend's details" and "show this error message". Both are modeled as
//! injected trait objects so tests substitute recorders and production
//! wires in whatever the UI toolkit provides.
//!
//! Neither call returns anything to the screen; there is no round trip.

use crate::model::Friend;

/// Detail-display collaborator.
///
/// Given a friend, display its details (e.g. push a detail view). Invoked
/// with the exact value rendered at the selected row.
pub trait DetailPresenter: Send + Sync {
    /// Displays the given friend's details.
    fn show(&self, friend: &Friend);
}

/// Error-display collaborator.
///
/// Given a message, display it to the user (e.g. a modal dialog with a
/// fixed title). Used only on terminal failure, with the final attempt's
/// description.
pub trait ErrorPresenter: Send + Sync {
    /// Displays the given error message.
    fn show_error(&self, message: &str);
}
