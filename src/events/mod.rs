//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to events emitted by the loader and the screen.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: [`RetryLoader`](crate::RetryLoader) (per-attempt
//!   lifecycle), [`FriendsScreen`](crate::FriendsScreen) (row selection,
//!   dismissal).
//! - **Consumers**: the screen's fan-out listener, and any test or demo that
//!   calls [`Bus::subscribe`] directly.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
