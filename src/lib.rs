//! # loadvisor
//!
//! **Loadvisor** is a small library for retry-supervised data loading behind
//! a list screen.
//!
//! It provides a bounded-retry loader over an injected asynchronous data
//! source, plus a thin screen shell that ties the loader to view lifecycle
//! events and to display collaborators. The crate is written as an exercise
//! in dependency injection: every outward edge is a trait, and the test
//! suite drives the whole thing with programmable doubles.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!        ┌───────────────┐   became_visible()   ┌──────────────────────┐
//!        │ FriendsScreen │ ───────────────────► │     RetryLoader      │
//!        │  (thin shell) │ ◄─────────────────── │ (bounded retry loop) │
//!        └──┬─────────┬──┘   one terminal       └──────────┬───────────┘
//!           │         │      outcome                       │
//!           ▼         ▼                                    ▼
//!   DetailPresenter  ErrorPresenter                 FriendsApi (dyn)
//!   (row selection)  (terminal failure)           one async call per
//!                                                 attempt, ≤ 3 attempts
//!
//!        every step publishes Events:
//!        LoadStarting / AttemptFailed / RetryScheduled /
//!        LoadSucceeded / LoadFailed / RowSelected / ScreenDismissed
//!           │
//!           ▼
//!        Bus (broadcast) ──► fan-out listener ──► SubscriberSet
//!                                                 (per-sub queues+workers)
//! ```
//!
//! ### Lifecycle of one sequence
//! ```text
//! became_visible() ──► RetryLoader::load(token)
//!
//! loop {
//!   ├─► publish LoadStarting{ attempt }
//!   ├─► FriendsApi::load_friends()
//!   │       │
//!   │       ├─ Ok(friends) ──► publish LoadSucceeded ─► rows replaced, done
//!   │       │
//!   │       └─ Err ──► publish AttemptFailed{ attempt, reason }
//!   │                  ├─ policy allows retry:
//!   │                  │    ├─► publish RetryScheduled
//!   │                  │    ├─► optional pause (cancellable)
//!   │                  │    └─► attempt += 1, continue
//!   │                  └─ budget spent ─► publish LoadFailed
//!   │                                     ─► error presenter shows the
//!   │                                        FINAL failure's description
//!   │
//!   └─ exit conditions:
//!        - token cancelled (screen dismissed) ─► quiet no-op exit
//!        - terminal outcome delivered (exactly one per sequence)
//! }
//! ```
//!
//! ## Features
//! | Area            | Description                                               | Key types / traits                     |
//! |-----------------|-----------------------------------------------------------|----------------------------------------|
//! | **API seam**    | Inject any async friends source.                          | [`FriendsApi`], [`ApiFn`], [`ApiRef`]  |
//! | **Retry**       | Bound the call budget, pause between re-issues.           | [`RetryPolicy`]                        |
//! | **Loader**      | One terminal outcome per sequence, liveness-checked.      | [`RetryLoader`], [`LoadState`]         |
//! | **Screen**      | Rows, visibility trigger, selection, dismissal.           | [`FriendsScreen`]                      |
//! | **Collaborators**| Detail and error display seams.                          | [`DetailPresenter`], [`ErrorPresenter`]|
//! | **Events**      | Observe the per-attempt lifecycle.                        | [`Event`], [`EventKind`], [`Bus`]      |
//! | **Subscribers** | Hook into events without blocking the load path.          | [`Subscribe`], [`SubscriberSet`], [`LogWriter`] |
//! | **Errors**      | One opaque user-visible failure kind.                     | [`LoadError`]                          |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use loadvisor::{
//!     ApiFn, Config, DetailPresenter, ErrorPresenter, Friend, FriendsScreen, LoadResult,
//! };
//!
//! struct Console;
//!
//! impl DetailPresenter for Console {
//!     fn show(&self, friend: &Friend) {
//!         println!("detail: {} ({})", friend.name, friend.phone);
//!     }
//! }
//!
//! impl ErrorPresenter for Console {
//!     fn show_error(&self, message: &str) {
//!         println!("error: {message}");
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let api = ApiFn::arc(|| async {
//!         LoadResult::Ok(vec![Friend::new("Friend1", "phone1")])
//!     });
//!
//!     let console = Arc::new(Console);
//!     let mut screen = FriendsScreen::new(
//!         Config::default(),
//!         api,
//!         console.clone(),
//!         console,
//!         Vec::new(),
//!     );
//!
//!     screen.became_visible().await;
//!     assert_eq!(screen.row_count(), 1);
//!     screen.select_row(0);
//! }
//! ```

mod api;
mod config;
mod error;
mod events;
mod loader;
mod model;
mod policies;
mod screen;
mod subscribers;

#[cfg(test)]
pub(crate) mod fakes;

// ---- Public re-exports ----

pub use api::{ApiFn, ApiRef, FriendsApi};
pub use config::Config;
pub use error::LoadError;
pub use events::{Bus, Event, EventKind};
pub use loader::{LoadState, RetryLoader};
pub use model::{Friend, LoadResult};
pub use policies::RetryPolicy;
pub use screen::{DetailPresenter, ErrorPresenter, FriendsScreen};
pub use subscribers::{LogWriter, Subscribe, SubscriberSet};
