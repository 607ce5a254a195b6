//! Test doubles shared by the crate's unit tests.
//!
//! - [`QueueApi`] — programmable [`FriendsApi`]: pops a pre-seeded queue of
//!   outcomes and counts calls (the spy half lives in [`QueueApi::calls`]).
//! - [`PendingApi`] — a call that never completes, for cancellation tests.
//! - [`RecordingDetail`] / [`RecordingErrors`] — capture what the screen
//!   hands to its collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::FriendsApi;
use crate::error::LoadError;
use crate::model::{Friend, LoadResult};
use crate::screen::{DetailPresenter, ErrorPresenter};

pub(crate) fn make_friend(name: &str, phone: &str) -> Friend {
    Friend::new(name, phone)
}

/// Programmable API double: seeded outcome queue plus a call counter.
pub(crate) struct QueueApi {
    results: Mutex<VecDeque<LoadResult>>,
    calls: AtomicU32,
}

impl QueueApi {
    pub(crate) fn seeded(results: Vec<LoadResult>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicU32::new(0),
        }
    }

    /// An API that answers every call with the same friend list.
    pub(crate) fn succeeding(friends: Vec<Friend>) -> Self {
        Self::seeded(vec![Ok(friends)])
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FriendsApi for QueueApi {
    async fn load_friends(&self) -> LoadResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = self.results.lock().unwrap();
        match results.pop_front() {
            Some(result) => result,
            // Popping past the seed is a test bug; surface it loudly.
            None => Err(LoadError::failed("queue exhausted")),
        }
    }
}

/// A call that never completes.
pub(crate) struct PendingApi;

#[async_trait]
impl FriendsApi for PendingApi {
    async fn load_friends(&self) -> LoadResult {
        futures::future::pending().await
    }
}

/// Records every friend handed off for detail display.
#[derive(Default)]
pub(crate) struct RecordingDetail {
    shown: Mutex<Vec<Friend>>,
}

impl RecordingDetail {
    pub(crate) fn shown(&self) -> Vec<Friend> {
        self.shown.lock().unwrap().clone()
    }
}

impl DetailPresenter for RecordingDetail {
    fn show(&self, friend: &Friend) {
        self.shown.lock().unwrap().push(friend.clone());
    }
}

/// Records every message handed to the error display.
#[derive(Default)]
pub(crate) struct RecordingErrors {
    messages: Mutex<Vec<String>>,
}

impl RecordingErrors {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorPresenter for RecordingErrors {
    fn show_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
