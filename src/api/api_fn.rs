//! # Function-backed API (`ApiFn`)
//!
//! [`ApiFn`] wraps a closure `F: Fn() -> Fut`, producing a fresh future per
//! call. Each call owns its own state; shared state across calls must be an
//! explicit `Arc<...>` inside the closure.
//!
//! ## Example
//! ```rust
//! use loadvisor::{ApiFn, ApiRef, Friend, LoadResult};
//!
//! let api: ApiRef = ApiFn::arc(|| async {
//!     LoadResult::Ok(vec![Friend::new("Friend1", "phone1")])
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::contract::FriendsApi;
use crate::model::LoadResult;

/// Function-backed [`FriendsApi`] implementation.
///
/// Wraps a closure that *creates* a new future per call.
#[derive(Debug)]
pub struct ApiFn<F> {
    f: F,
}

impl<F> ApiFn<F> {
    /// Creates a new function-backed API.
    ///
    /// Prefer [`ApiFn::arc`] when you immediately need an
    /// [`ApiRef`](crate::ApiRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the API and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> FriendsApi for ApiFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = LoadResult> + Send + 'static,
{
    async fn load_friends(&self) -> LoadResult {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::model::Friend;

    #[tokio::test]
    async fn test_each_call_runs_the_closure() {
        let api = ApiFn::new(|| async { Ok(vec![Friend::new("Friend1", "phone1")]) });

        let first = api.load_friends().await.expect("first call");
        let second = api.load_friends().await.expect("second call");
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[tokio::test]
    async fn test_failures_pass_through() {
        let api = ApiFn::new(|| async { Err(LoadError::failed("offline")) });
        let err = api.load_friends().await.expect_err("must fail");
        assert_eq!(err, LoadError::failed("offline"));
    }
}
