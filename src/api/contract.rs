//! # Friends API contract.
//!
//! [`FriendsApi`] models the one operation the screen consumes: an
//! asynchronous, single-shot-per-call "load friends". The returned future is
//! the completion callback — it resolves exactly once per call with either
//! the full friend list or an opaque failure. The common handle type is
//! [`ApiRef`], an `Arc<dyn FriendsApi>` suitable for injection.
//!
//! There is no batching and no cancellation parameter: callers that lose
//! interest simply stop awaiting; liveness is the loader's concern.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::LoadResult;

/// # Asynchronous friends source.
///
/// One call issues one load; the call is assumed to eventually complete.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use loadvisor::{Friend, FriendsApi, LoadResult};
///
/// struct CannedApi;
///
/// #[async_trait]
/// impl FriendsApi for CannedApi {
///     async fn load_friends(&self) -> LoadResult {
///         Ok(vec![Friend::new("Friend1", "phone1")])
///     }
/// }
/// ```
#[async_trait]
pub trait FriendsApi: Send + Sync + 'static {
    /// Issues one load call, resolving exactly once.
    async fn load_friends(&self) -> LoadResult;
}

/// Shared handle to a [`FriendsApi`] implementation.
pub type ApiRef = Arc<dyn FriendsApi>;
