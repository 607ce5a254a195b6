//! # The consumed network capability.
//!
//! This module provides the seam the whole exercise pivots on:
//! - [`FriendsApi`] - trait for the asynchronous "load friends" operation
//! - [`ApiFn`] - function-backed implementation for closures
//! - [`ApiRef`] - shared handle (`Arc<dyn FriendsApi>`) injected everywhere

mod api_fn;
mod contract;

pub use api_fn::ApiFn;
pub use contract::{ApiRef, FriendsApi};
