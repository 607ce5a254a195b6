//! # Friend records rendered by the screen.
//!
//! [`Friend`] is an immutable value: a unique identity plus the two display
//! fields a row shows. Collaborators and tests compare friends by value
//! across **all** fields, so two friends with equal names but different ids
//! are different friends.

use uuid::Uuid;

use crate::error::LoadError;

/// Terminal outcome of one load sequence: the full row set, in insertion
/// order, or the error that survived the retry policy.
pub type LoadResult = Result<Vec<Friend>, LoadError>;

/// A single friend record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Friend {
    /// Unique identity.
    pub id: Uuid,
    /// Display name (row title).
    pub name: String,
    /// Phone number (row subtitle).
    pub phone: String,
}

impl Friend {
    /// Creates a friend with a freshly minted id.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone)
    }

    /// Creates a friend with an explicit id.
    pub fn with_id(id: Uuid, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }
}
