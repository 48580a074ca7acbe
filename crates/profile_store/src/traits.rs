//! Profile store trait definitions.

use async_trait::async_trait;
use entities::{ProfileRecord, ProfileUpdate};
use uuid::Uuid;

use crate::StoreResult;

/// Trait for handyman profile storage operations.
///
/// The marketplace expects exactly one profile per user, but the store does
/// not enforce it; `find_by_user_id` therefore returns every match, in a
/// stable order, and callers decide what to do with duplicates.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Finds all profiles owned by a user, in insertion order.
    async fn find_by_user_id(&self, user_id: &str) -> StoreResult<Vec<ProfileRecord>>;

    /// Inserts a new profile, returning its id.
    async fn insert(&self, record: ProfileRecord) -> StoreResult<Uuid>;

    /// Applies a partial update to the profile with the given id.
    ///
    /// Only the editable fields carried by [`ProfileUpdate`] are touched.
    async fn update(&self, id: Uuid, fields: &ProfileUpdate) -> StoreResult<()>;
}
