//! In-memory profile store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use entities::{ProfileRecord, ProfileUpdate};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ProfileStore, StoreError, StoreResult};

/// In-memory profile store for tests and single-process use.
///
/// Records are kept in insertion order so that lookups are deterministic.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    records: Arc<RwLock<Vec<ProfileRecord>>>,
}

impl MemoryProfileStore {
    /// Creates a new in-memory profile store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a profile by id.
    pub async fn get(&self, id: Uuid) -> Option<ProfileRecord> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    /// Returns the number of stored profiles.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Checks whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_user_id(&self, user_id: &str) -> StoreResult<Vec<ProfileRecord>> {
        let records = self.records.read().await;
        let matches: Vec<ProfileRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        tracing::debug!(user_id, count = matches.len(), "profile lookup");
        Ok(matches)
    }

    async fn insert(&self, record: ProfileRecord) -> StoreResult<Uuid> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::already_exists("Profile", record.id.to_string()));
        }
        let id = record.id;
        records.push(record);
        tracing::debug!(%id, "profile inserted");
        Ok(id)
    }

    async fn update(&self, id: Uuid, fields: &ProfileUpdate) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("Profile", id.to_string()))?;
        fields.apply_to(record);
        tracing::debug!(%id, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entities::{Availability, Specialty};

    use super::*;

    fn sample_update() -> ProfileUpdate {
        ProfileUpdate {
            name: "Jo".to_string(),
            experience: 3,
            hourly_rate: 25.0,
            skills: vec![Specialty::Plumbing],
            is_available: true,
            availability: Availability::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryProfileStore::new();
        let profile = ProfileRecord::new("u1", "jo@x.com", "Jo");
        let id = store.insert(profile).await.unwrap();

        let found = store.find_by_user_id("u1").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);

        assert!(store.find_by_user_id("u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_rejected() {
        let store = MemoryProfileStore::new();
        let profile = ProfileRecord::new("u1", "jo@x.com", "Jo");
        store.insert(profile.clone()).await.unwrap();

        let err = store.insert(profile).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_find_preserves_insertion_order() {
        let store = MemoryProfileStore::new();
        let first = ProfileRecord::new("u1", "jo@x.com", "First");
        let second = ProfileRecord::new("u1", "jo@x.com", "Second");
        store.insert(first.clone()).await.unwrap();
        store.insert(second).await.unwrap();

        let found = store.find_by_user_id("u1").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, first.id);
        assert_eq!(found[0].name, "First");
    }

    #[tokio::test]
    async fn test_update_touches_only_editable_fields() {
        let store = MemoryProfileStore::new();
        let profile = ProfileRecord::new("u1", "jo@x.com", "Jo");
        let created_at = profile.created_at;
        let id = store.insert(profile).await.unwrap();

        store.update(id, &sample_update()).await.unwrap();

        let stored = store.get(id).await.unwrap();
        assert_eq!(stored.experience, 3);
        assert_eq!(stored.hourly_rate, 25.0);
        assert_eq!(stored.user_id, "u1");
        assert_eq!(stored.email, "jo@x.com");
        assert_eq!(stored.created_at, created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryProfileStore::new();
        let err = store.update(Uuid::new_v4(), &sample_update()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
