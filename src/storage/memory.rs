//! In-memory message store for tests

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::storage::{MessageStore, StorageError, StoredMessage};

/// In-memory message store
///
/// Backs the unit and dispatch test suites. Obeys the same contract as the
/// PostgreSQL store, including listing order and the owner-scoped delete
/// semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Row>,
}

#[derive(Debug, Clone)]
struct Row {
    id: i64,
    owner_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another thread panicked mid-operation;
    // the rows themselves stay consistent, so keep serving them.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn save_message(&self, owner_id: i64, text: &str) -> Result<i64, StorageError> {
        let mut inner = self.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.push(Row {
            id,
            owner_id,
            text: text.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn messages_for_owner(&self, owner_id: i64) -> Result<Vec<StoredMessage>, StorageError> {
        let inner = self.read();
        let mut messages: Vec<StoredMessage> = inner
            .rows
            .iter()
            .filter(|row| row.owner_id == owner_id)
            .map(|row| StoredMessage {
                id: row.id,
                text: row.text.clone(),
                created_at: row.created_at,
            })
            .collect();
        // Newest first; same-instant inserts fall back to the higher id
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(messages)
    }

    async fn delete_all_messages(&self, owner_id: i64) -> Result<u64, StorageError> {
        let mut inner = self.write();
        let before = inner.rows.len();
        inner.rows.retain(|row| row.owner_id != owner_id);
        Ok((before - inner.rows.len()) as u64)
    }

    async fn delete_message(&self, owner_id: i64, message_id: i64) -> Result<bool, StorageError> {
        let mut inner = self.write();
        let before = inner.rows.len();
        inner
            .rows
            .retain(|row| !(row.id == message_id && row.owner_id == owner_id));
        Ok(inner.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn unknown_owner_lists_empty() {
        let store = MemoryStore::new();
        let messages = store.messages_for_owner(1).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn save_then_list_contains_text() {
        let store = MemoryStore::new();
        let id = store.save_message(1, "hello").await.unwrap();

        let messages = store.messages_for_owner(1).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, id);
        assert_eq!(messages[0].text, "hello");
    }

    #[tokio::test]
    async fn duplicate_text_is_allowed() {
        let store = MemoryStore::new();
        store.save_message(1, "same").await.unwrap();
        store.save_message(1, "same").await.unwrap();

        let messages = store.messages_for_owner(1).await.unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = MemoryStore::new();
        let first = store.save_message(1, "first").await.unwrap();
        let second = store.save_message(1, "second").await.unwrap();
        let third = store.save_message(1, "third").await.unwrap();

        // Later inserts carry an equal-or-later timestamp and a higher id,
        // so they must sort ahead of earlier ones either way.
        let ids: Vec<i64> = store
            .messages_for_owner(1)
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_owner() {
        let store = MemoryStore::new();
        store.save_message(1, "mine").await.unwrap();
        store.save_message(2, "theirs").await.unwrap();

        let messages = store.messages_for_owner(1).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "mine");
    }

    #[tokio::test]
    async fn delete_all_is_idempotent() {
        let store = MemoryStore::new();
        store.save_message(1, "a").await.unwrap();
        store.save_message(1, "b").await.unwrap();
        store.save_message(2, "other").await.unwrap();

        assert_eq!(store.delete_all_messages(1).await.unwrap(), 2);
        assert_eq!(store.delete_all_messages(1).await.unwrap(), 0);
        assert!(store.messages_for_owner(1).await.unwrap().is_empty());

        // The other owner's records survive the purge
        assert_eq!(store.messages_for_owner(2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_message_removes_own_record() {
        let store = MemoryStore::new();
        let id = store.save_message(1, "gone soon").await.unwrap();

        assert!(store.delete_message(1, id).await.unwrap());
        assert!(store.messages_for_owner(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_message_rejects_cross_owner() {
        let store = MemoryStore::new();
        let id = store.save_message(1, "not yours").await.unwrap();

        assert!(!store.delete_message(2, id).await.unwrap());

        let messages = store.messages_for_owner(1).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, id);
    }

    #[tokio::test]
    async fn delete_missing_id_reports_false() {
        let store = MemoryStore::new();
        assert!(!store.delete_message(1, 42).await.unwrap());
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryStore::new();
        let first = store.save_message(1, "a").await.unwrap();
        store.delete_message(1, first).await.unwrap();
        let second = store.save_message(1, "b").await.unwrap();

        assert!(second > first);
    }
}
