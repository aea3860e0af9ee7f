//! # flashkit-store-memory
//!
//! In-memory [`FlashStore`] backend.
//!
//! Pending lists live in a sharded concurrent map keyed by session id. The
//! map's `remove` hands back the whole slot in one step, which is exactly
//! the atomic pop-all the drain contract requires. Suited to single-process
//! deployments and tests; session expiry is the embedding application's
//! concern (call [`InMemoryFlashStore::clear_session`] when a session ends).

use async_trait::async_trait;
use dashmap::DashMap;

use flashkit_core::{FlashError, FlashMessage, FlashStore, SessionId};

/// In-memory flash store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryFlashStore {
    slots: DashMap<SessionId, Vec<FlashMessage>>,
}

impl InMemoryFlashStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Number of sessions with at least one pending message.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops a session's pending list without returning it.
    pub fn clear_session(&self, session: &SessionId) {
        if self.slots.remove(session).is_some() {
            tracing::debug!(session = %session, "cleared pending flash messages");
        }
    }
}

#[async_trait]
impl FlashStore for InMemoryFlashStore {
    async fn push(&self, session: &SessionId, message: FlashMessage) -> Result<(), FlashError> {
        self.slots
            .entry(session.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn take(&self, session: &SessionId) -> Result<Vec<FlashMessage>, FlashError> {
        Ok(self
            .slots
            .remove(session)
            .map(|(_, messages)| messages)
            .unwrap_or_default())
    }

    async fn pending(&self, session: &SessionId) -> Result<usize, FlashError> {
        Ok(self.slots.get(session).map_or(0, |slot| slot.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkit_core::{Category, DisplayMethod};

    fn message(text: &str) -> FlashMessage {
        FlashMessage::new(text, Category::Info, DisplayMethod::Toast)
    }

    #[tokio::test]
    async fn take_on_absent_session_is_empty() {
        let store = InMemoryFlashStore::new();
        let session = SessionId::generate();
        assert!(store.take(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryFlashStore::new();
        let a = SessionId::generate();
        let b = SessionId::generate();

        store.push(&a, message("for a")).await.unwrap();
        store.push(&b, message("for b")).await.unwrap();

        let drained = store.take(&a).await.unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].message, "for a");
        assert_eq!(store.pending(&b).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn session_count_tracks_non_empty_slots() {
        let store = InMemoryFlashStore::new();
        let session = SessionId::generate();
        assert_eq!(store.session_count(), 0);

        store.push(&session, message("hi")).await.unwrap();
        assert_eq!(store.session_count(), 1);

        store.take(&session).await.unwrap();
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn clear_session_discards_pending() {
        let store = InMemoryFlashStore::new();
        let session = SessionId::generate();
        store.push(&session, message("gone")).await.unwrap();

        store.clear_session(&session);
        assert_eq!(store.pending(&session).await.unwrap(), 0);
    }
}
