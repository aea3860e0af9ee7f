//! Per-session flash queue.
//!
//! [`FlashQueue`] is a request-scoped handle: it carries the injected store,
//! the session identity, and the application defaults explicitly, so enqueue
//! and drain never reach into ambient state. Handlers receive one per
//! request (see the axum integration crate) and call it directly.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{self, FlashConfig};
use crate::error::FlashError;
use crate::store::{FlashStore, SessionId};
use crate::types::{Category, DisplayMethod, FlashMessage, FlashOptions};

/// Request-scoped handle to one session's pending flash messages.
#[derive(Clone)]
pub struct FlashQueue {
    store: Arc<dyn FlashStore>,
    session: SessionId,
    config: Arc<FlashConfig>,
}

impl FlashQueue {
    /// Creates a queue handle for the given session.
    #[must_use]
    pub fn new(store: Arc<dyn FlashStore>, session: SessionId, config: Arc<FlashConfig>) -> Self {
        Self {
            store,
            session,
            config,
        }
    }

    /// Returns the session identity this handle is bound to.
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Returns the application defaults this handle resolves against.
    #[must_use]
    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Queues a message with full control over method and options.
    ///
    /// When `method` is `None` it is resolved from the application defaults
    /// (falling back to toast). Message content is never validated; unknown
    /// categories and methods are stored as-is and degrade at render time.
    /// Only store unavailability fails.
    pub async fn enqueue(
        &self,
        message: impl Into<String>,
        category: Category,
        method: Option<DisplayMethod>,
        options: FlashOptions,
    ) -> Result<Uuid, FlashError> {
        let method = config::resolve_method(method, &self.config);
        let record = FlashMessage::new(message, category, method).with_options(options);
        let id = record.id;

        tracing::debug!(
            session = %self.session,
            id = %id,
            category = %record.category,
            method = %record.method,
            "flash message queued"
        );

        self.store.push(&self.session, record).await?;
        Ok(id)
    }

    /// Queues a message with the default method and no option overrides.
    pub async fn flash(
        &self,
        message: impl Into<String>,
        category: Category,
    ) -> Result<Uuid, FlashError> {
        self.enqueue(message, category, None, FlashOptions::default())
            .await
    }

    /// Queues a success message with the default method.
    pub async fn success(&self, message: impl Into<String>) -> Result<Uuid, FlashError> {
        self.flash(message, Category::Success).await
    }

    /// Queues an error message with the default method.
    pub async fn error(&self, message: impl Into<String>) -> Result<Uuid, FlashError> {
        self.flash(message, Category::Error).await
    }

    /// Queues a warning message with the default method.
    pub async fn warning(&self, message: impl Into<String>) -> Result<Uuid, FlashError> {
        self.flash(message, Category::Warning).await
    }

    /// Queues an info message with the default method.
    pub async fn info(&self, message: impl Into<String>) -> Result<Uuid, FlashError> {
        self.flash(message, Category::Info).await
    }

    /// Removes and returns all pending messages in insertion order.
    ///
    /// The queue is empty afterward; a second drain returns an empty vec.
    pub async fn drain(&self) -> Result<Vec<FlashMessage>, FlashError> {
        let messages = self.store.take(&self.session).await?;
        if !messages.is_empty() {
            tracing::debug!(session = %self.session, count = messages.len(), "flash queue drained");
        }
        Ok(messages)
    }

    /// Removes all pending messages and returns only those whose category
    /// is in `categories`.
    ///
    /// One-shot inbox semantics: non-matching messages are discarded, not
    /// retained. The queue is fully empty after this call regardless of how
    /// many messages matched.
    pub async fn drain_filtered(
        &self,
        categories: &[Category],
    ) -> Result<Vec<FlashMessage>, FlashError> {
        let messages = self.drain().await?;
        let total = messages.len();
        let matching: Vec<FlashMessage> = messages
            .into_iter()
            .filter(|m| categories.contains(&m.category))
            .collect();

        let discarded = total - matching.len();
        if discarded > 0 {
            tracing::debug!(
                session = %self.session,
                discarded,
                "filtered drain discarded non-matching flash messages"
            );
        }
        Ok(matching)
    }

    /// Number of messages currently pending.
    pub async fn pending(&self) -> Result<usize, FlashError> {
        self.store.pending(&self.session).await
    }
}

impl std::fmt::Debug for FlashQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashQueue")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// Minimal store for exercising the queue without a backend crate.
    #[derive(Default)]
    struct MapStore {
        slots: Mutex<HashMap<SessionId, Vec<FlashMessage>>>,
        unavailable: bool,
    }

    #[async_trait]
    impl FlashStore for MapStore {
        async fn push(
            &self,
            session: &SessionId,
            message: FlashMessage,
        ) -> Result<(), FlashError> {
            if self.unavailable {
                return Err(FlashError::StoreUnavailable("connection refused".into()));
            }
            let mut slots = self.slots.lock().await;
            slots.entry(session.clone()).or_default().push(message);
            Ok(())
        }

        async fn take(&self, session: &SessionId) -> Result<Vec<FlashMessage>, FlashError> {
            if self.unavailable {
                return Err(FlashError::StoreUnavailable("connection refused".into()));
            }
            let mut slots = self.slots.lock().await;
            Ok(slots.remove(session).unwrap_or_default())
        }

        async fn pending(&self, session: &SessionId) -> Result<usize, FlashError> {
            let slots = self.slots.lock().await;
            Ok(slots.get(session).map_or(0, Vec::len))
        }
    }

    fn queue() -> FlashQueue {
        FlashQueue::new(
            Arc::new(MapStore::default()),
            SessionId::generate(),
            Arc::new(FlashConfig::default()),
        )
    }

    #[tokio::test]
    async fn enqueue_resolves_default_method() {
        let q = queue();
        q.success("Saved!").await.unwrap();

        let messages = q.drain().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].method, DisplayMethod::Toast);
        assert_eq!(messages[0].category, Category::Success);
    }

    #[tokio::test]
    async fn enqueue_honors_config_default_method() {
        let store = Arc::new(MapStore::default());
        let config = FlashConfig {
            default_method: Some(DisplayMethod::Popup),
            ..FlashConfig::default()
        };
        let q = FlashQueue::new(store, SessionId::generate(), Arc::new(config));
        q.info("Heads up").await.unwrap();

        let messages = q.drain().await.unwrap();
        assert_eq!(messages[0].method, DisplayMethod::Popup);
    }

    #[tokio::test]
    async fn unknown_category_and_method_enqueue_fine() {
        let q = queue();
        q.enqueue(
            "custom",
            Category::from("debug"),
            Some(DisplayMethod::from("banner")),
            FlashOptions::default(),
        )
        .await
        .unwrap();

        let messages = q.drain().await.unwrap();
        assert_eq!(messages[0].category, Category::Other("debug".into()));
        assert_eq!(messages[0].method, DisplayMethod::Other("banner".into()));
    }

    #[tokio::test]
    async fn pending_counts_without_draining() {
        let q = queue();
        q.info("one").await.unwrap();
        q.info("two").await.unwrap();
        assert_eq!(q.pending().await.unwrap(), 2);
        assert_eq!(q.drain().await.unwrap().len(), 2);
        assert_eq!(q.pending().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn store_unavailability_propagates() {
        let store = Arc::new(MapStore {
            unavailable: true,
            ..MapStore::default()
        });
        let q = FlashQueue::new(
            store,
            SessionId::generate(),
            Arc::new(FlashConfig::default()),
        );

        let err = q.info("lost").await.unwrap_err();
        assert!(matches!(err, FlashError::StoreUnavailable(_)));
        let err = q.drain().await.unwrap_err();
        assert!(matches!(err, FlashError::StoreUnavailable(_)));
    }
}
