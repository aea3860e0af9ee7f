//! Session-slot storage trait.
//!
//! The queue never touches session state directly; it goes through
//! [`FlashStore`], which owns one pending list per session. Backends decide
//! how the list is persisted (in-process map, cookie, external store) and
//! must serialize access per session so `take` stays atomic with respect to
//! a single render.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FlashError;
use crate::types::FlashMessage;

/// Opaque per-session identity, as carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random session identity.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage trait for per-session pending flash messages.
#[async_trait]
pub trait FlashStore: Send + Sync {
    /// Append a message to the session's pending list and persist it.
    ///
    /// Creates the list lazily on first push.
    async fn push(&self, session: &SessionId, message: FlashMessage) -> Result<(), FlashError>;

    /// Atomically remove and return all pending messages for the session,
    /// in insertion order.
    ///
    /// A call that observes N messages removes exactly those N. An absent
    /// or empty slot yields an empty vec, not an error.
    async fn take(&self, session: &SessionId) -> Result<Vec<FlashMessage>, FlashError>;

    /// Number of messages currently pending for the session.
    async fn pending(&self, session: &SessionId) -> Result<usize, FlashError>;
}
