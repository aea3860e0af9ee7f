use thiserror::Error;

/// Errors surfaced by flash queue operations.
///
/// Malformed message content never errors; the only hard failures come from
/// the session store collaborator.
#[derive(Debug, Error)]
pub enum FlashError {
    /// The session store backing the queue could not be reached.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    /// The session slot contents could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
