//! Flash state and the per-request extractor.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};

use flashkit_core::{FlashConfig, FlashError, FlashQueue, FlashStore, SessionId};

use crate::cookie::SessionCookieConfig;

/// Shared flash state: the injected store, application defaults, and cookie
/// settings.
///
/// Include it in your application state and expose it to the [`Flash`]
/// extractor via `FromRef` (or use it as the router state directly).
#[derive(Clone)]
pub struct FlashState {
    /// Session store backing the queues.
    pub store: Arc<dyn FlashStore>,

    /// Application-level flash defaults.
    pub config: Arc<FlashConfig>,

    /// Session cookie settings.
    pub cookie: SessionCookieConfig,
}

impl FlashState {
    /// Creates flash state over a store, with default config and cookie
    /// settings.
    #[must_use]
    pub fn new(store: Arc<dyn FlashStore>) -> Self {
        Self {
            store,
            config: Arc::new(FlashConfig::default()),
            cookie: SessionCookieConfig::default(),
        }
    }

    /// Sets the application flash defaults.
    #[must_use]
    pub fn with_config(mut self, config: FlashConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Sets the session cookie settings.
    #[must_use]
    pub fn with_cookie(mut self, cookie: SessionCookieConfig) -> Self {
        self.cookie = cookie;
        self
    }
}

impl std::fmt::Debug for FlashState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashState")
            .field("config", &self.config)
            .field("cookie", &self.cookie)
            .finish_non_exhaustive()
    }
}

/// Rejection returned when the session middleware is not installed on the
/// route, so no session identity reached the extractor.
#[derive(Debug)]
pub struct SessionLayerMissing;

impl IntoResponse for SessionLayerMissing {
    fn into_response(self) -> Response {
        tracing::error!("flash session middleware is not installed on this route");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "flash session middleware not installed",
        )
            .into_response()
    }
}

/// Axum extractor handing the request's [`FlashQueue`] to a handler.
///
/// Requires [`crate::session_middleware`] on the route so the request
/// carries a session identity; a missing layer is an explicit 500, not a
/// silent no-op.
///
/// ```ignore
/// async fn save(Flash(flash): Flash) -> Redirect {
///     flash.success("Saved!").await.ok();
///     Redirect::to("/")
/// }
/// ```
pub struct Flash(pub FlashQueue);

impl Flash {
    /// Drains the queue and renders pending messages as an HTML fragment
    /// ready to embed in a page template.
    pub async fn render(&self) -> Result<Html<String>, FlashRenderError> {
        let html = flashkit_render::drain_and_render(&self.0).await?;
        Ok(Html(html))
    }
}

impl std::ops::Deref for Flash {
    type Target = FlashQueue;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
    FlashState: FromRef<S>,
{
    type Rejection = SessionLayerMissing;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let flash_state = FlashState::from_ref(state);
        let session = parts
            .extensions
            .get::<SessionId>()
            .cloned()
            .ok_or(SessionLayerMissing)?;

        Ok(Flash(FlashQueue::new(
            flash_state.store,
            session,
            flash_state.config,
        )))
    }
}

/// Response-convertible wrapper for flash errors in handlers.
#[derive(Debug)]
pub struct FlashRenderError(pub FlashError);

impl From<FlashError> for FlashRenderError {
    fn from(err: FlashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for FlashRenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render flash messages");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render flash messages").into_response()
    }
}
