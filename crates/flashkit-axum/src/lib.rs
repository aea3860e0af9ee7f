//! # flashkit-axum
//!
//! Axum integration for flashkit: a session cookie middleware and a
//! request extractor that hands handlers their session's flash queue.
//!
//! The queue reaches handlers by explicit injection - [`FlashState`] lives
//! in the router state, [`session_middleware`] pins a session identity to
//! each request, and the [`Flash`] extractor combines the two. There is no
//! ambient registry to look up and no silent no-op path: using the
//! extractor without the middleware is an explicit error response.
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::{Router, middleware, response::Redirect, routing::get};
//! use flashkit_axum::{Flash, FlashState, session_middleware};
//! use flashkit_store_memory::InMemoryFlashStore;
//!
//! async fn save(Flash(flash): Flash) -> Redirect {
//!     flash.success("Saved!").await.ok();
//!     Redirect::to("/")
//! }
//!
//! async fn index(flash: Flash) -> impl axum::response::IntoResponse {
//!     flash.render().await
//! }
//!
//! let state = FlashState::new(Arc::new(InMemoryFlashStore::new()));
//! let app: Router = Router::new()
//!     .route("/save", get(save))
//!     .route("/", get(index))
//!     .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
//!     .with_state(state);
//! ```

pub mod cookie;
pub mod extract;
pub mod middleware;

pub use cookie::{DEFAULT_COOKIE_NAME, SessionCookieConfig, session_from_headers};
pub use extract::{Flash, FlashRenderError, FlashState, SessionLayerMissing};
pub use middleware::session_middleware;
