//! Session cookie middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};

use flashkit_core::SessionId;

use crate::cookie::session_from_headers;
use crate::extract::FlashState;

/// Ensures every request carries a flash session identity.
///
/// Reads the session cookie, generating a fresh identity (and a
/// `Set-Cookie` on the response) when absent, and stashes the [`SessionId`]
/// in request extensions for the [`crate::Flash`] extractor.
///
/// Install with `axum::middleware::from_fn_with_state`:
///
/// ```ignore
/// let app = Router::new()
///     .route("/", get(index))
///     .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
///     .with_state(state);
/// ```
pub async fn session_middleware(
    State(state): State<FlashState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (session, issued) = match session_from_headers(request.headers(), &state.cookie) {
        Some(session) => (session, false),
        None => (SessionId::generate(), true),
    };

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    if issued {
        match HeaderValue::from_str(&state.cookie.set_cookie_value(&session)) {
            Ok(value) => {
                tracing::debug!(session = %session, "issued flash session cookie");
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => {
                tracing::warn!(error = %err, "session cookie value is not a valid header");
            }
        }
    }

    response
}
