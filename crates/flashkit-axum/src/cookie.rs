//! Session cookie configuration and parsing.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use serde::{Deserialize, Serialize};

use flashkit_core::SessionId;

/// Default session cookie name.
pub const DEFAULT_COOKIE_NAME: &str = "flashkit_session";

/// Settings for the cookie carrying the flash session identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCookieConfig {
    /// Cookie name.
    pub name: String,

    /// Cookie path scope.
    pub path: String,

    /// Whether the cookie is hidden from client-side scripts.
    pub http_only: bool,

    /// Whether the cookie is restricted to HTTPS. Off by default so local
    /// development works; enable in production.
    pub secure: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            path: "/".to_string(),
            http_only: true,
            secure: false,
        }
    }
}

impl SessionCookieConfig {
    /// Builds the `Set-Cookie` header value for a session identity.
    #[must_use]
    pub fn set_cookie_value(&self, session: &SessionId) -> String {
        let mut value = format!("{}={}; Path={}; SameSite=Lax", self.name, session, self.path);
        if self.http_only {
            value.push_str("; HttpOnly");
        }
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }
}

/// Extracts the session identity from a request's `Cookie` header.
///
/// Cookie values are opaque here; any non-empty value for the configured
/// name is accepted as a session identity.
#[must_use]
pub fn session_from_headers(
    headers: &HeaderMap,
    config: &SessionCookieConfig,
) -> Option<SessionId> {
    let cookie_header = headers.get(COOKIE)?.to_str().ok()?;

    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some((name, value)) = cookie.split_once('=')
            && name.trim() == config.name
        {
            let value = value.trim();
            if !value.is_empty() {
                return Some(SessionId::from(value));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_session_cookie_among_others() {
        let config = SessionCookieConfig::default();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; flashkit_session=abc-123; lang=en"),
        );

        let session = session_from_headers(&headers, &config).unwrap();
        assert_eq!(session.as_str(), "abc-123");
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        let config = SessionCookieConfig::default();

        let headers = HeaderMap::new();
        assert!(session_from_headers(&headers, &config).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flashkit_session="));
        assert!(session_from_headers(&headers, &config).is_none());
    }

    #[test]
    fn set_cookie_value_reflects_flags() {
        let session = SessionId::from("abc");
        let config = SessionCookieConfig {
            secure: true,
            ..SessionCookieConfig::default()
        };

        let value = config.set_cookie_value(&session);
        assert!(value.starts_with("flashkit_session=abc; Path=/"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("SameSite=Lax"));
    }
}
