//! Application-level flash defaults and the per-message resolver.
//!
//! Resolution order for every presentation field is fixed:
//! per-message option → application default → hardcoded fallback constant.
//! All lookups are pure; a missing value at one tier falls through to the
//! next, never errors.

use serde::{Deserialize, Serialize};

use crate::types::{DisplayMethod, FlashOptions, PopupAnimation, ToastPosition};

/// Fallback display method when neither the caller nor the application
/// config picks one.
pub const DEFAULT_METHOD: DisplayMethod = DisplayMethod::Toast;

/// Fallback toast anchor position.
pub const DEFAULT_TOAST_POSITION: ToastPosition = ToastPosition::TopRight;

/// Fallback toast auto-dismiss delay, in milliseconds. The client behavior
/// script uses the same value when the rendered attribute is missing or
/// non-numeric.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

/// Fallback popup entrance animation.
pub const DEFAULT_POPUP_ANIMATION: PopupAnimation = PopupAnimation::FadeIn;

/// Application-wide flash defaults, read-only after startup.
///
/// Every field is optional so deployments only state what they override;
/// unset fields fall through to the hardcoded constants above.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Default display method for messages enqueued without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_method: Option<DisplayMethod>,

    /// Default toast anchor position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_position: Option<ToastPosition>,

    /// Default toast auto-dismiss delay, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_duration_ms: Option<u32>,

    /// Default popup entrance animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_animation: Option<PopupAnimation>,
}

/// Resolves the display method for an enqueue call.
#[must_use]
pub fn resolve_method(requested: Option<DisplayMethod>, config: &FlashConfig) -> DisplayMethod {
    requested
        .or_else(|| config.default_method.clone())
        .unwrap_or(DEFAULT_METHOD)
}

/// Resolves the anchor position for a toast record.
#[must_use]
pub fn resolve_position(options: &FlashOptions, config: &FlashConfig) -> ToastPosition {
    options
        .position
        .or(config.toast_position)
        .unwrap_or(DEFAULT_TOAST_POSITION)
}

/// Resolves the auto-dismiss delay for a toast record.
#[must_use]
pub fn resolve_duration_ms(options: &FlashOptions, config: &FlashConfig) -> u32 {
    options
        .duration_ms
        .or(config.toast_duration_ms)
        .unwrap_or(DEFAULT_TOAST_DURATION_MS)
}

/// Resolves the entrance animation for a popup record.
#[must_use]
pub fn resolve_animation(options: &FlashOptions, config: &FlashConfig) -> PopupAnimation {
    options
        .animation
        .or(config.popup_animation)
        .unwrap_or(DEFAULT_POPUP_ANIMATION)
}
