//! Flash message record and its vocabulary types.
//!
//! A [`FlashMessage`] is created at enqueue time, stored serialized in the
//! session slot, and consumed exactly once by a render. Category and display
//! method are closed vocabularies with a passthrough variant: callers may
//! send values outside the known set and the renderer degrades gracefully
//! (default icon for unknown categories, skip for unknown methods).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;
use uuid::Uuid;

/// Message category, driving icon and style class selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Success,
    Error,
    Warning,
    Info,
    /// Unrecognized category. Carried through to the output class list and
    /// rendered with the default icon.
    Other(String),
}

impl Category {
    /// Wire/class-name form of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Other(s) => s,
        }
    }

    /// Icon glyph for this category. Unknown categories fall back to ℹ.
    #[must_use]
    pub fn icon(&self) -> char {
        match self {
            Category::Success => '✓',
            Category::Error => '✕',
            Category::Warning => '⚠',
            Category::Info | Category::Other(_) => 'ℹ',
        }
    }

    /// Default popup title: the category name with its first letter
    /// uppercased ("success" → "Success").
    #[must_use]
    pub fn default_title(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" => Category::Warning,
            "info" => Category::Info,
            _ => Category::Other(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a message is presented: a transient toast or a blocking popup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMethod {
    Toast,
    Popup,
    /// Unrecognized method. Enqueues fine; the renderer skips it.
    Other(String),
}

impl DisplayMethod {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DisplayMethod::Toast => "toast",
            DisplayMethod::Popup => "popup",
            DisplayMethod::Other(s) => s,
        }
    }
}

impl From<String> for DisplayMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "toast" => DisplayMethod::Toast,
            "popup" => DisplayMethod::Popup,
            _ => DisplayMethod::Other(s),
        }
    }
}

impl From<&str> for DisplayMethod {
    fn from(s: &str) -> Self {
        DisplayMethod::from(s.to_string())
    }
}

impl From<DisplayMethod> for String {
    fn from(m: DisplayMethod) -> Self {
        m.as_str().to_string()
    }
}

impl std::fmt::Display for DisplayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen corner/edge where a toast is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl ToastPosition {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }
}

/// Entrance animation for popup panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopupAnimation {
    FadeIn,
    SlideIn,
    BounceIn,
}

impl PopupAnimation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PopupAnimation::FadeIn => "fadeIn",
            PopupAnimation::SlideIn => "slideIn",
            PopupAnimation::BounceIn => "bounceIn",
        }
    }
}

/// Per-message presentation overrides.
///
/// Recognized keys depend on the display method: `position` and `duration`
/// apply to toasts; `title`, `confirm_text`, and `animation` apply to
/// popups. Keys outside this set are preserved on the record but never
/// interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashOptions {
    /// Toast anchor position override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,

    /// Toast auto-dismiss delay override, in milliseconds.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,

    /// Popup title override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Popup confirm button label override.
    #[serde(rename = "confirm_text", skip_serializing_if = "Option::is_none")]
    pub confirm_label: Option<String>,

    /// Popup entrance animation override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<PopupAnimation>,

    /// Unrecognized option keys, carried but ignored.
    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl FlashOptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.duration_ms.is_none()
            && self.title.is_none()
            && self.confirm_label.is_none()
            && self.animation.is_none()
            && self.extra.is_empty()
    }
}

/// A queued notification, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Correlation key between the stored record and its rendered element.
    pub id: Uuid,

    /// Display text. Untrusted; escaped at render time.
    pub message: String,

    pub category: Category,
    pub method: DisplayMethod,

    #[serde(default, skip_serializing_if = "FlashOptions::is_empty")]
    pub options: FlashOptions,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl FlashMessage {
    /// Creates a record with a fresh v4 id and no option overrides.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        category: Category,
        method: DisplayMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            category,
            method,
            options: FlashOptions::default(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Attaches per-message option overrides.
    #[must_use]
    pub fn with_options(mut self, options: FlashOptions) -> Self {
        self.options = options;
        self
    }
}
