//! # flashkit-core
//!
//! Core types and queue logic for session-backed one-shot flash messages.
//!
//! Request handlers queue notifications (success/error/warning/info) tagged
//! with a display method (toast or popup); the next page render drains the
//! session's queue exactly once and hands the records to the renderer.
//!
//! ## Modules
//!
//! - [`types`] - the flash message record and its vocabularies
//! - [`config`] - application defaults and the three-tier option resolver
//! - [`store`] - the session-slot storage trait backends implement
//! - [`queue`] - the request-scoped enqueue/drain handle
//! - [`error`] - error types

pub mod config;
pub mod error;
pub mod queue;
pub mod store;
pub mod types;

pub use config::{
    DEFAULT_METHOD, DEFAULT_POPUP_ANIMATION, DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_POSITION,
    FlashConfig, resolve_animation, resolve_duration_ms, resolve_method, resolve_position,
};
pub use error::FlashError;
pub use queue::FlashQueue;
pub use store::{FlashStore, SessionId};
pub use types::{
    Category, DisplayMethod, FlashMessage, FlashOptions, PopupAnimation, ToastPosition,
};
