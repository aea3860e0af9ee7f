//! # flashkit-render
//!
//! Pure renderer from drained flash message records to a self-contained HTML
//! fragment.
//!
//! [`render`] dispatches each record on its display method to the toast or
//! popup builder, concatenates the fragments in input order inside one
//! container, and appends the client behavior bootstrap exactly once.
//! Records with an unknown method are skipped, never an error. All
//! caller-supplied text is HTML-escaped by the builders.
//!
//! [`drain_and_render`] is the one-call embedding point for page templates:
//! it consumes the session's queue and renders whatever was pending.

pub mod assets;
pub mod html;
pub mod popup;
pub mod toast;

use flashkit_core::{DisplayMethod, FlashConfig, FlashError, FlashMessage, FlashQueue};

pub use assets::{BEHAVIOR_SCRIPT, STYLESHEET, include_css, include_js};
pub use html::html_escape;
pub use popup::render_popup;
pub use toast::render_toast;

/// DOM id of the container wrapping all rendered fragments.
pub const CONTAINER_ID: &str = "flashkit-container";

/// Renders drained records to a fragment plus a single behavior bootstrap.
///
/// An empty input yields an empty string: pages without pending messages
/// emit nothing, including no bootstrap.
#[must_use]
pub fn render(messages: &[FlashMessage], config: &FlashConfig) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(messages.len() * 512 + assets::BEHAVIOR_SCRIPT.len() + 64);
    out.push_str("<div id=\"");
    out.push_str(CONTAINER_ID);
    out.push_str("\">\n");

    for msg in messages {
        match &msg.method {
            DisplayMethod::Toast => out.push_str(&toast::render_toast(msg, config)),
            DisplayMethod::Popup => out.push_str(&popup::render_popup(msg, config)),
            DisplayMethod::Other(method) => {
                tracing::debug!(
                    id = %msg.id,
                    method = %method,
                    "skipping flash message with unknown display method"
                );
            }
        }
    }

    out.push_str("</div>\n<script>");
    out.push_str(assets::BEHAVIOR_SCRIPT);
    out.push_str("</script>\n");
    out
}

/// Drains the queue and renders whatever was pending.
///
/// The queue is empty afterward even when nothing renders (unknown-method
/// records are consumed too). Only store unavailability fails.
pub async fn drain_and_render(queue: &FlashQueue) -> Result<String, FlashError> {
    let messages = queue.drain().await?;
    Ok(render(&messages, queue.config()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkit_core::{Category, FlashOptions, SessionId};
    use flashkit_store_memory::InMemoryFlashStore;
    use std::sync::Arc;

    fn msg(text: &str, category: Category, method: DisplayMethod) -> FlashMessage {
        FlashMessage::new(text, category, method)
    }

    #[test]
    fn empty_input_renders_nothing() {
        let out = render(&[], &FlashConfig::default());
        assert!(out.is_empty());
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn two_records_share_one_bootstrap() {
        let messages = vec![
            msg("one", Category::Success, DisplayMethod::Toast),
            msg("two", Category::Error, DisplayMethod::Popup),
        ];
        let out = render(&messages, &FlashConfig::default());

        assert_eq!(out.matches("<script>").count(), 1);
        assert_eq!(out.matches(CONTAINER_ID).count(), 1);
        assert!(out.contains("one"));
        assert!(out.contains("two"));
    }

    #[test]
    fn fragments_keep_input_order() {
        let messages = vec![
            msg("alpha", Category::Info, DisplayMethod::Toast),
            msg("beta", Category::Info, DisplayMethod::Toast),
        ];
        let out = render(&messages, &FlashConfig::default());
        assert!(out.find("alpha").unwrap() < out.find("beta").unwrap());
    }

    #[test]
    fn unknown_method_is_skipped_but_neighbors_render() {
        let messages = vec![
            msg("visible", Category::Success, DisplayMethod::Toast),
            msg("invisible", Category::Info, DisplayMethod::from("banner")),
            msg("also visible", Category::Error, DisplayMethod::Popup),
        ];
        let out = render(&messages, &FlashConfig::default());

        assert!(out.contains("visible"));
        assert!(out.contains("also visible"));
        assert!(!out.contains("invisible"));
    }

    #[test]
    fn script_injection_in_message_is_neutralized() {
        let messages = vec![msg(
            "<script>alert('xss')</script>",
            Category::Info,
            DisplayMethod::Toast,
        )];
        let out = render(&messages, &FlashConfig::default());

        // Exactly the bootstrap script, nothing smuggled in via the message.
        assert_eq!(out.matches("<script>").count(), 1);
        assert!(out.contains("&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn drain_and_render_consumes_the_queue() {
        let queue = FlashQueue::new(
            Arc::new(InMemoryFlashStore::new()),
            SessionId::generate(),
            Arc::new(FlashConfig::default()),
        );
        queue.success("Saved!").await.unwrap();

        let out = drain_and_render(&queue).await.unwrap();
        assert!(out.contains('✓'));
        assert!(out.contains("flashkit-success"));
        assert!(out.contains("flashkit-top-right"));
        assert!(out.contains("data-duration=\"5000\""));

        // A second render pays near-zero cost: the queue is empty.
        let again = drain_and_render(&queue).await.unwrap();
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn popup_scenario_title_override() {
        let queue = FlashQueue::new(
            Arc::new(InMemoryFlashStore::new()),
            SessionId::generate(),
            Arc::new(FlashConfig::default()),
        );
        queue
            .enqueue(
                "Something went wrong",
                Category::Error,
                Some(DisplayMethod::Popup),
                FlashOptions {
                    title: Some("Oops".to_string()),
                    ..FlashOptions::default()
                },
            )
            .await
            .unwrap();

        let out = drain_and_render(&queue).await.unwrap();
        assert!(out.contains(">Oops</h3>"));
        assert!(out.contains(">OK</button>"));
    }
}
