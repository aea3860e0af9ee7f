//! Popup (modal) fragment builder.

use flashkit_core::{FlashConfig, FlashMessage, resolve_animation};

use crate::html::html_escape;

/// Default confirm button label when the caller supplies none.
const DEFAULT_CONFIRM_LABEL: &str = "OK";

/// Builds the HTML fragment for one popup record: a full-screen overlay
/// (id `{id}-overlay`) wrapping the panel.
///
/// Popups have no auto-dismiss; the behavior script removes the overlay only
/// when the confirm control (`data-flashkit-confirm`) is activated.
#[must_use]
pub fn render_popup(msg: &FlashMessage, config: &FlashConfig) -> String {
    let animation = resolve_animation(&msg.options, config);
    let id = msg.id.to_string();
    let title = msg
        .options
        .title
        .clone()
        .unwrap_or_else(|| msg.category.default_title());
    let confirm_label = msg
        .options
        .confirm_label
        .as_deref()
        .unwrap_or(DEFAULT_CONFIRM_LABEL);

    let mut html = String::with_capacity(768);
    html.push_str("<div id=\"");
    html.push_str(&id);
    html.push_str("-overlay\" class=\"flashkit-overlay\" style=\"display: none;\">\n");

    html.push_str("<div class=\"flashkit-popup flashkit-");
    html.push_str(&html_escape(msg.category.as_str()));
    html.push_str(" flashkit-");
    html.push_str(animation.as_str());
    html.push_str("\">\n");

    html.push_str("<div class=\"flashkit-popup-header\">\n");
    html.push_str("<span class=\"flashkit-popup-icon\">");
    html.push(msg.category.icon());
    html.push_str("</span>\n");
    html.push_str("<h3 class=\"flashkit-popup-title\">");
    html.push_str(&html_escape(&title));
    html.push_str("</h3>\n</div>\n");

    html.push_str("<div class=\"flashkit-popup-content\">\n<p>");
    html.push_str(&html_escape(&msg.message));
    html.push_str("</p>\n</div>\n");

    html.push_str("<div class=\"flashkit-popup-footer\">\n");
    html.push_str(
        "<button type=\"button\" class=\"flashkit-popup-confirm\" data-flashkit-confirm=\"",
    );
    html.push_str(&id);
    html.push_str("\">");
    html.push_str(&html_escape(confirm_label));
    html.push_str("</button>\n</div>\n");

    html.push_str("</div>\n</div>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashkit_core::{Category, DisplayMethod, FlashOptions, PopupAnimation};

    fn popup(message: &str, category: Category) -> FlashMessage {
        FlashMessage::new(message, category, DisplayMethod::Popup)
    }

    #[test]
    fn title_override_and_default_confirm_label() {
        let msg = popup("Something broke", Category::Error).with_options(FlashOptions {
            title: Some("Oops".to_string()),
            ..FlashOptions::default()
        });
        let html = render_popup(&msg, &FlashConfig::default());

        assert!(html.contains("<h3 class=\"flashkit-popup-title\">Oops</h3>"));
        assert!(html.contains(">OK</button>"));
    }

    #[test]
    fn title_defaults_to_capitalized_category() {
        let msg = popup("All good", Category::Success);
        let html = render_popup(&msg, &FlashConfig::default());
        assert!(html.contains("<h3 class=\"flashkit-popup-title\">Success</h3>"));
    }

    #[test]
    fn overlay_id_is_derived_from_record_id() {
        let msg = popup("modal", Category::Info);
        let html = render_popup(&msg, &FlashConfig::default());
        assert!(html.contains(&format!("id=\"{}-overlay\"", msg.id)));
        assert!(html.contains(&format!("data-flashkit-confirm=\"{}\"", msg.id)));
    }

    #[test]
    fn animation_resolution_order() {
        let config = FlashConfig {
            popup_animation: Some(PopupAnimation::SlideIn),
            ..FlashConfig::default()
        };

        let from_config = popup("a", Category::Info);
        assert!(render_popup(&from_config, &config).contains("flashkit-slideIn"));

        let overridden = popup("b", Category::Info).with_options(FlashOptions {
            animation: Some(PopupAnimation::BounceIn),
            ..FlashOptions::default()
        });
        assert!(render_popup(&overridden, &config).contains("flashkit-bounceIn"));

        let fallback = popup("c", Category::Info);
        assert!(render_popup(&fallback, &FlashConfig::default()).contains("flashkit-fadeIn"));
    }

    #[test]
    fn title_and_body_are_escaped() {
        let msg = popup("<b>bold</b>", Category::Warning).with_options(FlashOptions {
            title: Some("<i>sneaky</i>".to_string()),
            confirm_label: Some("<u>go</u>".to_string()),
            ..FlashOptions::default()
        });
        let html = render_popup(&msg, &FlashConfig::default());

        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<u>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
