//! Toast fragment builder.

use flashkit_core::{FlashConfig, FlashMessage, resolve_duration_ms, resolve_position};

use crate::html::html_escape;

/// Builds the HTML fragment for one toast record.
///
/// The element starts hidden; the behavior script reveals it, arms the
/// auto-dismiss timer from `data-duration`, and wires the close control via
/// its `data-flashkit-dismiss` attribute.
#[must_use]
pub fn render_toast(msg: &FlashMessage, config: &FlashConfig) -> String {
    let position = resolve_position(&msg.options, config);
    let duration = resolve_duration_ms(&msg.options, config);
    let id = msg.id.to_string();

    let mut html = String::with_capacity(512);
    html.push_str("<div id=\"");
    html.push_str(&id);
    html.push_str("\" class=\"flashkit-toast flashkit-");
    html.push_str(&html_escape(msg.category.as_str()));
    html.push_str(" flashkit-");
    html.push_str(position.as_str());
    html.push_str("\" data-duration=\"");
    html.push_str(&duration.to_string());
    html.push_str("\" style=\"display: none;\">\n");

    html.push_str("<div class=\"flashkit-toast-content\">\n");
    html.push_str("<span class=\"flashkit-icon\">");
    html.push(msg.category.icon());
    html.push_str("</span>\n");
    html.push_str("<span class=\"flashkit-message\">");
    html.push_str(&html_escape(&msg.message));
    html.push_str("</span>\n");
    html.push_str("<button type=\"button\" class=\"flashkit-close\" data-flashkit-dismiss=\"");
    html.push_str(&id);
    html.push_str("\">&times;</button>\n");
    html.push_str("</div>\n</div>\n");

    html
}
