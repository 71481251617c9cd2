//! Mention body cleanup before it reaches the page.

use maud::{Markup, PreEscaped, html};

use crate::mention::{Body, Content};

/// Placeholder some sources emit in place of emoji they failed to encode.
const MANGLED_EMOJI: &str = "????";

/// Removes every `????` sequence left behind by mis-encoded emoji.
pub fn strip_mangled_emoji(text: &str) -> String {
    text.replace(MANGLED_EMOJI, "")
}

/// Cleans untrusted HTML down to ammonia's default allow-list.
///
/// Scripts, styles, event handler attributes and `javascript:` links are
/// dropped. Surviving links get `rel="noopener noreferrer"`.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

/// Renders the content slot body, or `None` when there is nothing to show.
///
/// HTML bodies are stripped and sanitized. Plain text bodies are stripped and
/// escaped by maud.
pub fn render(content: &Content) -> Option<Markup> {
    let markup = match content.body()? {
        Body::Html(html) => html! { (PreEscaped(sanitize_html(&strip_mangled_emoji(html)))) },
        Body::Text(text) => html! { (strip_mangled_emoji(text)) },
    };
    Some(markup)
}
