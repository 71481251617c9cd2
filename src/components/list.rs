//! Webmention list wrapper

use maud::{Markup, html};

use super::mention::fragment;
use crate::config::RenderOptions;
use crate::mention::Mention;

/// Renders all mentions as a `ul.webmentions` list
///
/// Items keep the order of the input slice. Returns `None` for an empty
/// slice so the caller leaves the page untouched.
pub fn mention_list(mentions: &[Mention], options: &RenderOptions) -> Option<Markup> {
    if mentions.is_empty() {
        return None;
    }

    Some(html! {
        ul class="webmentions" {
            @for mention in mentions {
                (fragment(mention, options))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(url: &str) -> Mention {
        Mention {
            url: url.to_string(),
            ..Mention::default()
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert!(mention_list(&[], &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_items_in_input_order() {
        // Arrange
        let mentions = [mention("https://c"), mention("https://a"), mention("https://b")];

        // Act
        let html = mention_list(&mentions, &RenderOptions::default())
            .expect("Should render list")
            .into_string();

        // Assert
        assert!(html.starts_with(r#"<ul class="webmentions">"#));
        assert!(html.ends_with("</ul>"));
        assert_eq!(html.matches("<li ").count(), 3);
        let c = html.find("https://c").expect("c present");
        let a = html.find("https://a").expect("a present");
        let b = html.find("https://b").expect("b present");
        assert!(c < a && a < b, "Order should follow input: {}", html);
    }
}
