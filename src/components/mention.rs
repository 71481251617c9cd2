//! Single webmention template

use maud::{Markup, html};

use crate::avatar;
use crate::config::RenderOptions;
use crate::content;
use crate::mention::Mention;

/// Pixel size of generated placeholder avatars.
const AVATAR_SIZE: u32 = 48;

/// Renders one webmention list item
///
/// Fills the five template slots: `.webmention-author` (link to the author,
/// or to the mention when the author has no URL), `.webmention-author-avatar`,
/// `.webmention-author-name`, `.webmention-action` ("liked on 2021-05-04"
/// linking to the mention) and `.webmention-content`. The content slot is
/// left out entirely when the mention carries no body.
///
/// # Arguments
///
/// * `mention`: Record to render
/// * `options`: Rendering switches
///
/// # Returns
///
/// Detached `li` markup for the mention
pub fn fragment(mention: &Mention, options: &RenderOptions) -> Markup {
    let author = &mention.author;
    let photo = match &author.photo {
        Some(photo) => Some(photo.clone()),
        None if options.placeholder_avatars => Some(avatar::data_uri(&author.name, AVATAR_SIZE)),
        None => None,
    };
    let body = mention.content.as_ref().and_then(content::render);

    html! {
        li class="webmention" {
            a class="webmention-author" href=(mention.author_href()) {
                img class="webmention-author-avatar" src=[photo] alt=(format!("Photo of {}", author.name));
                span class="webmention-author-name" { (author.name) }
            }
            a class="webmention-action" href=(mention.url) { (mention.action_label()) }
            @if let Some(body) = body {
                div class="webmention-content" { (body) }
            }
        }
    }
}
