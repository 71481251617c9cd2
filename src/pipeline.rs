//! Locate, fetch, render and attach.

use anyhow::{Context, Result};

use crate::components::list::mention_list;
use crate::config::RenderOptions;
use crate::document::Document;
use crate::fetch::MentionSource;

/// What `enhance` did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page has no `data-webmentions` element.
    NoContainer,
    /// The target has no mentions; the page is unchanged.
    NoMentions,
    /// A list with `count` items was appended to the container.
    Rendered { count: usize },
}

/// Adds the webmentions list for the page's target to `document`.
///
/// The list is built completely before the document is touched, so on any
/// error the document is left exactly as it was.
///
/// # Arguments
///
/// * `document`: Page to enhance
/// * `source`: Where mentions come from
/// * `target`: Overrides the target taken from the container
/// * `options`: Rendering switches
///
/// # Errors
///
/// Returns error if fetching fails or the container is not closed.
pub fn enhance(
    document: &mut Document,
    source: &impl MentionSource,
    target: Option<&str>,
    options: &RenderOptions,
) -> Result<Outcome> {
    let Some(container) = document.find_container() else {
        return Ok(Outcome::NoContainer);
    };
    let target = target.unwrap_or(&container.target);

    let mentions = source
        .fetch(target)
        .with_context(|| format!("Failed to fetch webmentions for {}", target))?;

    let Some(list) = mention_list(&mentions, options) else {
        return Ok(Outcome::NoMentions);
    };

    document.append_to_container(&container, &list.into_string())?;

    Ok(Outcome::Rendered {
        count: mentions.len(),
    })
}
