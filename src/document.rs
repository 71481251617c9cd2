//! Host HTML page handling.
//!
//! Locates the element marked with `data-webmentions` and appends rendered
//! markup as its last child. The page is treated as text: only the
//! container's start tag and its matching end tag are located, everything
//! else is preserved byte for byte. Markup inside `<!-- -->` comments is
//! never matched.

use anyhow::{Context, Result, bail};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Start tag carrying a `data-webmentions` attribute.
static CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<([a-z][a-z0-9-]*)\b[^>]*?\sdata-webmentions\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>"#,
    )
    .expect("container pattern is valid")
});

/// HTML comment, or an unterminated one running to the end of the page.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("comment pattern is valid"));

/// Copy of `html` with every comment blanked out by spaces.
///
/// Byte offsets into the copy are valid offsets into `html`.
fn mask_comments(html: &str) -> String {
    let mut masked = html.as_bytes().to_vec();
    for comment in COMMENT.find_iter(html) {
        masked[comment.range()].fill(b' ');
    }
    // Only whole comment spans are replaced with ASCII, so the bytes stay UTF-8.
    String::from_utf8(masked).unwrap_or_else(|_| html.to_string())
}

/// Element marked as the webmentions container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Target URL from the `data-webmentions` attribute.
    pub target: String,
    /// Lowercased tag name of the container element.
    pub tag: String,
    /// Byte offset just past the container's start tag.
    content_start: usize,
}

/// HTML page held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Reads a page from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page: {}", path.display()))?;
        Ok(Self::new(html))
    }

    /// Writes the page to disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.html)
            .with_context(|| format!("Failed to write page: {}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Finds the first element with a `data-webmentions` attribute.
    ///
    /// Returns `None` when the page has no such element.
    pub fn find_container(&self) -> Option<Container> {
        let masked = mask_comments(&self.html);
        let caps = CONTAINER.captures(&masked)?;
        let whole = caps.get(0)?;
        let raw = caps.get(2).or_else(|| caps.get(3))?;

        Some(Container {
            target: decode_attribute(&self.html[raw.range()]),
            tag: caps[1].to_ascii_lowercase(),
            content_start: whole.end(),
        })
    }

    /// Inserts `markup` right before the container's end tag.
    ///
    /// Nested elements with the same tag name are skipped when looking for
    /// the matching end tag.
    ///
    /// # Errors
    ///
    /// Returns error if the container has no matching end tag.
    pub fn append_to_container(&mut self, container: &Container, markup: &str) -> Result<()> {
        let end = self.closing_tag_offset(container)?;
        self.html.insert_str(end, markup);
        Ok(())
    }

    fn closing_tag_offset(&self, container: &Container) -> Result<usize> {
        let pattern = format!(r"(?i)<(/?){}\b[^>]*?(/?)>", regex::escape(&container.tag));
        let tags = Regex::new(&pattern)?;

        let masked = mask_comments(&self.html);
        let mut depth = 1usize;
        for caps in tags.captures_iter(&masked[container.content_start..]) {
            let closing = !caps[1].is_empty();
            let self_closing = !caps[2].is_empty();

            if closing {
                depth -= 1;
                if depth == 0 {
                    let offset = caps.get(0).map_or(0, |m| m.start());
                    return Ok(container.content_start + offset);
                }
            } else if !self_closing {
                depth += 1;
            }
        }

        bail!("Container <{}> has no closing tag", container.tag)
    }
}

/// Decodes the entities a URL attribute value is likely to contain.
///
/// Whitespace is kept, matching what `dataset` returns in a browser.
fn decode_attribute(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
