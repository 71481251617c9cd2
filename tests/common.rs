//! Shared test utilities for integration tests.
//!
//! Provides a canned mention source and helpers for writing host pages to
//! temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use webmention_render::{FetchError, Mention, MentionSource, fetch};

/// Recorded `mentions.jf2` response with one mention of each kind plus an
/// unrecognized `bookmark-of`.
pub const FEED: &str = include_str!("fixtures/mentions.json");

/// Host page with a webmentions container.
pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<body>
  <article><h1>Post</h1></article>
  <section id="mentions" data-webmentions="https://example.com/post/">
    <h2>Webmentions</h2>
  </section>
  <footer>Footer</footer>
</body>
</html>
"#;

/// Mention source answering every target with the same records.
pub struct CannedSource {
    mentions: Vec<Mention>,
    requested: RefCell<Vec<String>>,
}

impl CannedSource {
    /// Creates a source serving the recorded fixture feed.
    ///
    /// # Errors
    ///
    /// Returns error if the fixture does not parse
    pub fn fixture() -> Result<Self> {
        Ok(Self::new(fetch::parse_feed("fixture", FEED.as_bytes())?))
    }

    pub fn new(mentions: Vec<Mention>) -> Self {
        Self {
            mentions,
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Targets requested so far, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl MentionSource for CannedSource {
    fn fetch(&self, target: &str) -> Result<Vec<Mention>, FetchError> {
        self.requested.borrow_mut().push(target.to_string());
        Ok(self.mentions.clone())
    }
}

/// Writes a page into `dir`, returning its path.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_page(dir: &Path, name: &str, html: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, html)?;
    Ok(path)
}
