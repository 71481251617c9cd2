//! Webmention rendering for static HTML pages.

pub mod avatar;
pub mod components;
mod config;
pub mod content;
mod document;
pub mod fetch;
mod mention;
mod pipeline;

pub use config::{Config, RenderOptions};
pub use document::{Container, Document};
pub use fetch::{FetchError, MentionSource, WebmentionIo, mentions_url};
pub use mention::{Author, Body, Content, Feed, Mention, Property};
pub use pipeline::{Outcome, enhance};
