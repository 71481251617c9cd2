//! HTML components for rendered webmentions
//!
//! Maud component functions standing in for the page's webmention
//! template. `mention` renders one list item with the five template slots
//! and `list` wraps them in the `ul.webmentions` container that gets
//! attached to the page.

pub mod list;
pub mod mention;
