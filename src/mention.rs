//! Webmention records as returned by the jf2 mentions API.

use serde::{Deserialize, Deserializer};

/// Reads a JSON `null` as the type's default, same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Interaction kind carried in the `wm-property` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Property {
    #[serde(rename = "in-reply-to")]
    Reply,
    #[serde(rename = "like-of")]
    Like,
    #[serde(rename = "repost-of")]
    Repost,
    #[serde(rename = "mention-of")]
    Mention,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Property {
    /// Past tense verb shown in the action link.
    ///
    /// Unrecognized properties read as "interacted" instead of leaking an
    /// empty or undefined word into the page.
    pub fn action(self) -> &'static str {
        match self {
            Property::Reply => "replied",
            Property::Like => "liked",
            Property::Repost => "reposted",
            Property::Mention => "mentioned",
            Property::Unknown => "interacted",
        }
    }
}

/// Author of a webmention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub photo: Option<String>,
}

/// Body of a reply or mention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Content {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl Content {
    /// Returns the preferred body: non-empty HTML first, then plain text.
    pub fn body(&self) -> Option<Body<'_>> {
        match (self.html.as_deref(), self.text.as_deref()) {
            (Some(html), _) if !html.is_empty() => Some(Body::Html(html)),
            (_, Some(text)) if !text.is_empty() => Some(Body::Text(text)),
            _ => None,
        }
    }
}

/// Borrowed content body tagged with its markup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    Html(&'a str),
    Text(&'a str),
}

/// Single webmention record.
///
/// Every field is optional on the wire. Missing or `null` values
/// deserialize to empty strings so a malformed record still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Mention {
    #[serde(rename = "wm-property", deserialize_with = "null_as_default")]
    pub property: Property,
    #[serde(deserialize_with = "null_as_default")]
    pub author: Author,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "wm-received", deserialize_with = "null_as_default")]
    pub received: String,
    pub content: Option<Content>,
}

impl Mention {
    /// Link target for the author slot, falling back to the mention itself.
    pub fn author_href(&self) -> &str {
        if self.author.url.is_empty() {
            &self.url
        } else {
            &self.author.url
        }
    }

    /// Date portion of the received timestamp.
    ///
    /// Takes the first ten characters verbatim, which is `YYYY-MM-DD` for
    /// ISO-8601 input. Shorter values are returned whole.
    pub fn received_date(&self) -> &str {
        match self.received.char_indices().nth(10) {
            Some((end, _)) => &self.received[..end],
            None => &self.received,
        }
    }

    /// Action link label, e.g. "liked on 2021-05-04".
    pub fn action_label(&self) -> String {
        format!("{} on {}", self.property.action(), self.received_date())
    }
}

/// Response envelope of `mentions.jf2`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Feed {
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Mention>,
}
