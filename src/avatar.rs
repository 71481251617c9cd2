//! Placeholder avatars for authors without a photo
//!
//! Initials on a pastel disc, embedded as a data URI so the page needs no
//! extra asset.

use base64::{Engine, engine::general_purpose::STANDARD};

const COLORS: &[&str] = &[
    "#dd7878", "#ea76cb", "#ca9ee6", "#b4befe", "#8caaee", "#85c1dc", "#81c8be", "#a6d189",
    "#e5c890", "#ef9f76",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercase initials taken from the first and last words.
///
/// Falls back to "?" for names without any alphanumeric word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|w| w.chars().next().is_some_and(char::is_alphanumeric))
        .collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    match (first, last) {
        (None, _) => "?".to_string(),
        (Some(a), None) => a.to_uppercase().collect(),
        (Some(a), Some(b)) => a.to_uppercase().chain(b.to_uppercase()).collect(),
    }
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let bg = COLORS[(hash(name) % COLORS.len() as u64) as usize];
    let text = maud::html! { (initials(name)) }.into_string();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.35em" text-anchor="middle" font-family="sans-serif" font-size="40" fill="white">{text}</text></svg>"##
    )
}

/// SVG avatar as a `data:` URI usable in an `img` src.
pub fn data_uri(name: &str, size: u32) -> String {
    format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(generate_svg(name, size))
    )
}
