//! Text normalization applied ahead of vectorization.
//!
//! `normalize` lowercases, strips URL and email tokens, drops ASCII
//! punctuation, and collapses whitespace. The function is total and
//! idempotent.

use std::sync::OnceLock;

use regex::Regex;

/// Cached regex for URL-like tokens (`http`, `https` or `www` up to the next whitespace)
fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap())
}

/// Cached regex for email-like tokens plus one trailing whitespace character
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S*@\S*\s?").unwrap())
}

/// Normalize free text for classification.
pub fn normalize(text: &str) -> String {
    let mut current = text.to_lowercase();

    // Punctuation removal can splice fragments into a new URL token
    // ("ht.tpx" -> "httpx"), so steps 2 and 3 run to a fixed point.
    loop {
        let next = strip_punctuation(&strip_contacts(&current));
        if next == current {
            break;
        }
        current = next;
    }

    current.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an arbitrary JSON value; anything that is not a string maps to `""`.
pub fn normalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => normalize(text),
        _ => String::new(),
    }
}

fn strip_contacts(text: &str) -> String {
    let without_urls = url_regex().replace_all(text, "");
    email_regex().replace_all(&without_urls, "").into_owned()
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
