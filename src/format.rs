//! Case folding and whitespace normalization primitives.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase per Unicode case folding. No-op on case-free scripts.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Replace every maximal whitespace run (space, tab, newline, ...)
/// with a single space. Idempotent.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").to_string()
}
