//! Sinhala abbreviation expansion.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered (abbreviation, expansion) pairs. Order matters: each pass
/// runs over the output of the previous one, so no expansion may itself
/// match a later pattern. That invariant holds for this fixed table and
/// is not checked at runtime.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("පෙ.ව.", "පෙරවරු"),
    ("ප.ව.", "පස්වරු"),
    ("බු.ව", "බුද්ධ වර්ෂ"),
    ("ක්‍රි.ව", "ක්‍රිස්තු වර්ෂ"),
];

static ABBREVIATION_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|(abbrev, full)| (Regex::new(&regex::escape(abbrev)).unwrap(), *full))
        .collect()
});

/// Expand every occurrence of each table pattern, in table order. Text
/// with no table pattern passes through unchanged.
pub fn expand_abbreviations(text: &str) -> String {
    let mut result = text.to_string();
    for (re, replacement) in ABBREVIATION_RES.iter() {
        result = re.replace_all(&result, *replacement).to_string();
    }
    result
}
