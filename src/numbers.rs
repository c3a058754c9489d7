//! Currency/numeral expansion — digits to spoken-word phrases.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `රු.`, optional whitespace, then digits with optional thousands
/// commas and at most one meaningful decimal point.
static RE_RUPEES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"රු\.\s*([0-9.,]*[0-9]+)").unwrap());

const RUPEE_UNIT: &str = "රුපියල්";
const CENT_UNIT: &str = "සත";
const CONNECTIVE: &str = "යි";

/// Strip thousands commas and leading zeros. Empty reads as zero.
/// Amounts stay as digit strings so width never truncates them.
fn normalize_digits(raw: &str) -> String {
    let stripped = raw.replace(',', "");
    let trimmed = stripped.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render one matched numeric literal as a spoken phrase.
///
/// The literal splits on `.` into an integer part and an optional cents
/// part; commas are thousands separators and are stripped. An empty
/// integer part reads as zero. More than one decimal point is malformed
/// and degrades to the unit word glued to the raw literal, never an
/// error.
fn expand_rupees(literal: &str) -> String {
    let parts: Vec<&str> = literal.split('.').collect();
    if parts.len() > 2 {
        return format!("{RUPEE_UNIT}{literal}");
    }

    let rupees = normalize_digits(parts[0]);
    let cents = parts.get(1).map(|p| normalize_digits(p));

    match (rupees.as_str(), cents.as_deref()) {
        (r, None | Some("0")) => format!("{RUPEE_UNIT} {r}"),
        ("0", Some(c)) => format!("{CENT_UNIT} {c}"),
        (r, Some(c)) => format!("{RUPEE_UNIT} {r} {CONNECTIVE} {CENT_UNIT} {c}"),
    }
}

/// Replace every currency-marker sequence with its spoken rendering.
pub fn expand_numbers(text: &str) -> String {
    RE_RUPEES
        .replace_all(text, |caps: &Captures| expand_rupees(&caps[1]))
        .to_string()
}
