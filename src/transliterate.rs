//! Unicode-to-ASCII transliteration.

use unidecode::unidecode;

/// Best-effort transliteration of non-ASCII characters to their nearest
/// ASCII rendering. Lossy and one-directional; characters the table has
/// no mapping for are dropped per the table's policy.
pub fn convert_to_ascii(text: &str) -> String {
    unidecode(text)
}
