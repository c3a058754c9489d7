//! si-cleaners — Sinhala text cleaners for speech-synthesis front ends.
//!
//! Cleaners are transformations run over input text before it reaches a
//! grapheme/phoneme stage. Each transform maps a string to a string and
//! never fails; malformed numerals degrade to a literal rendering
//! instead of erroring.
//!
//! Pipelines (selected by name, applied left to right):
//! 1. `basic` — lowercase + collapse whitespace, no transliteration
//! 2. `transliteration` — ASCII transliteration for non-Latin text
//! 3. `sinhala` — full pipeline with currency and abbreviation expansion
//! 4. `identity` — returns input unchanged

pub mod abbreviations;
pub mod format;
pub mod numbers;
pub mod pipeline;
pub mod transliterate;

pub use abbreviations::expand_abbreviations;
pub use format::{collapse_whitespace, lowercase};
pub use numbers::expand_numbers;
pub use pipeline::{
    basic_cleaners, return_text, sinhala_cleaners, transliteration_cleaners, CleanResult, Cleaner,
    CleanerError, CleanerPipeline, Result,
};
pub use transliterate::convert_to_ascii;
