//! Named cleaner pipelines — selection and composition.

use crate::{abbreviations, format, numbers, transliterate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Unknown cleaner: {0}")]
    UnknownCleaner(String),
}

pub type Result<T> = std::result::Result<T, CleanerError>;

/// A named cleaner pipeline. Closed set, resolved at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleaner {
    /// Lowercase + collapse whitespace, no transliteration.
    Basic,
    /// ASCII transliteration for text outside the model's symbol set.
    Transliteration,
    /// Full Sinhala pipeline with currency and abbreviation expansion.
    Sinhala,
    /// Pass text through unchanged.
    Identity,
}

impl Cleaner {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Transliteration => "transliteration",
            Self::Sinhala => "sinhala",
            Self::Identity => "identity",
        }
    }

    /// Run this pipeline's stages, left to right.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Basic => basic_cleaners(text),
            Self::Transliteration => transliteration_cleaners(text),
            Self::Sinhala => sinhala_cleaners(text),
            Self::Identity => return_text(text),
        }
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cleaner {
    type Err = CleanerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "basic" => Ok(Self::Basic),
            "transliteration" => Ok(Self::Transliteration),
            "sinhala" => Ok(Self::Sinhala),
            "identity" => Ok(Self::Identity),
            other => Err(CleanerError::UnknownCleaner(other.to_string())),
        }
    }
}

/// Result of a pipeline run with statistics.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub output: String,
    pub input_len: usize,
    pub output_len: usize,
    pub cleaners_applied: Vec<String>,
}

/// An ordered chain of named cleaners, applied in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerPipeline {
    cleaners: Vec<Cleaner>,
}

impl CleanerPipeline {
    pub fn new(cleaners: impl Into<Vec<Cleaner>>) -> Self {
        Self { cleaners: cleaners.into() }
    }

    /// Parse a comma-delimited cleaner name list, e.g.
    /// `"transliteration,sinhala"`. Empty segments are skipped; an
    /// unknown name is an error. An empty list acts as identity.
    pub fn parse(names: &str) -> Result<Self> {
        let cleaners = names
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Cleaner::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cleaners })
    }

    pub fn cleaners(&self) -> &[Cleaner] {
        &self.cleaners
    }

    /// Run every cleaner in order, each one's output feeding the next.
    pub fn clean(&self, text: &str) -> String {
        let mut result = text.to_string();
        for cleaner in &self.cleaners {
            result = cleaner.apply(&result);
        }
        debug!(
            input_len = text.len(),
            output_len = result.len(),
            cleaners = ?self.cleaners,
            "cleaned text"
        );
        result
    }

    /// Like [`clean`](Self::clean), with run statistics returned to the
    /// caller.
    pub fn clean_with_stats(&self, text: &str) -> CleanResult {
        let input_len = text.len();
        let output = self.clean(text);
        let cleaners_applied: Vec<String> =
            self.cleaners.iter().map(|c| c.name().to_string()).collect();
        CleanResult {
            input_len,
            output_len: output.len(),
            output,
            cleaners_applied,
        }
    }
}

impl Default for CleanerPipeline {
    fn default() -> Self {
        Self::new([Cleaner::Sinhala])
    }
}

/// Basic pipeline: lowercase and collapse whitespace, no transliteration.
pub fn basic_cleaners(text: &str) -> String {
    let text = format::lowercase(text);
    format::collapse_whitespace(&text)
}

/// Pipeline for text that should be transliterated to ASCII first.
pub fn transliteration_cleaners(text: &str) -> String {
    let text = transliterate::convert_to_ascii(text);
    let text = format::lowercase(&text);
    format::collapse_whitespace(&text)
}

/// Full Sinhala pipeline, including currency and abbreviation expansion.
pub fn sinhala_cleaners(text: &str) -> String {
    let text = transliterate::convert_to_ascii(text);
    let text = format::lowercase(&text);
    let text = numbers::expand_numbers(&text);
    let text = abbreviations::expand_abbreviations(&text);
    format::collapse_whitespace(&text)
}

/// Degenerate pipeline: returns its input unchanged.
pub fn return_text(text: &str) -> String {
    text.to_string()
}
