/*!
 * Error types for the hanzi-sheets library.
 *
 * The LaTeX formatters are total and never fail. The errors here cover the
 * places where caller input is parsed: glyph file names and vocabulary
 * records.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when mapping stroke SVG names back to characters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// File name does not start with a decimal codepoint
    #[error("Invalid glyph file name: {0}")]
    InvalidFileName(String),

    /// Codepoint is not a Unicode scalar value
    #[error("Codepoint {0} is not a valid character")]
    InvalidCodepoint(u32),
}

/// Errors that can occur when reading vocabulary records
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Level name outside foundation/beginner/intermediate/advanced
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    /// Record list could not be decoded
    #[error("Failed to parse vocabulary records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main library error type that wraps all other errors
///
/// Library functions return the narrower error types; callers combining
/// several of them can convert into this one with `?`.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Error from glyph name handling
    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),

    /// Error from vocabulary handling
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for SheetError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
