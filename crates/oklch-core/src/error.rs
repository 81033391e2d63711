//! Error types for oklch

use thiserror::Error;

/// Result type for oklch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oklch operations
///
/// Conversions never fail; only text decoding and splicing do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input did not contain a well-formed `oklch()` literal
    #[error("No oklch() literal found in {0:?}")]
    ParseFailure(String),

    /// Span does not address a valid slice of the text
    #[error("Invalid span {start}..{end} for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
}
