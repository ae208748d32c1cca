// ABOUTME: Error types for parsing typed media values.
// ABOUTME: Provides MediaError with UnknownType, InvalidReference, and InvalidTimecode variants.

use thiserror::Error;

/// Errors that can occur when parsing typed media values from text.
///
/// Classification itself never fails with an error: an unmatched input is
/// simply `None`. These errors only arise when text is parsed into one of the
/// strongly typed values of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The media type code is not two lowercase ASCII letters.
    #[error("unknown media type: {0:?}")]
    UnknownType(String),

    /// The text does not have a `type:id` shape.
    #[error("invalid media reference: {0:?}")]
    InvalidReference(String),

    /// The text is neither `[H:]M:SS` nor a plain number of seconds.
    #[error("invalid timecode: {0:?}")]
    InvalidTimecode(String),
}

impl MediaError {
    /// Creates an UnknownType error.
    pub fn unknown_type(code: impl Into<String>) -> Self {
        MediaError::UnknownType(code.into())
    }

    /// Creates an InvalidReference error.
    pub fn invalid_reference(text: impl Into<String>) -> Self {
        MediaError::InvalidReference(text.into())
    }

    /// Creates an InvalidTimecode error.
    pub fn invalid_timecode(text: impl Into<String>) -> Self {
        MediaError::InvalidTimecode(text.into())
    }
}
