//! Error types.

use thiserror::Error;

/// Structural problem found while validating base64 text.
///
/// The `Display` text is the human-readable reason; [`FormatError::position`]
/// gives the offending byte offset where one applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("base64 size {size} is not evenly divisible by 4")]
    InvalidLength { size: usize },
    #[error("base64 '=' character may only appear in last two positions")]
    MisplacedPad { position: usize },
    #[error("base64 last character must be '=' if second to last is")]
    UnterminatedPad { position: usize },
    #[error("base64 invalid character found at position {position}")]
    InvalidCharacter { position: usize, character: u8 },
}

impl FormatError {
    /// Byte offset of the offending character, if the error refers to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            FormatError::InvalidLength { .. } => None,
            FormatError::MisplacedPad { position }
            | FormatError::UnterminatedPad { position }
            | FormatError::InvalidCharacter { position, .. } => Some(*position),
        }
    }
}

/// Error returned by the codec dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The codec tag does not name a supported encoding.
    #[error("invalid encode type {0}")]
    UnsupportedVariant(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The destination buffer cannot hold the output.
    #[error("destination buffer holds {actual} bytes but {needed} are required")]
    BufferTooSmall { needed: usize, actual: usize },
}
