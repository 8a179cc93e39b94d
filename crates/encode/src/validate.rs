//! Structural validation of base64 text.

use crate::constants::{sextet, PAD};
use crate::FormatError;

/// Checks that `encoded` is well-formed standard base64.
///
/// The length must be a multiple of four, `=` may only appear in the last
/// two positions (and only as `x=` or `==`), and every other byte must be
/// an alphabet symbol. The empty string is valid and decodes to nothing.
///
/// # Errors
///
/// Returns the first [`FormatError`] encountered, scanning left to right.
///
/// # Example
///
/// ```
/// use bin_encode::{validate, FormatError};
///
/// assert!(validate("TWE=").is_ok());
/// assert_eq!(
///     validate("QQ Q"),
///     Err(FormatError::InvalidCharacter { position: 2, character: b' ' })
/// );
/// ```
pub fn validate(encoded: &str) -> Result<(), FormatError> {
    let bytes = encoded.as_bytes();
    let size = bytes.len();

    if size % 4 != 0 {
        return Err(FormatError::InvalidLength { size });
    }

    for (position, &c) in bytes.iter().enumerate() {
        if c == PAD {
            if position + 2 < size {
                return Err(FormatError::MisplacedPad { position });
            }
            if position + 2 == size && bytes[size - 1] != PAD {
                return Err(FormatError::UnterminatedPad { position });
            }
        } else if sextet(c).is_none() {
            return Err(FormatError::InvalidCharacter {
                position,
                character: c,
            });
        }
    }

    Ok(())
}

/// Same check as [`validate`], reporting only whether it passed.
pub fn is_valid(encoded: &str) -> bool {
    validate(encoded).is_ok()
}
