//! Output size of base64 decoding.

use crate::constants::PAD;
use crate::{validate, FormatError};

/// Returns the number of bytes `encoded` decodes to.
///
/// The text is validated first, so this fails exactly like [`validate`].
///
/// # Example
///
/// ```
/// use bin_encode::decode_size;
///
/// assert_eq!(decode_size("TWFu").unwrap(), 3);
/// assert_eq!(decode_size("TWE=").unwrap(), 2);
/// assert_eq!(decode_size("TQ==").unwrap(), 1);
/// assert!(decode_size("TQ=").is_err());
/// ```
pub fn decode_size(encoded: &str) -> Result<usize, FormatError> {
    validate(encoded)?;

    let bytes = encoded.as_bytes();
    let mut size = bytes.len() / 4 * 3;

    // Validation guarantees the second-to-last pad only appears with the last
    if bytes.last() == Some(&PAD) {
        size -= 1;
        if bytes[bytes.len() - 2] == PAD {
            size -= 1;
        }
    }

    Ok(size)
}
