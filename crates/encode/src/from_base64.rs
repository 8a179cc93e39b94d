//! Standard base64 decoding.

use crate::constants::{DECODE_TABLE, PAD};
use crate::{decode_size, EncodeError, FormatError};

/// Writes the bytes encoded by validated `encoded` into `dest`, which is
/// already known to be large enough.
fn decode_groups(encoded: &[u8], dest: &mut [u8]) -> usize {
    // Pads map to the sentinel, but their sextets are never consumed
    let inv = |c: u8| DECODE_TABLE[c as usize] as u8;

    let mut j = 0;
    for group in encoded.chunks_exact(4) {
        let (c0, c1, c2, c3) = (group[0], group[1], group[2], group[3]);

        dest[j] = (inv(c0) << 2) | (inv(c1) >> 4);
        j += 1;

        if c2 != PAD {
            dest[j] = (inv(c1) << 4) | (inv(c2) >> 2);
            j += 1;
        }

        if c3 != PAD {
            dest[j] = ((inv(c2) << 6) & 0xc0) | inv(c3);
            j += 1;
        }
    }
    j
}

/// Decodes standard base64 text into the front of `dest`.
///
/// The text is always validated before anything is written.
///
/// # Arguments
///
/// * `encoded` - The base64 text, padding included.
/// * `dest` - The destination buffer, at least [`decode_size`]`(encoded)` long.
///
/// # Returns
///
/// The number of bytes written to `dest`.
///
/// # Errors
///
/// Returns [`EncodeError::Format`] if `encoded` is malformed and
/// [`EncodeError::BufferTooSmall`] if `dest` cannot hold the output.
///
/// # Example
///
/// ```
/// use bin_encode::{decode_size, from_base64_into};
///
/// let mut dest = vec![0u8; decode_size("TWE=").unwrap()];
/// let len = from_base64_into("TWE=", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"Ma");
/// ```
pub fn from_base64_into(encoded: &str, dest: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = decode_size(encoded)?;
    if dest.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            actual: dest.len(),
        });
    }

    Ok(decode_groups(encoded.as_bytes(), dest))
}

/// Decodes a standard base64 string to bytes.
///
/// # Example
///
/// ```
/// use bin_encode::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// assert!(from_base64("aGVsbG8gd29ybGQ").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, FormatError> {
    let mut out = vec![0u8; decode_size(encoded)?];
    decode_groups(encoded.as_bytes(), &mut out);
    Ok(out)
}
