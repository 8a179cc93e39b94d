//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::{encode_size, EncodeError};

#[inline]
fn symbol(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0x3f) as usize]
}

/// Writes the encoding of `source` into `dest`, which is already known to be
/// large enough.
fn encode_groups(source: &[u8], dest: &mut [u8]) -> usize {
    let mut j = 0;
    for group in source.chunks(3) {
        let b0 = group[0];
        dest[j] = symbol(b0 >> 2);

        match (group.get(1).copied(), group.get(2).copied()) {
            (None, _) => {
                dest[j + 1] = symbol((b0 & 0x03) << 4);
                dest[j + 2] = PAD;
                dest[j + 3] = PAD;
            }
            (Some(b1), None) => {
                dest[j + 1] = symbol(((b0 & 0x03) << 4) | (b1 >> 4));
                dest[j + 2] = symbol((b1 & 0x0f) << 2);
                dest[j + 3] = PAD;
            }
            (Some(b1), Some(b2)) => {
                dest[j + 1] = symbol(((b0 & 0x03) << 4) | (b1 >> 4));
                dest[j + 2] = symbol(((b1 & 0x0f) << 2) | (b2 >> 6));
                dest[j + 3] = symbol(b2 & 0x3f);
            }
        }
        j += 4;
    }
    j
}

/// Encodes `source` into the front of `dest` using standard base64 with
/// padding.
///
/// # Arguments
///
/// * `source` - The bytes to encode.
/// * `dest` - The destination buffer, at least [`encode_size`]`(source.len())` long.
///
/// # Returns
///
/// The number of bytes written to `dest`.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] if `dest` cannot hold the output.
/// Nothing is written in that case.
///
/// # Example
///
/// ```
/// use bin_encode::{encode_size, to_base64_into};
///
/// let data = b"Man";
/// let mut dest = vec![0u8; encode_size(data.len())];
/// let len = to_base64_into(data, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"TWFu");
/// ```
pub fn to_base64_into(source: &[u8], dest: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = encode_size(source.len());
    if dest.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            actual: dest.len(),
        });
    }

    Ok(encode_groups(source, dest))
}

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use bin_encode::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(source: &[u8]) -> String {
    let mut out = vec![0u8; encode_size(source.len())];
    encode_groups(source, &mut out);
    // Every byte written comes from the ASCII alphabet or is the pad byte
    out.into_iter().map(char::from).collect()
}
