//! Codec selection and dispatch.
//!
//! Every operation takes an [`EncodeType`] and forwards to the matching
//! implementation. Tags arriving from outside the type system (numeric tags,
//! names) are checked once, when they are turned into an [`EncodeType`].

use std::fmt;
use std::str::FromStr;

use crate::{
    decode_size, encode_size, from_base64_into, is_valid, to_base64, to_base64_into, validate,
    EncodeError,
};

/// Supported binary-to-text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EncodeType {
    /// Standard base64 (RFC 4648, section 4) with `=` padding.
    Base64,
}

impl EncodeType {
    /// Numeric tag of the encoding.
    pub fn tag(self) -> u32 {
        match self {
            EncodeType::Base64 => 0,
        }
    }

    /// Lowercase name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            EncodeType::Base64 => "base64",
        }
    }
}

impl TryFrom<u32> for EncodeType {
    type Error = EncodeError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(EncodeType::Base64),
            _ => Err(EncodeError::UnsupportedVariant(tag.to_string())),
        }
    }
}

impl FromStr for EncodeType {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("base64") {
            Ok(EncodeType::Base64)
        } else {
            Err(EncodeError::UnsupportedVariant(s.to_string()))
        }
    }
}

impl fmt::Display for EncodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes `source` into `dest`, returning the number of bytes written.
///
/// `dest` must be at least [`encode_to_str_size`] bytes long.
///
/// # Example
///
/// ```
/// use bin_encode::{encode_to_str, encode_to_str_size, EncodeType};
///
/// let mut dest = vec![0u8; encode_to_str_size(EncodeType::Base64, 1)];
/// let len = encode_to_str(EncodeType::Base64, &[0x4d], &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"TQ==");
/// ```
pub fn encode_to_str(
    encode_type: EncodeType,
    source: &[u8],
    dest: &mut [u8],
) -> Result<usize, EncodeError> {
    match encode_type {
        EncodeType::Base64 => to_base64_into(source, dest),
    }
}

/// Size of the text produced by encoding `source_size` bytes.
pub fn encode_to_str_size(encode_type: EncodeType, source_size: usize) -> usize {
    match encode_type {
        EncodeType::Base64 => encode_size(source_size),
    }
}

/// Decodes `encoded` into `dest`, returning the number of bytes written.
///
/// The text is validated first; `dest` must be at least
/// [`decode_to_bin_size`] bytes long.
pub fn decode_to_bin(
    encode_type: EncodeType,
    encoded: &str,
    dest: &mut [u8],
) -> Result<usize, EncodeError> {
    match encode_type {
        EncodeType::Base64 => from_base64_into(encoded, dest),
    }
}

/// Number of bytes `encoded` decodes to. Fails like [`decode_to_bin_validate`].
pub fn decode_to_bin_size(encode_type: EncodeType, encoded: &str) -> Result<usize, EncodeError> {
    match encode_type {
        EncodeType::Base64 => Ok(decode_size(encoded)?),
    }
}

/// Checks that `encoded` can be decoded.
pub fn decode_to_bin_validate(encode_type: EncodeType, encoded: &str) -> Result<(), EncodeError> {
    match encode_type {
        EncodeType::Base64 => Ok(validate(encoded)?),
    }
}

/// Like [`decode_to_bin_validate`], but reports only whether the text is valid.
pub fn decode_to_bin_valid(encode_type: EncodeType, encoded: &str) -> bool {
    match encode_type {
        EncodeType::Base64 => is_valid(encoded),
    }
}

/// Encodes `source` into a newly allocated string.
pub fn encode_to_string(encode_type: EncodeType, source: &[u8]) -> String {
    match encode_type {
        EncodeType::Base64 => to_base64(source),
    }
}

/// Decodes `encoded` into a newly allocated buffer.
///
/// # Example
///
/// ```
/// use bin_encode::{decode_to_vec, EncodeType};
///
/// let encode_type: EncodeType = "base64".parse().unwrap();
/// assert_eq!(decode_to_vec(encode_type, "TWFu").unwrap(), b"Man");
/// ```
pub fn decode_to_vec(encode_type: EncodeType, encoded: &str) -> Result<Vec<u8>, EncodeError> {
    let mut out = vec![0u8; decode_to_bin_size(encode_type, encoded)?];
    let written = decode_to_bin(encode_type, encoded, &mut out)?;
    out.truncate(written);
    Ok(out)
}
