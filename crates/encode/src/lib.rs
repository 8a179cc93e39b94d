//! Binary-to-text encoding with strict validation.
//!
//! This crate provides:
//! - Standard base64 encoding and decoding into caller-supplied buffers
//! - Size calculators for pre-sizing those buffers
//! - Validation of encoded text, as an error or as a predicate
//! - A dispatcher selecting the encoding by [`EncodeType`]
//!
//! # Example
//!
//! ```
//! use bin_encode::{decode_to_bin, decode_to_bin_size, encode_to_str, encode_to_str_size, EncodeType};
//!
//! let data = b"hello world";
//!
//! let mut text = vec![0u8; encode_to_str_size(EncodeType::Base64, data.len())];
//! let len = encode_to_str(EncodeType::Base64, data, &mut text).unwrap();
//! let text = std::str::from_utf8(&text[..len]).unwrap();
//! assert_eq!(text, "aGVsbG8gd29ybGQ=");
//!
//! let mut bytes = vec![0u8; decode_to_bin_size(EncodeType::Base64, text).unwrap()];
//! let len = decode_to_bin(EncodeType::Base64, text, &mut bytes).unwrap();
//! assert_eq!(&bytes[..len], data);
//! ```

mod codec;
mod constants;
mod decode_size;
mod encode_size;
mod error;
mod from_base64;
mod to_base64;
mod validate;

pub use codec::{
    decode_to_bin, decode_to_bin_size, decode_to_bin_valid, decode_to_bin_validate,
    decode_to_vec, encode_to_str, encode_to_str_size, encode_to_string, EncodeType,
};
pub use constants::{ALPHABET, ALPHABET_BYTES, DECODE_TABLE, INVALID, PAD};
pub use decode_size::decode_size;
pub use encode_size::encode_size;
pub use error::{EncodeError, FormatError};
pub use from_base64::{from_base64, from_base64_into};
pub use to_base64::{to_base64, to_base64_into};
pub use validate::{is_valid, validate};
