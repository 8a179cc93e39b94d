/// Standard base64 alphabet (RFC 4648, section 4).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array, indexed by 6-bit value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Marks a byte that is not part of the alphabet in [`DECODE_TABLE`].
pub const INVALID: i8 = -1;

/// Inverse of [`ALPHABET_BYTES`]: maps every byte to its 6-bit value, or
/// [`INVALID`] when the byte is not an alphabet symbol.
pub static DECODE_TABLE: [i8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Looks up the 6-bit value of `byte`, if it is an alphabet symbol.
#[inline]
pub(crate) fn sextet(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value as u8),
    }
}
