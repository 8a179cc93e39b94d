//! Output size of base64 encoding.

/// Returns the number of symbols needed to encode `source_size` bytes,
/// padding included.
///
/// # Example
///
/// ```
/// use bin_encode::encode_size;
///
/// assert_eq!(encode_size(0), 0);
/// assert_eq!(encode_size(1), 4);
/// assert_eq!(encode_size(4), 8);
/// ```
pub fn encode_size(source_size: usize) -> usize {
    // Each group of three bytes, partial or not, becomes four symbols
    source_size.div_ceil(3) * 4
}
