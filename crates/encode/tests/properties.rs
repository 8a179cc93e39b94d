//! Property tests over arbitrary inputs.

use bin_encode::{decode_size, encode_size, from_base64, is_valid, to_base64, validate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_inverts_encode(blob in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64(&blob);
        prop_assert_eq!(decode_size(&encoded), Ok(blob.len()));
        prop_assert_eq!(from_base64(&encoded), Ok(blob));
    }

    #[test]
    fn encoded_length_matches_size(n in 0usize..1024) {
        let blob = vec![0xa5u8; n];
        let encoded = to_base64(&blob);
        prop_assert_eq!(encode_size(n), n.div_ceil(3) * 4);
        prop_assert_eq!(encoded.len(), encode_size(n));
        prop_assert_eq!(encoded.len() % 4, 0);
    }

    #[test]
    fn validation_is_repeatable(text in "[A-Za-z0-9+/= !-]{0,24}") {
        let first = validate(&text);
        let second = validate(&text);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(is_valid(&text), first.is_ok());
    }

    #[test]
    fn valid_text_decodes(text in "([A-Za-z0-9+/]{4}){0,6}([A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?") {
        prop_assert!(is_valid(&text));
        let decoded = from_base64(&text).unwrap();
        prop_assert_eq!(decoded.len(), decode_size(&text).unwrap());
    }
}
