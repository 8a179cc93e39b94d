//! Tests for the codec dispatcher.

use bin_encode::{
    decode_to_bin, decode_to_bin_size, decode_to_bin_valid, decode_to_bin_validate,
    decode_to_vec, encode_to_str, encode_to_str_size, encode_to_string, EncodeError, EncodeType,
    FormatError,
};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn round_trip_through_caller_buffers() {
    for _ in 0..100 {
        let blob = generate_blob();

        let mut text = vec![0u8; encode_to_str_size(EncodeType::Base64, blob.len())];
        let len = encode_to_str(EncodeType::Base64, &blob, &mut text).unwrap();
        assert_eq!(len % 4, 0);
        let text = std::str::from_utf8(&text[..len]).unwrap();
        assert_eq!(text, encode_to_string(EncodeType::Base64, &blob));

        let mut bytes = vec![0u8; decode_to_bin_size(EncodeType::Base64, text).unwrap()];
        let len = decode_to_bin(EncodeType::Base64, text, &mut bytes).unwrap();
        assert_eq!(&bytes[..len], &blob[..]);
        assert_eq!(decode_to_vec(EncodeType::Base64, text).unwrap(), blob);
    }
}

#[test]
fn variant_from_raw_tag() {
    let encode_type = EncodeType::try_from(0u32).unwrap();
    assert_eq!(encode_to_string(encode_type, b"Man"), "TWFu");

    for tag in [1u32, 2, 64, u32::MAX] {
        assert_eq!(
            EncodeType::try_from(tag),
            Err(EncodeError::UnsupportedVariant(tag.to_string()))
        );
    }
}

#[test]
fn variant_from_name() {
    let encode_type: EncodeType = "base64".parse().unwrap();
    assert_eq!(encode_type, EncodeType::Base64);
    assert_eq!(encode_type.name(), "base64");

    let err = "hex".parse::<EncodeType>().unwrap_err();
    assert_eq!(err.to_string(), "invalid encode type hex");
}

#[test]
fn format_errors_surface_through_every_decode_entry_point() {
    let cases = [
        ("QQQ", FormatError::InvalidLength { size: 3 }),
        ("Q=QA", FormatError::MisplacedPad { position: 1 }),
        ("QQ=A", FormatError::UnterminatedPad { position: 2 }),
        (
            "QQ Q",
            FormatError::InvalidCharacter {
                position: 2,
                character: b' ',
            },
        ),
    ];

    for (text, expected) in cases {
        let expected = EncodeError::Format(expected);
        let mut dest = [0u8; 8];
        assert_eq!(
            decode_to_bin_validate(EncodeType::Base64, text),
            Err(expected.clone())
        );
        assert_eq!(
            decode_to_bin_size(EncodeType::Base64, text),
            Err(expected.clone())
        );
        assert_eq!(
            decode_to_bin(EncodeType::Base64, text, &mut dest),
            Err(expected.clone())
        );
        assert_eq!(decode_to_vec(EncodeType::Base64, text), Err(expected));
        assert!(!decode_to_bin_valid(EncodeType::Base64, text));
    }
}

#[test]
fn valid_is_false_for_short_text() {
    assert!(!decode_to_bin_valid(EncodeType::Base64, "TQ="));
    assert!(decode_to_bin_valid(EncodeType::Base64, "TQ=="));
    assert!(decode_to_bin_valid(EncodeType::Base64, ""));
}

#[test]
fn destination_too_small() {
    let mut dest = [0u8; 7];
    assert_eq!(
        encode_to_str(EncodeType::Base64, b"hello", &mut dest),
        Err(EncodeError::BufferTooSmall {
            needed: 8,
            actual: 7
        })
    );
}
