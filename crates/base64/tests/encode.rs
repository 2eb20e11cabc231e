//! Tests for base64 encoding (encode, encode_to_vec).

use tuxguitar_base64::{encode, encode_to_vec, encoded_len, is_symbol, PAD};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob);
        let result2 = encode_to_vec(&blob);

        // Verify against a bit-by-bit reference encoding
        let expected = base64_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
        assert_eq!(
            result2,
            expected.as_bytes(),
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn known_vectors() {
    assert_eq!(encode(b""), "");
    assert_eq!(encode(b"f"), "Zg==");
    assert_eq!(encode(b"fo"), "Zm8=");
    assert_eq!(encode(b"foo"), "Zm9v");
    assert_eq!(encode(b"foobar"), "Zm9vYmFy");
}

#[test]
fn empty_input_has_no_padding() {
    assert_eq!(encode(b""), "");
    assert_eq!(encoded_len(0), 0);
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
}

#[test]
fn padding_encodes_tail_length() {
    for len in 1..=30usize {
        let blob = vec![0x5Au8; len];
        let encoded = encode(&blob);
        let pads = encoded.chars().rev().take_while(|&c| c == PAD).count();
        assert_eq!(encoded.len(), len.div_ceil(3) * 4, "length for {len}");
        assert_eq!(pads, (3 - len % 3) % 3, "padding for {len}");
    }
}

#[test]
fn all_byte_values_stay_in_alphabet() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data);
    let body = encoded.trim_end_matches(PAD);
    for b in body.bytes() {
        assert!(is_symbol(b), "Invalid base64 character: {}", b as char);
    }
}

/// Simple base64 encoding for test verification (no shared tables).
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let chunk = &data[i..std::cmp::min(i + 3, data.len())];
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}
