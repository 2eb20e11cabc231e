//! Standard base64 encoding with `=` padding.

use crate::alphabet::{ALPHABET_BYTES, PAD_BYTE};

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i * 64 + j` holds the symbols for the 12-bit value `(i << 6) | j`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Returns the encoded length of `length` input bytes, padding included.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string.
///
/// Every 3 input bytes become 4 symbols. A trailing single byte is followed
/// by `==`, a trailing pair by `=`. Empty input gives an empty string.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::encode;
///
/// assert_eq!(encode(b"foobar"), "Zm9vYmFy");
/// assert_eq!(encode(b"fo"), "Zm8=");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    encode_with(bytes, |symbol| out.push(symbol as char));
    out
}

/// Encodes a byte slice to base64, returning the ASCII symbols as bytes.
///
/// Produces exactly the bytes of [`encode`], for callers that embed the text
/// in a binary buffer.
pub fn encode_to_vec(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(bytes.len()));
    encode_with(bytes, |symbol| out.push(symbol));
    out
}

fn encode_with(uint8: &[u8], mut push: impl FnMut(u8)) {
    let mut groups = uint8.chunks_exact(3);

    for group in &mut groups {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        push(TABLE2[v1][0]);
        push(TABLE2[v1][1]);
        push(TABLE2[v2][0]);
        push(TABLE2[v2][1]);
    }

    match *groups.remainder() {
        [] => {}
        [o1] => {
            let v1 = (o1 as usize) << 4;
            push(TABLE2[v1][0]);
            push(TABLE2[v1][1]);
            push(PAD_BYTE);
            push(PAD_BYTE);
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            push(TABLE2[v1][0]);
            push(TABLE2[v1][1]);
            push(ALPHABET_BYTES[v2]);
            push(PAD_BYTE);
        }
        _ => unreachable!("chunks_exact(3) leaves at most 2 bytes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
        assert!(encode_to_vec(b"").is_empty());
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(b"f"), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"fo"), "Zm8=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_extreme_bytes() {
        assert_eq!(encode(&[0, 0, 0]), "AAAA");
        assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "////");
        assert_eq!(encode(&[0xFF]), "/w==");
        assert_eq!(encode(&[0xFB, 0xFF]), "+/8=");
    }

    #[test]
    fn test_vec_matches_string() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(encode_to_vec(&data), encode(&data).into_bytes());
    }

    #[test]
    fn test_capacity_is_exact() {
        for n in 0..32 {
            let data = vec![0xA5u8; n];
            assert_eq!(encode(&data).len(), encoded_len(n));
        }
    }
}
