//! The standard base64 alphabet and its inverse lookup table.

/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Marker stored in [`DECODE_TABLE`] for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;

/// Reverse lookup: symbol byte to its 6-bit value, [`INVALID`] for everything else.
pub static DECODE_TABLE: [u8; 256] = build_decode_table(ALPHABET_BYTES);

const fn build_decode_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the symbol for the low 6 bits of `value`.
#[inline]
pub fn symbol_of(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0b11_1111) as usize]
}

/// Returns the 6-bit value of an alphabet symbol.
///
/// The pad byte is not a member of the alphabet and maps to `None`.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::value_of;
///
/// assert_eq!(value_of(b'A'), Some(0));
/// assert_eq!(value_of(b'/'), Some(63));
/// assert_eq!(value_of(b'='), None);
/// assert_eq!(value_of(b'\n'), None);
/// ```
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns `true` if `byte` is one of the 64 alphabet symbols.
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] != INVALID
}
