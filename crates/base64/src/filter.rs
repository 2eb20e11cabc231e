//! Input filtering for the decoder.
//!
//! Decoding runs in two stages: this module reduces raw input to a stream
//! of [`Symbol`]s, silently dropping every byte that is neither an alphabet
//! symbol nor the pad byte; the decoder then consumes that stream in groups
//! of four.

use crate::alphabet::{value_of, PAD_BYTE};

/// One unit of filtered decoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An alphabet symbol, carrying its 6-bit value (`0..=63`).
    Value(u8),
    /// The pad byte `=`.
    Pad,
}

impl Symbol {
    /// Classifies a raw input byte. Foreign bytes give `None`.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Symbol> {
        if byte == PAD_BYTE {
            return Some(Symbol::Pad);
        }
        value_of(byte).map(Symbol::Value)
    }

    pub fn is_pad(self) -> bool {
        matches!(self, Symbol::Pad)
    }
}

/// Returns the symbols of `input` in order, skipping foreign bytes.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::filter::{symbols, Symbol};
///
/// let filtered: Vec<Symbol> = symbols(b"Z g\r\n=").collect();
/// assert_eq!(filtered, vec![Symbol::Value(25), Symbol::Value(32), Symbol::Pad]);
/// ```
pub fn symbols(input: &[u8]) -> impl Iterator<Item = Symbol> + '_ {
    input.iter().copied().filter_map(Symbol::from_byte)
}
