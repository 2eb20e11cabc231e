//! Base64 encoding and decoding.
//!
//! This crate provides standard base64 (RFC 4648 alphabet, `=` padding) over
//! in-memory byte slices:
//! - [`encode`] / [`encode_to_vec`] produce padded text
//! - [`decode`] skips foreign bytes and decodes best-effort, never failing
//! - [`decode_strict`] skips foreign bytes but rejects malformed length or padding
//!
//! # Example
//!
//! ```
//! use tuxguitar_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded), data);
//! ```

mod alphabet;
mod decode;
mod encode;
pub mod filter;

use thiserror::Error;

pub use alphabet::{
    is_symbol, symbol_of, value_of, ALPHABET, ALPHABET_BYTES, DECODE_TABLE, INVALID, PAD,
    PAD_BYTE,
};
pub use decode::{decode, decode_strict};
pub use encode::{encode, encode_to_vec, encoded_len};
pub use filter::Symbol;

/// Error returned by [`decode_strict`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The number of symbols left after filtering is not a multiple of 4.
    #[error("base64 length must be a multiple of 4, got {len} symbols")]
    InvalidLength { len: usize },
    /// A `=` appears outside the last two positions of the final group.
    #[error("misplaced padding at symbol {position}")]
    MisplacedPadding { position: usize },
}
