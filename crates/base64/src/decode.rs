//! Base64 decoding: a lenient best-effort decoder and a strict validating one.
//!
//! Both run the same pipeline. Input is first reduced to [`Symbol`]s by
//! [`crate::filter::symbols`], which drops foreign bytes such as line breaks,
//! and the symbol stream is then consumed in groups of four.

use log::trace;

use crate::filter::{symbols, Symbol};
use crate::DecodeError;

/// Decodes base64 text, tolerating foreign bytes and malformed endings.
///
/// Bytes outside the alphabet (other than `=`) are skipped. For input that
/// is not well formed the policy is:
///
/// - the first `=` ends the data; the group holding it yields one byte less
///   than its count of value symbols, and everything after it is ignored;
/// - a final group of 2 or 3 symbols without padding is decoded as if it
///   were padded, a lone final symbol is dropped.
///
/// Leftover low bits of the last symbol are discarded without checking.
/// Output of [`crate::encode`] always decodes back to the original bytes.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::decode;
///
/// assert_eq!(decode("Zm9v\nYmFy"), b"foobar");
/// assert_eq!(decode("Zm8="), b"fo");
/// assert_eq!(decode("Zm8"), b"fo");
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Vec<u8> {
    let input = text.as_ref();
    let mut out = Vec::with_capacity(input.len() / 4 * 3 + 3);
    let mut sextets = [0u8; 4];
    let mut n = 0;

    let mut filtered = symbols(input);
    while let Some(symbol) = filtered.next() {
        match symbol {
            Symbol::Value(value) => {
                sextets[n] = value;
                n += 1;
                if n == 4 {
                    push_group(&mut out, &sextets, 4);
                    n = 0;
                }
            }
            Symbol::Pad => {
                let ignored = filtered.by_ref().count();
                if ignored > 0 {
                    trace!("ignoring {ignored} symbol(s) after padding");
                }
                break;
            }
        }
    }

    if n == 1 {
        trace!("dropping a lone trailing symbol");
    }
    push_group(&mut out, &sextets, n);
    out
}

/// Decodes base64 text, rejecting malformed length or padding.
///
/// Foreign bytes are still skipped. After filtering, the symbol count must
/// be a multiple of 4 and `=` may only fill the last one or two positions
/// of the final group. Positions in errors index the filtered symbols.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the filtered length is not a multiple of 4.
/// - [`DecodeError::MisplacedPadding`] if a `=` appears anywhere else.
///
/// # Example
///
/// ```
/// use tuxguitar_base64::{decode_strict, DecodeError};
///
/// assert_eq!(decode_strict("Zm9v\nYmFy").unwrap(), b"foobar");
/// assert_eq!(decode_strict("Zm8"), Err(DecodeError::InvalidLength { len: 3 }));
/// assert_eq!(
///     decode_strict("Zg==Zm8="),
///     Err(DecodeError::MisplacedPadding { position: 2 })
/// );
/// ```
pub fn decode_strict(text: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let filtered: Vec<Symbol> = symbols(text.as_ref()).collect();
    let len = filtered.len();
    if len % 4 != 0 {
        return Err(DecodeError::InvalidLength { len });
    }

    let groups = len / 4;
    let mut out = Vec::with_capacity(groups * 3);
    for (index, group) in filtered.chunks_exact(4).enumerate() {
        let (sextets, n) = read_group(group, index * 4, index + 1 == groups)?;
        push_group(&mut out, &sextets, n);
    }
    Ok(out)
}

/// Returns the group's values and how many of them precede the padding.
fn read_group(
    group: &[Symbol],
    offset: usize,
    is_last: bool,
) -> Result<([u8; 4], usize), DecodeError> {
    let mut sextets = [0u8; 4];
    let mut n = 4;
    for (i, &symbol) in group.iter().enumerate() {
        match symbol {
            Symbol::Value(value) if n == 4 => sextets[i] = value,
            // A value after padding: the first pad was out of place.
            Symbol::Value(_) => {
                return Err(DecodeError::MisplacedPadding {
                    position: offset + n,
                })
            }
            Symbol::Pad if !is_last || i < 2 => {
                return Err(DecodeError::MisplacedPadding {
                    position: offset + i,
                })
            }
            Symbol::Pad => n = n.min(i),
        }
    }
    Ok((sextets, n))
}

/// Appends the bytes carried by the first `n` sextets of a group.
fn push_group(out: &mut Vec<u8>, sextets: &[u8; 4], n: usize) {
    let [s0, s1, s2, s3] = *sextets;
    if n >= 2 {
        out.push((s0 << 2) | (s1 >> 4));
    }
    if n >= 3 {
        out.push((s1 << 4) | (s2 >> 2));
    }
    if n >= 4 {
        out.push((s2 << 6) | s3);
    }
}
