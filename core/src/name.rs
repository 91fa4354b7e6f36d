//! Partition name decoding
//!
//! GPT names are 36 UTF-16LE code units. Flash tooling only handles ASCII,
//! so names are decoded with a lossy ASCII policy instead of a full UTF-16
//! codec.

use alloc::string::String;

/// Longest decoded name, in characters
pub const NAME_MAX_CHARS: usize = 72;

/// Stand-in for any code unit outside ASCII
pub const SUBSTITUTE: char = '?';

/// Decode name code units, best-effort ASCII.
///
/// Stops at the first zero unit or after [`NAME_MAX_CHARS`] characters.
/// Units below 128 are copied verbatim, every other unit becomes
/// [`SUBSTITUTE`]. Surrogate pairs are not combined, so a character outside
/// the BMP yields two substitutes.
pub fn decode_ascii_lossy(units: &[u16]) -> String {
    units
        .iter()
        .take_while(|&&unit| unit != 0)
        .take(NAME_MAX_CHARS)
        .map(|&unit| if unit < 0x80 { char::from(unit as u8) } else { SUBSTITUTE })
        .collect()
}
