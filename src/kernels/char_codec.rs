//! This module contains the character codec: the mapping from a single
//! character to the integer that the binary formatter will write out.
//!
//! This is a Layer 1 transform. It is PURE RUST and panic-free.

use crate::types::CodecMode;

/// The reserved "blank" code. Spaces, and in alphabet mode any non-letter,
/// encode to this value.
pub const BLANK: u32 = 0;

/// Encodes a single character according to `mode`.
///
/// - `Alphabet`: `a`/`A` -> 1 ... `z`/`Z` -> 26, anything else -> `BLANK`.
/// - `Unicode`: the code point, except the space character -> `BLANK`.
pub fn encode_char(c: char, mode: CodecMode) -> u32 {
    match mode {
        CodecMode::Alphabet if c.is_ascii_alphabetic() => {
            u32::from(c.to_ascii_lowercase()) - u32::from('a') + 1
        }
        CodecMode::Alphabet => BLANK,
        CodecMode::Unicode if c == ' ' => BLANK,
        CodecMode::Unicode => u32::from(c),
    }
}

pub fn is_blank(code: u32) -> bool {
    code == BLANK
}
