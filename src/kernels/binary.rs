//! This module contains the binary formatter kernels: shortest base-2
//! rendering of an unsigned integer, fixed-width left padding, and the
//! minimum digit width a message needs.
//!
//! This is a Layer 2 (Bit-Width) transform. It is fully panic-free; a width
//! that is too narrow is reported as a `ConfigError` instead of silently
//! dropping high-order bits.

use num_traits::{PrimInt, Unsigned};

use super::char_codec::encode_char;
use crate::error::RingcodeError;
use crate::types::CodecMode;

//==================================================================================
// 1. Single-Value Operations
//==================================================================================

/// Number of digits in the shortest binary form of `value`. Zero still needs one digit.
pub fn bit_length<T>(value: T) -> usize
where
    T: PrimInt + Unsigned,
{
    let total_bits = std::mem::size_of::<T>() * 8;
    (total_bits - value.leading_zeros() as usize).max(1)
}

/// Shortest base-2 representation of `value`: `0` -> `"0"`, `5` -> `"101"`.
pub fn to_binary<T>(value: T) -> String
where
    T: PrimInt + Unsigned,
{
    (0..bit_length(value))
        .rev()
        .map(|shift| {
            if (value >> shift) & T::one() == T::one() {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

/// Left-pads `bin_str` with `'0'` up to `width` digits.
pub fn pad(bin_str: &str, width: usize) -> Result<String, RingcodeError> {
    if bin_str.len() > width {
        return Err(RingcodeError::ConfigError(format!(
            "binary value {} needs {} digits but only {} are allocated per character",
            bin_str,
            bin_str.len(),
            width
        )));
    }
    Ok(format!("{:0>width$}", bin_str, width = width))
}

//==================================================================================
// 2. Message-Level Operations
//==================================================================================

/// The widest binary form of any character of `message` under `mode`.
/// Returns 0 for an empty message.
pub fn find_min_digits(message: &str, mode: CodecMode) -> usize {
    find_min_digits_in(message.chars(), mode)
}

pub(crate) fn find_min_digits_in<I>(chars: I, mode: CodecMode) -> usize
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .map(|c| bit_length(encode_char(c, mode)))
        .max()
        .unwrap_or(0)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
