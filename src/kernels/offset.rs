//! This module contains the circular offset kernel shared by the character
//! level (`char_offset`) and digit level (`digit_offset`) rotations.
//!
//! Offsets are reduced with Euclidean modulo, so negative values rotate right
//! and any multiple of the sequence length is the identity.

/// Reduces `offset` into `0..len`. An empty sequence always has shift 0.
pub fn effective_shift(len: usize, offset: i64) -> usize {
    if len == 0 {
        return 0;
    }
    offset.rem_euclid(len as i64) as usize
}

/// Left-rotates `items` by `offset`: `items[k..] ++ items[..k]` with `k = offset mod len`.
pub fn apply_offset<T: Clone>(items: &[T], offset: i64) -> Vec<T> {
    let mut rotated = items.to_vec();
    rotated.rotate_left(effective_shift(items.len(), offset));
    rotated
}

/// String form of [`apply_offset`], rotating by characters rather than bytes.
pub fn apply_offset_str(s: &str, offset: i64) -> String {
    let chars: Vec<char> = s.chars().collect();
    apply_offset(&chars, offset).into_iter().collect()
}
