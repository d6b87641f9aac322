// In: src/bridge/stateless_api.rs

//! The three pure single-ring entry points a UI layer calls on every edit.

use crate::error::RingcodeError;
use crate::kernels::{arc_runs, binary};
use crate::ring_pipeline::encoder;
use crate::types::{ArcSpan, CodecMode, RingSpec};

/// Encodes one ring into its final binary digit string.
///
/// The result always has exactly `spec.total_slots()` digits.
pub fn compute_ring_bits(spec: &RingSpec) -> Result<String, RingcodeError> {
    encoder::encode_ring(spec)
}

/// The smallest `digit_width` that can hold every character of `message`.
///
/// UIs should recompute this whenever the message or mode changes and use it
/// as the lower bound of the digit-width field.
pub fn compute_min_digit_width(message: &str, mode: CodecMode) -> usize {
    binary::find_min_digits(message, mode)
}

/// Collapses a ring's digit string into the arcs to draw.
pub fn compute_arcs(bits: &str) -> Result<Vec<ArcSpan>, RingcodeError> {
    arc_runs::to_arcs(bits)
}
