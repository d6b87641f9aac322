// In: src/ring_pipeline/encoder.rs

//! The message encoder: turns a `RingSpec` into the ring's final binary digit string.
//!
//! Each character slot becomes a fixed-size block of `digit_width` digits plus
//! `padding_length` filler digits. Blank slots (code 0) are written as solid
//! `1`s and, unless they are the last slot, so is their padding, which makes
//! blanks show up as continuous arcs. The block sequence is rotated by
//! `char_offset`, flattened, and then rotated again by `digit_offset`.

use crate::error::RingcodeError;
use crate::kernels::binary::{pad, to_binary};
use crate::kernels::char_codec::{encode_char, is_blank};
use crate::kernels::offset::{apply_offset, apply_offset_str};
use crate::types::{CodecMode, RingSpec};

//==================================================================================
// 1. Slot Encoding
//==================================================================================

/// The layout every slot of one ring shares.
#[derive(Debug, Clone, Copy)]
struct SlotLayout {
    mode: CodecMode,
    digit_width: usize,
    padding_length: usize,
}

impl SlotLayout {
    fn from_spec(spec: &RingSpec) -> Self {
        Self {
            mode: spec.mode(),
            digit_width: spec.digit_width,
            padding_length: spec.padding_length,
        }
    }

    /// Encodes one character into its `digit_width + padding_length` block.
    fn encode_slot(&self, c: char, is_last_slot: bool) -> Result<String, RingcodeError> {
        let code = encode_char(c, self.mode);
        let blank = is_blank(code);

        let mut block = if blank {
            "1".repeat(self.digit_width)
        } else {
            pad(&to_binary(code), self.digit_width)?
        };

        // The last slot always closes with '0' so the ring shows a visible break.
        let filler = if blank && !is_last_slot { '1' } else { '0' };
        block.extend(std::iter::repeat(filler).take(self.padding_length));
        Ok(block)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes every slot of `spec` into its block, before any offset is applied.
pub fn encode_blocks(spec: &RingSpec) -> Result<Vec<String>, RingcodeError> {
    spec.validate()?;

    let layout = SlotLayout::from_spec(spec);
    let last_slot = spec.char_count - 1;
    spec.slot_chars()
        .enumerate()
        .map(|(i, c)| layout.encode_slot(c, i == last_slot))
        .collect()
}

/// Encodes `spec` into its final binary digit string of length `spec.total_slots()`.
///
/// # Errors
/// Any error from [`RingSpec::validate`]; nothing is truncated silently.
pub fn encode_ring(spec: &RingSpec) -> Result<String, RingcodeError> {
    let blocks = encode_blocks(spec)?;

    let flattened = apply_offset(&blocks, spec.char_offset).concat();
    let bits = apply_offset_str(&flattened, spec.digit_offset);

    if bits.len() != spec.total_slots() {
        return Err(RingcodeError::InternalError(format!(
            "encoded {} digits for a ring of {} slots",
            bits.len(),
            spec.total_slots()
        )));
    }

    log::debug!(
        "encoded {:?} ({} mode, {} chars x {}+{} digits, offsets {}/{}) -> {}",
        spec.message,
        spec.mode(),
        spec.char_count,
        spec.digit_width,
        spec.padding_length,
        spec.char_offset,
        spec.digit_offset,
        bits
    );
    log_metric!(
        "event" = "encode_ring",
        "slots" = spec.total_slots(),
        "ones" = bits.bytes().filter(|&b| b == b'1').count()
    );

    Ok(bits)
}
