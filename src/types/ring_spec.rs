// In: src/types/ring_spec.rs

//! The immutable snapshot a single ring is encoded from.
//!
//! A `RingSpec` is built fresh from user-editable parameters for every render
//! pass. Nothing derived from it is cached; the encoder is a pure function of
//! this value.

use serde::{Deserialize, Serialize};

use crate::error::RingcodeError;
use crate::kernels::binary::{find_min_digits, find_min_digits_in};
use crate::types::CodecMode;

/// Upper bound on the digit positions of a single ring.
pub const MAX_TOTAL_SLOTS: usize = 1 << 24;

/// Parameters for encoding one message into one ring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct RingSpec {
    /// The raw message text.
    #[serde(alias = "ringMessage")]
    pub message: String,

    /// `true` encodes code points, `false` encodes alphabet positions.
    #[serde(alias = "isUnicode")]
    pub is_unicode: bool,

    /// Number of character slots. The message is space-padded or truncated to this length.
    #[serde(alias = "charCount", alias = "numOfMsgChars")]
    pub char_count: usize,

    /// Binary digits allocated per character slot.
    #[serde(alias = "digitWidth", alias = "numOfDigits")]
    pub digit_width: usize,

    /// Filler digits appended after each character's digits.
    #[serde(alias = "paddingLength", alias = "paddingLen")]
    pub padding_length: usize,

    /// Rotation applied to the sequence of character blocks.
    #[serde(alias = "charOffset")]
    pub char_offset: i64,

    /// Rotation applied to the flattened digit string.
    #[serde(alias = "digitOffset")]
    pub digit_offset: i64,
}

impl RingSpec {
    pub fn new(
        message: impl Into<String>,
        mode: CodecMode,
        char_count: usize,
        digit_width: usize,
        padding_length: usize,
        char_offset: i64,
        digit_offset: i64,
    ) -> Self {
        Self {
            message: message.into(),
            is_unicode: mode.is_unicode(),
            char_count,
            digit_width,
            padding_length,
            char_offset,
            digit_offset,
        }
    }

    /// An empty alphabet ring: 8 characters, 7 digits each, 3 padding digits, no offsets.
    pub fn empty() -> Self {
        Self::new("", CodecMode::Alphabet, 8, 7, 3, 0, 0)
    }

    /// Same ring with a different message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Same ring with different offsets.
    pub fn with_offsets(mut self, char_offset: i64, digit_offset: i64) -> Self {
        self.char_offset = char_offset;
        self.digit_offset = digit_offset;
        self
    }

    pub fn mode(&self) -> CodecMode {
        CodecMode::from_is_unicode(self.is_unicode)
    }

    /// Digits occupied by one character slot, padding included. Saturates at `usize::MAX`.
    pub fn slot_width(&self) -> usize {
        self.digit_width.saturating_add(self.padding_length)
    }

    /// Total digit positions in the ring; also the arc resolution.
    ///
    /// Saturates at `usize::MAX`; [`RingSpec::validate`] rejects any ring that
    /// large, so the value is exact for every ring the encoder accepts.
    pub fn total_slots(&self) -> usize {
        self.char_count.saturating_mul(self.slot_width())
    }

    fn checked_total_slots(&self) -> Option<usize> {
        self.digit_width
            .checked_add(self.padding_length)
            .and_then(|width| self.char_count.checked_mul(width))
    }

    /// The exact characters that end up in the ring: the message truncated
    /// or right-padded with spaces to `char_count`.
    pub fn slot_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.message
            .chars()
            .chain(std::iter::repeat(' '))
            .take(self.char_count)
    }

    /// Advisory minimum `digit_width` for the whole message under the ring's mode.
    pub fn min_digit_width(&self) -> usize {
        find_min_digits(&self.message, self.mode())
    }

    /// Same ring with `digit_width` raised to [`RingSpec::min_digit_width`] when it is too small.
    pub fn with_min_digit_width(mut self) -> Self {
        self.digit_width = self.digit_width.max(self.min_digit_width());
        self
    }

    /// Checks every precondition of the encoder.
    ///
    /// # Errors
    /// - `ConfigError` when the ring would exceed [`MAX_TOTAL_SLOTS`] digits.
    /// - `DegenerateRingError` when `total_slots() == 0`.
    /// - `ConfigError` when `digit_width` or `padding_length` is zero, or when
    ///   `digit_width` is narrower than the widest encoded character.
    pub fn validate(&self) -> Result<(), RingcodeError> {
        let total_slots = match self.checked_total_slots() {
            Some(total) if total <= MAX_TOTAL_SLOTS => total,
            _ => {
                return Err(RingcodeError::ConfigError(format!(
                    "{} chars x ({} digits + {} padding) exceeds the limit of {} digit positions per ring",
                    self.char_count, self.digit_width, self.padding_length, MAX_TOTAL_SLOTS
                )))
            }
        };
        if total_slots == 0 {
            return Err(RingcodeError::DegenerateRingError(format!(
                "{} chars x ({} digits + {} padding) leaves no digit positions",
                self.char_count, self.digit_width, self.padding_length
            )));
        }
        if self.digit_width == 0 {
            return Err(RingcodeError::ConfigError(
                "digit_width must be at least 1".to_string(),
            ));
        }
        if self.padding_length == 0 {
            return Err(RingcodeError::ConfigError(
                "padding_length must be at least 1; the blank padding rule is undefined without it"
                    .to_string(),
            ));
        }

        let required = find_min_digits_in(self.slot_chars(), self.mode());
        if required > self.digit_width {
            return Err(RingcodeError::ConfigError(format!(
                "message {:?} needs {} binary digits per character in {} mode, but digit_width is {}",
                self.message,
                required,
                self.mode(),
                self.digit_width
            )));
        }
        Ok(())
    }
}

impl Default for RingSpec {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_instance_shape() {
        let spec = RingSpec::empty();
        assert_eq!(spec.message, "");
        assert_eq!(spec.mode(), CodecMode::Alphabet);
        assert_eq!(spec.total_slots(), 80);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_slot_chars_pad_and_truncate() {
        let spec = RingSpec::empty().with_message("dare");
        assert_eq!(spec.slot_chars().collect::<String>(), "dare    ");

        let long = RingSpec::empty().with_message("perseverance");
        assert_eq!(long.slot_chars().collect::<String>(), "persever");
    }

    #[test]
    fn test_min_digit_width_and_clamp() {
        let spec = RingSpec::new("mighty", CodecMode::Alphabet, 8, 2, 3, 0, 0);
        assert_eq!(spec.min_digit_width(), 5);
        assert!(spec.validate().is_err());

        let clamped = spec.with_min_digit_width();
        assert_eq!(clamped.digit_width, 5);
        assert!(clamped.validate().is_ok());

        // Clamping never narrows an already sufficient width.
        let wide = RingSpec::empty().with_message("mighty").with_min_digit_width();
        assert_eq!(wide.digit_width, 7);
    }

    #[test]
    fn test_validate_rejects_degenerate_and_zero_widths() {
        let no_chars = RingSpec::new("x", CodecMode::Alphabet, 0, 7, 3, 0, 0);
        assert!(matches!(
            no_chars.validate(),
            Err(RingcodeError::DegenerateRingError(_))
        ));

        let no_digits = RingSpec::new("", CodecMode::Alphabet, 4, 0, 3, 0, 0);
        assert!(matches!(no_digits.validate(), Err(RingcodeError::ConfigError(_))));

        let no_padding = RingSpec::new("ab", CodecMode::Alphabet, 4, 7, 0, 0, 0);
        assert!(matches!(no_padding.validate(), Err(RingcodeError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_rings_without_overflow() {
        let max_chars = RingSpec::new("a", CodecMode::Alphabet, usize::MAX, 7, 3, 0, 0);
        assert!(matches!(max_chars.validate(), Err(RingcodeError::ConfigError(_))));
        assert_eq!(max_chars.total_slots(), usize::MAX);

        let half_chars = RingSpec::new("a", CodecMode::Alphabet, usize::MAX / 2, 7, 3, 0, 0);
        assert!(matches!(half_chars.validate(), Err(RingcodeError::ConfigError(_))));

        let max_digits = RingSpec::new("a", CodecMode::Alphabet, 1, usize::MAX, 3, 0, 0);
        assert!(matches!(max_digits.validate(), Err(RingcodeError::ConfigError(_))));

        // No overflow, but far too many digits to allocate.
        let huge = RingSpec::new("a", CodecMode::Alphabet, 1 << 40, 7, 3, 0, 0);
        assert!(matches!(huge.validate(), Err(RingcodeError::ConfigError(_))));

        let at_limit = RingSpec::new("", CodecMode::Alphabet, MAX_TOTAL_SLOTS / 16, 8, 8, 0, 0);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_validate_ignores_truncated_characters() {
        // 'z' needs 5 digits but falls outside the single slot.
        let spec = RingSpec::new("az", CodecMode::Alphabet, 1, 1, 1, 0, 0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults_and_aliases() {
        let spec: RingSpec =
            serde_json::from_str(r#"{"message": "things", "charOffset": -2}"#).unwrap();
        assert_eq!(spec.message, "things");
        assert_eq!(spec.char_offset, -2);
        assert_eq!(spec.char_count, 8);
        assert_eq!(spec.digit_width, 7);
        assert_eq!(spec.padding_length, 3);
        assert!(!spec.is_unicode);
    }
}
