//! The canonical representation of how characters are turned into integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects the character codec used by the encoder.
///
/// Both modes reserve `0` as the blank sentinel, which the encoder renders as
/// a solid run of "on" digits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CodecMode {
    /// **Default:** ASCII letters map to their 1-based position in the Latin
    /// alphabet (`a` = 1 .. `z` = 26). Everything else is blank.
    #[default]
    Alphabet,

    /// Characters map to their Unicode code point. Only the space is blank.
    Unicode,
}

impl CodecMode {
    /// Maps the `is_unicode` flag carried by `RingSpec` onto a mode.
    pub fn from_is_unicode(is_unicode: bool) -> Self {
        if is_unicode {
            Self::Unicode
        } else {
            Self::Alphabet
        }
    }

    pub fn is_unicode(&self) -> bool {
        matches!(self, Self::Unicode)
    }
}

impl fmt::Display for CodecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet => write!(f, "alphabet"),
            Self::Unicode => write!(f, "unicode"),
        }
    }
}
