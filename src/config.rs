// In: src/config.rs

//! The single source of truth for all pattern configuration.
//!
//! This module defines the unified `PatternConfig` struct, which is created
//! once at the application boundary (e.g., from a user's JSON file or a UI
//! form snapshot) and then passed by reference into the planner. There is no
//! process-wide state: every render pass reads one immutable snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RingcodeError;
use crate::types::{CodecMode, Color, RingSpec};

//==================================================================================
// I. Presets
//==================================================================================

/// The first three rings of the Perseverance rover parachute: "dare mighty things".
pub fn perseverance_rings() -> Vec<RingSpec> {
    vec![
        RingSpec::new("dare", CodecMode::Alphabet, 8, 7, 3, 0, 0),
        RingSpec::new("mighty", CodecMode::Alphabet, 8, 7, 3, 4, 0),
        RingSpec::new("things", CodecMode::Alphabet, 8, 7, 3, -2, 0),
    ]
}

//==================================================================================
// II. The Unified PatternConfig
//==================================================================================

/// Everything needed to plan and render one complete ring pattern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PatternConfig {
    /// Drawing surface width, in pixels.
    #[serde(default = "default_canvas_size")]
    pub canvas_width: u32,

    /// Drawing surface height, in pixels.
    #[serde(default = "default_canvas_size")]
    pub canvas_height: u32,

    /// Radius at which the innermost ring starts.
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,

    /// Radius at which the outermost ring ends.
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,

    /// Extra radius added to every ring but the last, so neighbouring rings
    /// overlap slightly and no hairline gap is rendered between them.
    #[serde(default = "default_ring_overlap")]
    pub ring_overlap: f64,

    #[serde(default = "default_pattern_color")]
    pub pattern_color: Color,

    #[serde(default = "default_background_color")]
    pub background_color: Color,

    /// Rings from the inside out.
    #[serde(default = "perseverance_rings")]
    pub rings: Vec<RingSpec>,

    /// If true, a ring whose `digit_width` is too small for its message is
    /// widened to the minimum instead of failing with a `ConfigError`.
    #[serde(default)]
    pub auto_clamp_digits: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_size(),
            canvas_height: default_canvas_size(),
            inner_radius: default_inner_radius(),
            outer_radius: default_outer_radius(),
            ring_overlap: default_ring_overlap(),
            pattern_color: default_pattern_color(),
            background_color: default_background_color(),
            rings: perseverance_rings(),
            auto_clamp_digits: false,
        }
    }
}

impl PatternConfig {
    /// The default Perseverance parachute pattern.
    pub fn perseverance() -> Self {
        Self::default()
    }

    /// A pattern of `num_rings` empty rings, as the form shows after the ring count changes.
    pub fn with_empty_rings(num_rings: usize) -> Self {
        Self {
            rings: vec![RingSpec::empty(); num_rings],
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RingcodeError> {
        let config: PatternConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RingcodeError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, RingcodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Radius of the background disc: half of the shorter canvas side.
    pub fn pattern_radius(&self) -> f64 {
        f64::from(self.canvas_width.min(self.canvas_height)) / 2.0
    }

    /// Checks the pattern-level geometry. Individual rings are validated by the encoder.
    pub fn validate(&self) -> Result<(), RingcodeError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(RingcodeError::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        for (name, value) in [
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("ring_overlap", self.ring_overlap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RingcodeError::ConfigError(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.inner_radius > self.outer_radius {
            return Err(RingcodeError::ConfigError(format!(
                "inner_radius {} is larger than outer_radius {}",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.outer_radius > self.pattern_radius() {
            log::warn!(
                "outer_radius {} exceeds the canvas half-size {}; the pattern will be clipped",
                self.outer_radius,
                self.pattern_radius()
            );
        }
        Ok(())
    }
}

//==================================================================================
// III. Serde Defaults
//==================================================================================

fn default_canvas_size() -> u32 {
    600
}

fn default_inner_radius() -> f64 {
    75.0
}

fn default_outer_radius() -> f64 {
    300.0
}

fn default_ring_overlap() -> f64 {
    0.7
}

fn default_pattern_color() -> Color {
    Color::PARACHUTE_ORANGE
}

fn default_background_color() -> Color {
    Color::WHITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_perseverance() {
        let config = PatternConfig::default();
        assert_eq!(config.rings.len(), 3);
        assert_eq!(config.rings[1].message, "mighty");
        assert_eq!(config.rings[1].char_offset, 4);
        assert_eq!(config.rings[2].char_offset, -2);
        assert_eq!(config.pattern_radius(), 300.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PatternConfig::from_json_str(
            r##"{
                "inner_radius": 50,
                "pattern_color": "#000000",
                "rings": [{"message": "hi", "char_count": 2}]
            }"##,
        )
        .unwrap();
        assert_eq!(config.inner_radius, 50.0);
        assert_eq!(config.outer_radius, 300.0);
        assert_eq!(config.pattern_color, Color::BLACK);
        assert_eq!(config.background_color, Color::WHITE);
        assert_eq!(config.rings.len(), 1);
        assert_eq!(config.rings[0].digit_width, 7);
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = PatternConfig::with_empty_rings(2);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(PatternConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_geometry_is_config_error() {
        let inverted = PatternConfig {
            inner_radius: 200.0,
            outer_radius: 100.0,
            ..PatternConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(RingcodeError::ConfigError(_))));

        let negative = PatternConfig {
            ring_overlap: -1.0,
            ..PatternConfig::default()
        };
        assert!(matches!(negative.validate(), Err(RingcodeError::ConfigError(_))));

        let empty_canvas = PatternConfig {
            canvas_width: 0,
            ..PatternConfig::default()
        };
        assert!(matches!(empty_canvas.validate(), Err(RingcodeError::ConfigError(_))));
    }

    #[test]
    fn test_bad_colour_in_json_is_rejected() {
        let result = PatternConfig::from_json_str(r#"{"pattern_color": "orange"}"#);
        assert!(matches!(result, Err(RingcodeError::SerdeJson(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PatternConfig::from_json_file("/definitely/not/here/ringcode.json");
        assert!(matches!(result, Err(RingcodeError::Io(_))));
    }
}
