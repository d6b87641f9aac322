// In: src/error.rs

//! This module defines the single, unified error type for the entire ringcode library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingcodeError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The caller supplied parameters the encoder cannot honour, e.g. a digit
    /// width too narrow for the message or an unparsable colour.
    #[error("Invalid ring configuration: {0}")]
    ConfigError(String),

    /// The ring has no digit positions, so no arc size can be computed.
    #[error("Degenerate ring: {0}")]
    DegenerateRingError(String),

    #[error("Invalid binary digit {found:?} at position {position}")]
    InvalidBinaryDigit { position: usize, found: char },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    #[error("Pattern planning failed at stage '{stage}': {source}")]
    PipelineError {
        stage: String,
        #[source]
        source: Box<RingcodeError>,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (config files, SVG output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a `PatternConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl RingcodeError {
    /// Wraps `self` with the name of the pipeline stage that produced it.
    pub fn in_stage(self, stage: impl Into<String>) -> Self {
        RingcodeError::PipelineError {
            stage: stage.into(),
            source: Box::new(self),
        }
    }
}
