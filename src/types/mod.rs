//! This module defines the core, strongly-typed data representations used
//! throughout the ringcode pipeline.
//!
//! It includes the `CodecMode` enum which replaces the loose `is_unicode`
//! flag at every call site, the `RingSpec` snapshot a ring is encoded from,
//! and the small geometry and colour value types handed to renderers.

pub mod codec_mode;
pub mod color;
pub mod geometry;
pub mod ring_spec;

// Re-export the main type(s) for easier access.
pub use codec_mode::CodecMode;
pub use color::Color;
pub use geometry::{ArcSpan, Point};
pub use ring_spec::RingSpec;
