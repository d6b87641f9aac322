//! This module holds the ring pipeline: the encoder that turns one `RingSpec`
//! into digits, and the planner that turns a whole `PatternConfig` into a
//! drawable `PatternPlan`.
//!
//! Both stages are pure. They are re-run from scratch on every configuration
//! change; nothing is cached between calls.

pub mod encoder;
pub mod planner;

pub use encoder::{encode_blocks, encode_ring};
pub use planner::{plan_pattern, ring_band, PatternPlan, RingPlan};
