//! This file is the root of the `ringcode` Rust crate.
//!
//! `ringcode` encodes short text messages as concentric rings of binary arcs,
//! the way the Perseverance rover's parachute spells "dare mighty things".
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `ring_pipeline`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the public API from `bridge`, `config` and `types`.
//!
//! # Example
//! ```
//! use ringcode::{compute_arcs, compute_ring_bits, CodecMode, RingSpec};
//!
//! let spec = RingSpec::new("c", CodecMode::Alphabet, 1, 7, 3, 0, 0);
//! let bits = compute_ring_bits(&spec)?;
//! assert_eq!(bits, "0000011000");
//! assert_eq!(compute_arcs(&bits)?.len(), 1);
//! # Ok::<(), ringcode::RingcodeError>(())
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod kernels;
pub mod logging;
pub mod ring_pipeline;
pub mod types;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use bridge::{
    compute_arcs, compute_min_digit_width, compute_ring_bits, render_pattern, DrawSurface,
    SvgSurface,
};
pub use config::PatternConfig;
pub use error::RingcodeError;
pub use ring_pipeline::{plan_pattern, PatternPlan, RingPlan};
pub use types::{ArcSpan, CodecMode, Color, Point, RingSpec};
