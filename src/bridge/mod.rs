// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the ringcode library. It wraps the
// pure `ring_pipeline` engine and defines the boundary to whatever draws the result
// (a canvas, an SVG document, a test recorder).
//
// Data Flow:
//
//   1. [Caller]                          -> Holds a `PatternConfig` / `RingSpec` snapshot
//         |
//         `-> compute_ring_bits / compute_min_digit_width / compute_arcs (one ring)
//         `-> plan_pattern (whole pattern)
//
//   2. [Pipeline Engine (ring_pipeline)] -> Returns `PatternPlan`
//
//   3. [Render Driver (render_pattern)]  -> Issues `DrawSurface` calls
//         |
//         `-> clear, background disc, one wedge per arc
//
//   4. [DrawSurface impl (SvgSurface)]   -> Produces pixels / markup
//
// ====================================================================================
pub mod stateless_api;
pub mod surface;
pub mod svg;

pub use stateless_api::{compute_arcs, compute_min_digit_width, compute_ring_bits};
pub use surface::{render_pattern, DrawSurface};
pub use svg::SvgSurface;
