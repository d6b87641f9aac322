//! This module collects the pure, stateless kernels the ring encoder is built from.
//!
//! Every kernel is panic-free, allocation-light and independent of the
//! pipeline that strings them together. The `ring_pipeline::encoder` is the
//! only place that decides the order in which they run.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Layer 1: Character -> integer code
pub mod char_codec;

/// Layer 2: Integer -> fixed-width binary digits
pub mod binary;

/// Layer 3: Circular rotation of blocks and digits
pub mod offset;

/// Final Stage: Run collapsing into drawable arcs
pub mod arc_runs;
