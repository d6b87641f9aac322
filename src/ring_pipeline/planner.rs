// In: src/ring_pipeline/planner.rs

//! The pattern planner: the pure `PatternConfig -> PatternPlan` step.
//!
//! Planning encodes every ring, compresses its digits into arcs and assigns it
//! a radius band. The resulting plan is everything a renderer needs and
//! nothing more; it can be drawn, serialized, or inspected in tests.

use serde::{Deserialize, Serialize};

use crate::config::PatternConfig;
use crate::error::RingcodeError;
use crate::kernels::arc_runs::to_arcs;
use crate::ring_pipeline::encoder::encode_ring;
use crate::types::{ArcSpan, Color, Point, RingSpec};

//==================================================================================
// 1. Plan Structures
//==================================================================================

/// One ring, ready to draw.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RingPlan {
    /// Position from the inside out.
    pub index: usize,
    pub message: String,
    pub bits: String,
    pub arcs: Vec<ArcSpan>,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// A complete pattern, ready to draw.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatternPlan {
    pub center: Point,
    pub background_radius: f64,
    pub background_color: Color,
    pub pattern_color: Color,
    pub rings: Vec<RingPlan>,
}

impl PatternPlan {
    /// Number of wedges a renderer will draw.
    pub fn total_arcs(&self) -> usize {
        self.rings.iter().map(|ring| ring.arcs.len()).sum()
    }
}

//==================================================================================
// 2. Planning Logic
//==================================================================================

/// Radius band `(inner, outer)` of ring `index` out of `num_rings`.
///
/// The band width is split evenly; every ring but the last is extended by
/// `ring_overlap` so neighbours overlap instead of leaving a seam.
pub fn ring_band(config: &PatternConfig, index: usize, num_rings: usize) -> (f64, f64) {
    let width = config.outer_radius - config.inner_radius;
    let n = num_rings as f64;
    let overlap = if index + 1 == num_rings {
        0.0
    } else {
        config.ring_overlap
    };

    let inner = config.inner_radius + width * index as f64 / n;
    let outer = config.inner_radius + width * (index + 1) as f64 / n + overlap;
    (inner, outer)
}

fn resolve_spec(config: &PatternConfig, spec: &RingSpec, index: usize) -> RingSpec {
    let min_width = spec.min_digit_width();
    if config.auto_clamp_digits && spec.digit_width < min_width {
        log::warn!(
            "ring {}: digit_width {} is too small for {:?}; widening to {}",
            index,
            spec.digit_width,
            spec.message,
            min_width
        );
        return spec.clone().with_min_digit_width();
    }
    spec.clone()
}

fn plan_ring(
    config: &PatternConfig,
    spec: &RingSpec,
    index: usize,
    num_rings: usize,
) -> Result<RingPlan, RingcodeError> {
    let spec = resolve_spec(config, spec, index);
    let bits = encode_ring(&spec)?;
    let arcs = to_arcs(&bits)?;
    let (inner_radius, outer_radius) = ring_band(config, index, num_rings);

    log_metric!(
        "event" = "plan_ring",
        "ring" = index,
        "digits" = bits.len(),
        "arcs" = arcs.len()
    );

    Ok(RingPlan {
        index,
        message: spec.message,
        bits,
        arcs,
        inner_radius,
        outer_radius,
    })
}

/// Plans a whole pattern from one configuration snapshot.
///
/// # Errors
/// `ConfigError` for invalid pattern geometry. Errors from an individual ring
/// are wrapped in `PipelineError` naming the ring.
pub fn plan_pattern(config: &PatternConfig) -> Result<PatternPlan, RingcodeError> {
    config.validate()?;

    let num_rings = config.rings.len();
    let rings = config
        .rings
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            plan_ring(config, spec, index, num_rings)
                .map_err(|e| e.in_stage(format!("ring {}", index)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let plan = PatternPlan {
        center: Point::new(
            f64::from(config.canvas_width) / 2.0,
            f64::from(config.canvas_height) / 2.0,
        ),
        background_radius: config.pattern_radius(),
        background_color: config.background_color,
        pattern_color: config.pattern_color,
        rings,
    };

    log::info!(
        "planned {} ring(s), {} arc(s) on a {}x{} canvas",
        plan.rings.len(),
        plan.total_arcs(),
        config.canvas_width,
        config.canvas_height
    );
    Ok(plan)
}
