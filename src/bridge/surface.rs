//! The drawing-surface boundary and the driver that walks a `PatternPlan` onto it.

use crate::ring_pipeline::PatternPlan;
use crate::types::{ArcSpan, Color, Point};

/// A 2D surface that can draw the two primitives a ring pattern needs.
///
/// Implementations are pure side-effecting sinks: no method can fail. Angles
/// are in radians, zero along +x, increasing clockwise on a y-down surface.
pub trait DrawSurface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill a full disc, used as the pattern background.
    fn draw_background_disc(&mut self, center: Point, radius: f64, color: Color);

    /// Fill one annular wedge: the outer arc from `start_angle` to `end_angle`
    /// (clockwise), joined to the inner arc from `end_angle` back to
    /// `start_angle` (counter-clockwise).
    fn draw_wedge(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    );
}

/// Draws one ring's arcs as wedges within the given radius band.
pub fn draw_ring<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    arcs: &[ArcSpan],
    color: Color,
) {
    for arc in arcs {
        surface.draw_wedge(center, inner_radius, outer_radius, arc.start, arc.end, color);
    }
}

/// Renders a full pattern: clear, background disc, then every ring from the inside out.
pub fn render_pattern<S: DrawSurface + ?Sized>(plan: &PatternPlan, surface: &mut S) {
    surface.clear();
    surface.draw_background_disc(plan.center, plan.background_radius, plan.background_color);

    for ring in &plan.rings {
        draw_ring(
            surface,
            plan.center,
            ring.inner_radius,
            ring.outer_radius,
            &ring.arcs,
            plan.pattern_color,
        );
    }

    log::debug!(
        "rendered {} wedge(s) across {} ring(s)",
        plan.total_arcs(),
        plan.rings.len()
    );
}
