// In: src/bridge/svg.rs

//! A `DrawSurface` that builds a standalone SVG document.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::bridge::surface::DrawSurface;
use crate::error::RingcodeError;
use crate::types::{Color, Point};

/// Tolerance below `2π` at which a wedge is treated as a full annulus.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Accumulates SVG elements in drawing order.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Number of shapes drawn since the last `clear`.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg_string(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), RingcodeError> {
        writer.write_all(self.to_svg_string().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RingcodeError> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(std::io::BufWriter::new(file))
    }
}

fn fill_attrs(color: Color) -> String {
    let mut attrs = format!("fill=\"#{:02x}{:02x}{:02x}\"", color.r, color.g, color.b);
    if color.a != 255 {
        let _ = write!(attrs, " fill-opacity=\"{:.3}\"", f64::from(color.a) / 255.0);
    }
    attrs
}

fn fmt_point(p: Point) -> String {
    format!("{:.3} {:.3}", p.x, p.y)
}

/// Path data for an annulus. SVG cannot draw a closed 360° arc in one
/// segment, so each circle is drawn as two half arcs.
fn annulus_path(center: Point, inner_radius: f64, outer_radius: f64) -> String {
    let mut d = String::new();
    for (radius, sweep_flag) in [(outer_radius, 1), (inner_radius, 0)] {
        let a = center.polar_offset(radius, 0.0);
        let b = center.polar_offset(radius, PI);
        let _ = write!(
            d,
            "M {a} A {r:.3} {r:.3} 0 0 {s} {b} A {r:.3} {r:.3} 0 0 {s} {a} Z ",
            a = fmt_point(a),
            b = fmt_point(b),
            r = radius,
            s = sweep_flag
        );
    }
    d.trim_end().to_string()
}

fn wedge_path(center: Point, inner_radius: f64, outer_radius: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {os} A {ro:.3} {ro:.3} 0 {large} 1 {oe} L {ie} A {ri:.3} {ri:.3} 0 {large} 0 {is} Z",
        os = fmt_point(center.polar_offset(outer_radius, start)),
        oe = fmt_point(center.polar_offset(outer_radius, end)),
        ie = fmt_point(center.polar_offset(inner_radius, end)),
        is = fmt_point(center.polar_offset(inner_radius, start)),
        ro = outer_radius,
        ri = inner_radius,
        large = large_arc,
    )
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw_background_disc(&mut self, center: Point, radius: f64, color: Color) {
        self.elements.push(format!(
            "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" {}/>",
            center.x,
            center.y,
            radius,
            fill_attrs(color)
        ));
    }

    fn draw_wedge(
        &mut self,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Color,
    ) {
        let d = if end_angle - start_angle >= TAU - FULL_TURN_EPSILON {
            annulus_path(center, inner_radius, outer_radius)
        } else {
            wedge_path(center, inner_radius, outer_radius, start_angle, end_angle)
        };
        self.elements.push(format!(
            "<path d=\"{}\" fill-rule=\"evenodd\" {}/>",
            d,
            fill_attrs(color)
        ));
    }
}
