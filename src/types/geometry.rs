//! Plain geometry values exchanged between the arc compressor and renderers.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface, in surface units (pixels for the SVG surface).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` along `angle` (radians, clockwise on a
    /// y-down surface, zero pointing along +x).
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// One contiguous run of "on" digits, expressed as a start/end angle pair in radians.
///
/// `end` is always greater than `start` and never more than `2π` past zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
}

impl ArcSpan {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Angular extent of the arc.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

impl From<(f64, f64)> for ArcSpan {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}
