//! Line segments and parallel-offset construction
//!
//! Multiple bonds (double/triple) are drawn as parallel lines offset
//! perpendicular to the bond axis; the offset construction lives here so
//! the bond renderer only deals in segments.

use crate::point::{Point2, Vec2};

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point2,
    pub to: Point2,
}

impl Line {
    /// Create a new segment
    pub const fn new(from: Point2, to: Point2) -> Self {
        Line { from, to }
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Segment midpoint
    pub fn midpoint(&self) -> Point2 {
        self.from.midpoint(self.to)
    }

    /// Direction from `from` to `to`, or `None` for a degenerate segment
    pub fn direction(&self) -> Option<Vec2> {
        (self.to - self.from).normalized()
    }

    /// Unit vector perpendicular to the segment, or `None` when degenerate
    pub fn unit_perpendicular(&self) -> Option<Vec2> {
        self.direction().map(|d| d.perp())
    }

    /// The two segments parallel to this one at perpendicular distance
    /// `offset` on either side
    ///
    /// A degenerate (zero length) segment has no perpendicular; both
    /// returned segments collapse onto the original in that case.
    pub fn parallels(&self, offset: f64) -> (Line, Line) {
        match self.unit_perpendicular() {
            Some(perp) => {
                let shift = perp * offset;
                (
                    Line::new(self.from + shift, self.to + shift),
                    Line::new(self.from - shift, self.to - shift),
                )
            }
            None => (*self, *self),
        }
    }

    /// Parameter of the point on the (infinite) line closest to `p`
    ///
    /// 0 maps to `from`, 1 maps to `to`; values outside [0, 1] lie beyond
    /// the endpoints. Degenerate segments return 0.
    pub fn closest_parameter(&self, p: Point2) -> f64 {
        let axis = self.to - self.from;
        let len_sq = axis.dot(axis);
        if len_sq < 1e-18 {
            return 0.0;
        }
        (p - self.from).dot(axis) / len_sq
    }
}
