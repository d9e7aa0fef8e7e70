//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// An axis-aligned rectangle in molecule space
///
/// Used both for label boxes and for the aggregate scene bounding box.
/// A rectangle with zero width or height (a single atom, a vertical bond)
/// is valid; consumers that scale by the extents must handle that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Create a rectangle from its extremes (normalizing the order)
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Rect {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// A zero-size rectangle at a single point
    pub fn at(p: Point2) -> Self {
        Rect {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Create from an origin and a size
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::new(x, y, x + width, y + height)
    }

    /// Tight bounds of a set of points, `None` when empty
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Rect::at(first);
        for p in iter {
            rect = rect.include(p);
        }
        Some(rect)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Smallest rectangle containing both `self` and `p`
    pub fn include(self, p: Point2) -> Rect {
        Rect {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Whether `p` lies inside the rectangle (inclusive, with tolerance)
    pub fn contains(&self, p: Point2) -> bool {
        const TOL: f64 = 1e-9;
        p.x >= self.min_x - TOL
            && p.x <= self.max_x + TOL
            && p.y >= self.min_y - TOL
            && p.y <= self.max_y + TOL
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expand(self, margin: f64) -> Rect {
        Rect {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
