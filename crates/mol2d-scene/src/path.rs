//! Vector paths
//!
//! A path is a flat list of drawing elements in the PostScript mold:
//! move/line/curve/close. Backends walk the element list; tests and bounds
//! computation only need the control points, which is deliberate - bounds
//! over control points always contain the curve itself.

use serde::{Deserialize, Serialize};

use mol2d_geom::{Point2, Rect, Transform2};

/// Circle-to-cubic approximation constant, 4*(sqrt(2)-1)/3
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// One element of a vector path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    /// Start a new subpath at a point
    MoveTo(Point2),
    /// Straight segment to a point
    LineTo(Point2),
    /// Quadratic curve (control, end)
    QuadTo(Point2, Point2),
    /// Cubic curve (control1, control2, end)
    CubicTo(Point2, Point2, Point2),
    /// Close the current subpath
    Close,
}

/// A vector path built from [`PathElement`]s
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Path::default()
    }

    /// Start a new subpath
    pub fn move_to(&mut self, p: Point2) -> &mut Self {
        self.elements.push(PathElement::MoveTo(p));
        self
    }

    /// Add a straight segment
    pub fn line_to(&mut self, p: Point2) -> &mut Self {
        self.elements.push(PathElement::LineTo(p));
        self
    }

    /// Add a quadratic curve
    pub fn quad_to(&mut self, control: Point2, end: Point2) -> &mut Self {
        self.elements.push(PathElement::QuadTo(control, end));
        self
    }

    /// Add a cubic curve
    pub fn cubic_to(&mut self, c1: Point2, c2: Point2, end: Point2) -> &mut Self {
        self.elements.push(PathElement::CubicTo(c1, c2, end));
        self
    }

    /// Close the current subpath
    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::Close);
        self
    }

    /// A single straight segment
    pub fn line(from: Point2, to: Point2) -> Self {
        let mut path = Path::new();
        path.move_to(from).line_to(to);
        path
    }

    /// A closed polygon through the given points
    pub fn polygon(points: &[Point2]) -> Self {
        let mut path = Path::new();
        let mut iter = points.iter();
        if let Some(&first) = iter.next() {
            path.move_to(first);
            for &p in iter {
                path.line_to(p);
            }
            path.close();
        }
        path
    }

    /// A closed axis-aligned rectangle
    pub fn rect(rect: Rect) -> Self {
        Path::polygon(&[
            Point2::new(rect.min_x, rect.min_y),
            Point2::new(rect.max_x, rect.min_y),
            Point2::new(rect.max_x, rect.max_y),
            Point2::new(rect.min_x, rect.max_y),
        ])
    }

    /// An axis-aligned ellipse inscribed in `rect`, as four cubic curves
    pub fn ellipse(rect: Rect) -> Self {
        let c = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let mut path = Path::new();
        path.move_to(Point2::new(c.x + rx, c.y))
            .cubic_to(
                Point2::new(c.x + rx, c.y + ky),
                Point2::new(c.x + kx, c.y + ry),
                Point2::new(c.x, c.y + ry),
            )
            .cubic_to(
                Point2::new(c.x - kx, c.y + ry),
                Point2::new(c.x - rx, c.y + ky),
                Point2::new(c.x - rx, c.y),
            )
            .cubic_to(
                Point2::new(c.x - rx, c.y - ky),
                Point2::new(c.x - kx, c.y - ry),
                Point2::new(c.x, c.y - ry),
            )
            .cubic_to(
                Point2::new(c.x + kx, c.y - ry),
                Point2::new(c.x + rx, c.y - ky),
                Point2::new(c.x + rx, c.y),
            )
            .close();
        path
    }

    /// Append another path's elements (as its own subpaths)
    pub fn append(&mut self, other: &Path) -> &mut Self {
        self.elements.extend_from_slice(&other.elements);
        self
    }

    /// The path elements in drawing order
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Whether the path has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of subpaths (MoveTo count)
    pub fn subpath_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, PathElement::MoveTo(_)))
            .count()
    }

    /// Iterate over all control points
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.elements.iter().flat_map(|e| {
            let points = match *e {
                PathElement::MoveTo(p) | PathElement::LineTo(p) => vec![p],
                PathElement::QuadTo(c, p) => vec![c, p],
                PathElement::CubicTo(c1, c2, p) => vec![c1, c2, p],
                PathElement::Close => Vec::new(),
            };
            points.into_iter()
        })
    }

    /// Bounding box over the control points
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.points())
    }

    /// The path with every control point transformed
    pub fn transformed(&self, transform: &Transform2) -> Path {
        let elements = self
            .elements
            .iter()
            .map(|e| match e {
                PathElement::MoveTo(p) => PathElement::MoveTo(transform.apply(*p)),
                PathElement::LineTo(p) => PathElement::LineTo(transform.apply(*p)),
                PathElement::QuadTo(c, p) => {
                    PathElement::QuadTo(transform.apply(*c), transform.apply(*p))
                }
                PathElement::CubicTo(c1, c2, p) => PathElement::CubicTo(
                    transform.apply(*c1),
                    transform.apply(*c2),
                    transform.apply(*p),
                ),
                PathElement::Close => PathElement::Close,
            })
            .collect();
        Path { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_bounds() {
        let path = Path::line(Point2::new(0.0, 1.0), Point2::new(2.0, -1.0));
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 2.0);
        assert_eq!(path.subpath_count(), 1);
    }

    #[test]
    fn test_ellipse_shape() {
        let path = Path::ellipse(Rect::new(-2.0, -1.0, 2.0, 1.0));
        assert_eq!(path.subpath_count(), 1);
        let bounds = path.bounds().unwrap();
        // control-point bounds of the kappa approximation equal the rect
        assert!((bounds.width() - 4.0).abs() < 1e-9);
        assert!((bounds.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_subpath_annulus() {
        let mut path = Path::ellipse(Rect::new(-1.0, -1.0, 1.0, 1.0));
        path.append(&Path::ellipse(Rect::new(-0.5, -0.5, 0.5, 0.5)));
        assert_eq!(path.subpath_count(), 2);
    }

    #[test]
    fn test_transformed() {
        let path = Path::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let scaled = path.transformed(&Transform2::scale(2.0, 2.0));
        assert_eq!(scaled.bounds().unwrap().width(), 2.0);
    }

    #[test]
    fn test_empty_polygon() {
        assert!(Path::polygon(&[]).is_empty());
        assert!(Path::polygon(&[]).bounds().is_none());
    }
}
