//! Styled shapes

use serde::{Deserialize, Serialize};

use mol2d_color::Color;
use mol2d_geom::{Rect, Transform2};

use crate::path::Path;

/// How a path is painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeStyle {
    /// Fill the path interior (even-odd rule)
    Fill(Color),
    /// Stroke the path outline
    Stroke {
        color: Color,
        /// Stroke width, in the same space as the path coordinates
        width: f64,
    },
}

impl ShapeStyle {
    /// The paint color regardless of fill/stroke
    pub fn color(&self) -> Color {
        match self {
            ShapeStyle::Fill(color) => *color,
            ShapeStyle::Stroke { color, .. } => *color,
        }
    }

    /// Check if this is a fill style
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, ShapeStyle::Fill(_))
    }
}

/// A path with a paint style, the unit a backend draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedShape {
    pub path: Path,
    pub style: ShapeStyle,
}

impl RenderedShape {
    /// A filled shape
    pub fn fill(path: Path, color: Color) -> Self {
        RenderedShape {
            path,
            style: ShapeStyle::Fill(color),
        }
    }

    /// A stroked shape
    pub fn stroke(path: Path, color: Color, width: f64) -> Self {
        RenderedShape {
            path,
            style: ShapeStyle::Stroke { color, width },
        }
    }

    /// Bounding box over the path control points
    pub fn bounds(&self) -> Option<Rect> {
        self.path.bounds()
    }

    /// The shape with its path transformed; stroke widths are not scaled
    pub fn transformed(&self, transform: &Transform2) -> RenderedShape {
        RenderedShape {
            path: self.path.transformed(transform),
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mol2d_geom::Point2;

    #[test]
    fn test_styles() {
        let path = Path::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let fill = RenderedShape::fill(path.clone(), Color::RED);
        assert!(fill.style.is_fill());
        assert_eq!(fill.style.color(), Color::RED);

        let stroke = RenderedShape::stroke(path, Color::BLACK, 0.05);
        assert!(!stroke.style.is_fill());
        assert_eq!(stroke.bounds().unwrap().width(), 1.0);
    }
}
