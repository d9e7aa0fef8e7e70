//! Affine transforms between molecule space and view space

use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// A 2D affine transform
///
/// Stored as the six coefficients of the matrix
///
/// ```text
/// | a  c  e |
/// | b  d  f |
/// ```
///
/// so that `x' = a*x + c*y + e` and `y' = b*x + d*y + f`. The depiction
/// pipeline only ever builds uniform scale + flip + translate transforms,
/// but inversion is supported for the general case so view-space picking
/// can map back to molecule space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform2 {
    /// The identity transform
    pub const IDENTITY: Transform2 = Transform2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Pure scale transform
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Transform2 {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Pure translation transform
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Transform2 {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: dx,
            f: dy,
        }
    }

    /// Apply the transform to a point
    pub fn apply(&self, p: Point2) -> Point2 {
        Point2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Compose transforms: the result applies `self` after `other`
    pub fn then(&self, other: Transform2) -> Transform2 {
        // self ∘ other: apply other first
        Transform2 {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` when singular
    pub fn inverse(&self) -> Option<Transform2> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.d * inv_det;
        let b = -self.b * inv_det;
        let c = -self.c * inv_det;
        let d = self.a * inv_det;
        Some(Transform2 {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }

    /// The uniform scale factor of the x axis
    pub fn scale_x(&self) -> f64 {
        self.a
    }

    /// The uniform scale factor of the y axis
    pub fn scale_y(&self) -> f64 {
        self.d
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Transform2::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Point2::new(3.0, -2.0);
        assert_eq!(Transform2::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_scale_flip_translate() {
        // the shape of transform the fit pipeline produces
        let t = Transform2::translation(10.0, 20.0).then(Transform2::scale(2.0, -2.0));
        let p = t.apply(Point2::new(1.0, 1.0));
        assert!((p.x - 12.0).abs() < 1e-12);
        assert!((p.y - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform2 {
            a: 2.0,
            b: 0.0,
            c: 0.0,
            d: -2.0,
            e: 5.0,
            f: 7.0,
        };
        let inv = t.inverse().unwrap();
        let p = Point2::new(1.25, -3.5);
        let back = inv.apply(t.apply(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Transform2::scale(0.0, 1.0).inverse().is_none());
    }
}
