//! # Triangle Primitive
//!
//! The render-ready triangle soup element. Once a solid is triangulated
//! its topology is gone; each triangle stands alone with three corner
//! positions in space.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A single triangle in world space.
///
/// Corners are ordered so that `(b - a) x (c - a)` points out of the solid
/// the triangle came from. All coordinates are f64; conversion to f32
/// happens only at the renderer boundary.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::Triangle;
/// use glam::DVec3;
///
/// let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(tri.normal(), DVec3::Z);
/// assert_eq!(tri.area(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First corner
    pub a: DVec3,
    /// Second corner
    pub b: DVec3,
    /// Third corner
    pub c: DVec3,
}

impl Triangle {
    /// Creates a triangle from three corners.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { a, b, c }
    }

    /// Returns the unit normal of the triangle plane.
    ///
    /// Follows the corner winding: counter-clockwise corners seen from the
    /// normal side. Returns the zero vector for a degenerate triangle.
    pub fn normal(&self) -> DVec3 {
        (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
    }

    /// Returns the triangle area.
    pub fn area(&self) -> f64 {
        0.5 * (self.b - self.a).cross(self.c - self.a).length()
    }

    /// Returns the centroid of the three corners.
    pub fn centroid(&self) -> DVec3 {
        (self.a + self.b + self.c) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_follows_winding() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert_eq!(tri.normal(), DVec3::Z);

        let flipped = Triangle::new(DVec3::ZERO, DVec3::Y, DVec3::X);
        assert_eq!(flipped.normal(), DVec3::NEG_Z);
    }

    #[test]
    fn test_triangle_area() {
        let tri = Triangle::new(
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 3.0, 0.0),
        );
        assert_eq!(tri.area(), 3.0);
    }

    #[test]
    fn test_triangle_centroid() {
        let tri = Triangle::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(0.0, 3.0, 0.0),
        );
        assert_eq!(tri.centroid(), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_degenerate_triangle_zero_normal() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(tri.normal(), DVec3::ZERO);
        assert_eq!(tri.area(), 0.0);
    }
}
