//! # Rigid Transforms
//!
//! Axis-angle rotation matrices built by Rodrigues' formula, plus the
//! rigid placement (rotate, then translate) used to position solid copies.

use config::constants::EPSILON;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Builds the rotation matrix for an axis-angle rotation.
///
/// The axis is normalized first; the rotation is counter-clockwise when
/// viewed from the axis tip (right-hand rule). The matrix is assembled
/// from Rodrigues' formula
///
/// ```text
/// R = cos(theta) * I + (1 - cos(theta)) * a * a^T + sin(theta) * [a]x
/// ```
///
/// where `[a]x` is the cross-product matrix of the unit axis `a`.
///
/// # Arguments
///
/// * `axis` - Rotation axis, any non-zero length
/// * `angle` - Rotation angle in radians
///
/// # Errors
///
/// Returns a domain error if the axis has zero length.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::rotation_matrix;
/// use glam::DVec3;
///
/// let quarter_turn = rotation_matrix(DVec3::Z, std::f64::consts::FRAC_PI_2).unwrap();
/// let turned = quarter_turn * DVec3::X;
/// assert!((turned - DVec3::Y).length() < 1e-12);
/// ```
pub fn rotation_matrix(axis: DVec3, angle: f64) -> Result<DMat3, MeshError> {
    let length = axis.length();
    if length < EPSILON {
        return Err(MeshError::domain("rotation axis has zero length"));
    }
    let unit = axis / length;
    let (x, y, z) = (unit.x, unit.y, unit.z);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    Ok(DMat3::from_cols(
        DVec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
        DVec3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
        DVec3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
    ))
}

/// Rotates a set of points about an axis through the origin.
///
/// # Errors
///
/// Returns a domain error if the axis has zero length.
pub fn rotate(points: &[DVec3], axis: DVec3, angle: f64) -> Result<Vec<DVec3>, MeshError> {
    let rotation = rotation_matrix(axis, angle)?;
    Ok(points.iter().map(|&p| rotation * p).collect())
}

/// Translates a set of points by an offset.
pub fn translate(points: &[DVec3], offset: DVec3) -> Vec<DVec3> {
    points.iter().map(|&p| p + offset).collect()
}

/// A rigid placement: rotation about the origin followed by a translation.
///
/// Points map through `R * p + t`. Inputs are never mutated; applying a
/// placement produces new positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Rotation applied first
    pub rotation: DMat3,
    /// Translation applied after the rotation
    pub translation: DVec3,
}

impl Placement {
    /// The placement that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Creates a placement from an axis-angle rotation and a translation.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the axis has zero length.
    pub fn from_axis_angle(
        axis: DVec3,
        angle: f64,
        translation: DVec3,
    ) -> Result<Self, MeshError> {
        Ok(Self {
            rotation: rotation_matrix(axis, angle)?,
            translation,
        })
    }

    /// Creates a pure translation placement.
    pub fn from_translation(offset: DVec3) -> Self {
        Self {
            rotation: DMat3::IDENTITY,
            translation: offset,
        }
    }

    /// Maps a single point through the placement.
    #[inline]
    pub fn apply_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.translation
    }

    /// Maps a set of points through the placement.
    pub fn apply(&self, points: &[DVec3]) -> Vec<DVec3> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_angle_is_exact_identity() {
        // sin(0) and cos(0) are exact, so no tolerance is needed
        let rotation = rotation_matrix(DVec3::new(1.0, 2.0, 3.0), 0.0).unwrap();
        assert_eq!(rotation, DMat3::IDENTITY);
    }

    #[test]
    fn test_zero_axis_rejected() {
        let result = rotation_matrix(DVec3::ZERO, 1.0);
        assert!(matches!(result, Err(MeshError::Domain { .. })));
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let rotation = rotation_matrix(DVec3::Z, FRAC_PI_2).unwrap();
        assert!((rotation * DVec3::X - DVec3::Y).length() < 1e-12);
        assert!((rotation * DVec3::Y + DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_axis_stays_fixed() {
        let axis = DVec3::new(1.0, -2.0, 0.5);
        let rotation = rotation_matrix(axis, 1.234).unwrap();
        assert!((rotation * axis - axis).length() < 1e-12);
    }

    #[test]
    fn test_axis_is_normalized() {
        // Scaling the axis must not change the rotation
        let axis = DVec3::new(0.3, 0.4, -0.2);
        let a = rotation_matrix(axis, 0.7).unwrap();
        let b = rotation_matrix(axis * 250.0, 0.7).unwrap();
        assert!(a.abs_diff_eq(b, 1e-12));
    }

    #[test]
    fn test_matches_library_axis_angle() {
        let axis = DVec3::new(1.0, 1.0, -1.0);
        let angle = 2.0 * PI / 7.0;
        let ours = rotation_matrix(axis, angle).unwrap();
        let reference = DMat3::from_axis_angle(axis.normalize(), angle);
        assert!(ours.abs_diff_eq(reference, 1e-12));
    }

    #[test]
    fn test_rotations_compose() {
        let axis = DVec3::new(0.2, 0.9, 0.4);
        let first = rotation_matrix(axis, 0.8).unwrap();
        let second = rotation_matrix(axis, 0.5).unwrap();
        let combined = rotation_matrix(axis, 1.3).unwrap();
        assert!((second * first).abs_diff_eq(combined, 1e-12));
    }

    #[test]
    fn test_rotation_preserves_distances_and_norms() {
        let points = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-4.0, 0.5, 2.0),
            DVec3::new(0.0, -1.0, 7.0),
        ];
        let rotated = rotate(&points, DVec3::new(3.0, -1.0, 2.0), 2.1).unwrap();
        for (before, after) in points.iter().zip(&rotated) {
            assert!((before.length() - after.length()).abs() < 1e-12);
        }
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let before = points[i].distance(points[j]);
                let after = rotated[i].distance(rotated[j]);
                assert!((before - after).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_translate_points() {
        let points = [DVec3::ZERO, DVec3::X];
        let moved = translate(&points, DVec3::new(0.0, 0.0, 2.5));
        assert_eq!(moved[0], DVec3::new(0.0, 0.0, 2.5));
        assert_eq!(moved[1], DVec3::new(1.0, 0.0, 2.5));
    }

    #[test]
    fn test_placement_rotates_then_translates() {
        let placement =
            Placement::from_axis_angle(DVec3::Z, FRAC_PI_2, DVec3::new(0.0, 0.0, 5.0))
                .unwrap();
        let mapped = placement.apply_point(DVec3::X);
        assert!((mapped - DVec3::new(0.0, 1.0, 5.0)).length() < 1e-12);
    }

    #[test]
    fn test_placement_from_translation() {
        let placement = Placement::from_translation(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(placement.rotation, DMat3::IDENTITY);
        assert_eq!(placement.apply_point(DVec3::ZERO), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_placement_identity() {
        let point = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(Placement::IDENTITY.apply_point(point), point);
    }

    #[test]
    fn test_placement_apply_batch() {
        let placement = Placement::from_translation(DVec3::X);
        let mapped = placement.apply(&[DVec3::ZERO, DVec3::Y]);
        assert_eq!(mapped, vec![DVec3::X, DVec3::new(1.0, 1.0, 0.0)]);
    }
}
