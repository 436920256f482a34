//! # Neighbor Attachment
//!
//! Places a twisted mirror copy of a solid against one of its faces, the
//! way two dodecahedra meet wall to wall.

use config::constants::EPSILON;
use glam::DVec3;

use crate::error::MeshError;
use crate::polyhedron::Polyhedron;
use crate::transform::rotation_matrix;

/// Returns the plane of one face of an origin-centered solid as
/// `(face centroid, outward unit normal)`.
///
/// The normal is taken as the direction of the face centroid. That
/// shortcut only holds for solids centered at the origin, so the centering
/// and the agreement with the winding normal are checked here rather than
/// assumed.
///
/// # Errors
///
/// Returns a domain error if the face index is out of range, the solid is
/// not centered at the origin, the face centroid sits at the origin, or
/// the centroid direction disagrees with the face winding normal.
pub fn face_plane(solid: &Polyhedron, face_index: u32) -> Result<(DVec3, DVec3), MeshError> {
    let centroid = solid.face_centroid(face_index)?;

    let body_center = solid.centroid();
    if body_center.length() > EPSILON {
        return Err(MeshError::domain(format!(
            "solid must be centered at the origin, body center is at {body_center}"
        )));
    }
    if centroid.length() < EPSILON {
        return Err(MeshError::domain(format!(
            "face {face_index} centroid sits at the origin, no outward direction"
        )));
    }

    let normal = centroid / centroid.length();
    let winding_normal = solid.face_normal(face_index)?;
    if normal.dot(winding_normal) < 1.0 - EPSILON {
        return Err(MeshError::domain(format!(
            "face {face_index} centroid direction does not match the face normal"
        )));
    }

    Ok((centroid, normal))
}

/// Attaches a mirror copy of `base` against the face at `face_index`.
///
/// The copy is rotated by `twist` radians about the face normal through
/// the origin, then translated along the normal by twice the origin-to-
/// face-plane distance. The face becomes a shared wall: whatever the
/// twist, the copy's opposite wall lands centroid-exact on the base face.
/// At the reference twist of a tenth turn the two pentagon walls of a
/// dodecahedron pair coincide vertex for vertex.
///
/// # Arguments
///
/// * `base` - Origin-centered solid to copy
/// * `face_index` - Which face receives the neighbor
/// * `twist` - Rotation about the face normal, in radians
///
/// # Errors
///
/// Returns a domain error if the face index is out of range, the base is
/// not centered at the origin, or the face geometry is degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TWIST_ANGLE;
/// use tessella_mesh::{attach_neighbor, create_dodecahedron};
///
/// let base = create_dodecahedron();
/// let neighbor = attach_neighbor(&base, 0, DEFAULT_TWIST_ANGLE).unwrap();
/// assert_eq!(neighbor.vertex_count(), 20);
/// assert!(neighbor.validate());
/// ```
pub fn attach_neighbor(
    base: &Polyhedron,
    face_index: u32,
    twist: f64,
) -> Result<Polyhedron, MeshError> {
    let (centroid, normal) = face_plane(base, face_index)?;

    // Distance from the origin to the face plane
    let distance = centroid.dot(normal);
    let rotation = rotation_matrix(normal, twist)?;

    Ok(base.rotated(&rotation).translated(2.0 * distance * normal))
}
