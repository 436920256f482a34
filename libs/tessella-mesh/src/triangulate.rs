//! # Triangulator
//!
//! Turns a polyhedron's faces into a render-ready triangle soup.

use crate::error::MeshError;
use crate::polyhedron::{Polyhedron, Triangulation};
use crate::triangle::Triangle;

/// Triangulates a polyhedron according to its stored strategy.
///
/// Centroid-fan faces emit one triangle per face edge, running from the
/// edge to the face centroid and inheriting the face winding. Explicit
/// tables are emitted as-is; their indices were validated at construction.
///
/// Output order is face by face, in face order, so repeated calls on the
/// same solid agree.
///
/// # Errors
///
/// Returns a domain error if a centroid-fan face has no measurable area.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::{create_dodecahedron, triangulate};
///
/// let soup = triangulate(&create_dodecahedron()).unwrap();
/// assert_eq!(soup.len(), 60); // five triangles per pentagon
/// ```
pub fn triangulate(polyhedron: &Polyhedron) -> Result<Vec<Triangle>, MeshError> {
    match polyhedron.triangulation() {
        Triangulation::CentroidFan => centroid_fan(polyhedron),
        Triangulation::Explicit(table) => Ok(table
            .iter()
            .map(|&[a, b, c]| {
                Triangle::new(
                    polyhedron.vertex(a),
                    polyhedron.vertex(b),
                    polyhedron.vertex(c),
                )
            })
            .collect()),
    }
}

fn centroid_fan(polyhedron: &Polyhedron) -> Result<Vec<Triangle>, MeshError> {
    let mut soup = Vec::with_capacity(polyhedron.faces().iter().map(Vec::len).sum());

    for face_index in 0..polyhedron.face_count() as u32 {
        // face_normal doubles as the zero-area check
        polyhedron.face_normal(face_index)?;
        let centroid = polyhedron.face_centroid(face_index)?;

        let face = &polyhedron.faces()[face_index as usize];
        for (i, &start) in face.iter().enumerate() {
            let end = face[(i + 1) % face.len()];
            soup.push(Triangle::new(
                polyhedron.vertex(start),
                polyhedron.vertex(end),
                centroid,
            ));
        }
    }

    Ok(soup)
}
