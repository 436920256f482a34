//! # Dodecahedron Solid
//!
//! Canonical regular dodecahedron: 20 vertices from the golden-ratio
//! construction, 12 pentagon faces, scaled onto the unit sphere.

use glam::DVec3;

use crate::polyhedron::{Polyhedron, Triangulation};

/// Pentagon faces as vertex index loops, counter-clockwise from outside.
///
/// Indices refer to the vertex table built in [`create_dodecahedron`]:
/// 0-7 are the cube corners, 8-11 the rectangle in the x = 0 plane,
/// 12-15 the rectangle in the z = 0 plane, 16-19 the rectangle in the
/// y = 0 plane.
const FACES: [[u32; 5]; 12] = [
    [0, 8, 10, 2, 16],
    [0, 16, 17, 1, 12],
    [0, 12, 14, 4, 8],
    [8, 4, 18, 6, 10],
    [10, 6, 15, 13, 2],
    [2, 13, 3, 17, 16],
    [1, 9, 5, 14, 12],
    [4, 14, 5, 19, 18],
    [6, 18, 19, 7, 15],
    [3, 13, 15, 7, 11],
    [1, 17, 3, 11, 9],
    [5, 9, 11, 7, 19],
];

/// Creates the canonical dodecahedron.
///
/// Vertices come from the closed-form golden-ratio construction: the eight
/// cube corners (±1, ±1, ±1) plus three mutually orthogonal golden
/// rectangles. The result is scaled uniformly by the largest vertex norm,
/// putting every vertex on the unit sphere.
///
/// Faces triangulate by centroid fan, five triangles per pentagon.
///
/// # Returns
///
/// A polyhedron with 20 vertices and 12 pentagon faces, centered at the
/// origin.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::create_dodecahedron;
///
/// let solid = create_dodecahedron();
/// assert_eq!(solid.vertex_count(), 20);
/// assert_eq!(solid.face_count(), 12);
/// ```
pub fn create_dodecahedron() -> Polyhedron {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let inv = 1.0 / phi;

    let mut vertices = vec![
        // Cube corners (indices 0-7)
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, 1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(-1.0, -1.0, -1.0),
        // Golden rectangle in x = 0 (indices 8-11)
        DVec3::new(0.0, inv, phi),
        DVec3::new(0.0, inv, -phi),
        DVec3::new(0.0, -inv, phi),
        DVec3::new(0.0, -inv, -phi),
        // Golden rectangle in z = 0 (indices 12-15)
        DVec3::new(inv, phi, 0.0),
        DVec3::new(inv, -phi, 0.0),
        DVec3::new(-inv, phi, 0.0),
        DVec3::new(-inv, -phi, 0.0),
        // Golden rectangle in y = 0 (indices 16-19)
        DVec3::new(phi, 0.0, inv),
        DVec3::new(phi, 0.0, -inv),
        DVec3::new(-phi, 0.0, inv),
        DVec3::new(-phi, 0.0, -inv),
    ];

    // Scale onto the unit sphere
    let scale = vertices.iter().map(|v| v.length()).fold(0.0, f64::max);
    for v in &mut vertices {
        *v /= scale;
    }

    let faces = FACES.iter().map(|face| face.to_vec()).collect();
    Polyhedron::from_parts(vertices, faces, Triangulation::CentroidFan)
}
