//! # Truncated Octahedron Solid
//!
//! The space-filling lattice cell: 24 vertices, six square and eight
//! hexagon faces, and a fixed triangle table. Deliberately left at its
//! canonical size; the 4-unit lattice period of the tiling depends on
//! these coordinates.

use glam::DVec3;

use crate::polyhedron::{Polyhedron, Triangulation};

/// Vertex table: all permutations of (0, ±1, ±2).
const VERTICES: [DVec3; 24] = [
    DVec3::new(2.0, 0.0, 1.0),
    DVec3::new(2.0, 0.0, -1.0),
    DVec3::new(-2.0, 0.0, 1.0),
    DVec3::new(-2.0, 0.0, -1.0),
    DVec3::new(1.0, 2.0, 0.0),
    DVec3::new(-1.0, 2.0, 0.0),
    DVec3::new(1.0, -2.0, 0.0),
    DVec3::new(-1.0, -2.0, 0.0),
    DVec3::new(0.0, 1.0, 2.0),
    DVec3::new(0.0, -1.0, 2.0),
    DVec3::new(0.0, 1.0, -2.0),
    DVec3::new(0.0, -1.0, -2.0),
    DVec3::new(1.0, 0.0, 2.0),
    DVec3::new(-1.0, 0.0, 2.0),
    DVec3::new(1.0, 0.0, -2.0),
    DVec3::new(-1.0, 0.0, -2.0),
    DVec3::new(0.0, 2.0, 1.0),
    DVec3::new(0.0, 2.0, -1.0),
    DVec3::new(0.0, -2.0, 1.0),
    DVec3::new(0.0, -2.0, -1.0),
    DVec3::new(2.0, 1.0, 0.0),
    DVec3::new(2.0, -1.0, 0.0),
    DVec3::new(-2.0, 1.0, 0.0),
    DVec3::new(-2.0, -1.0, 0.0),
];

/// Square faces, one per axis direction, counter-clockwise from outside.
const SQUARES: [[u32; 4]; 6] = [
    [0, 21, 1, 20],   // x = +2
    [2, 22, 3, 23],   // x = -2
    [4, 17, 5, 16],   // y = +2
    [6, 18, 7, 19],   // y = -2
    [8, 13, 9, 12],   // z = +2
    [10, 14, 11, 15], // z = -2
];

/// Hexagon faces, one per octant, counter-clockwise from outside.
const HEXAGONS: [[u32; 6]; 8] = [
    [0, 20, 4, 16, 8, 12],  // +x +y +z
    [1, 14, 10, 17, 4, 20], // +x +y -z
    [0, 12, 9, 18, 6, 21],  // +x -y +z
    [1, 21, 6, 19, 11, 14], // +x -y -z
    [2, 13, 8, 16, 5, 22],  // -x +y +z
    [3, 22, 5, 17, 10, 15], // -x +y -z
    [2, 23, 7, 18, 9, 13],  // -x -y +z
    [3, 15, 11, 19, 7, 23], // -x -y -z
];

/// Fixed triangle table: two triangles per square, four per hexagon,
/// each face fanned from its first vertex so the winding carries over.
///
/// Square walls of adjacent lattice cells split along the same diagonal,
/// so they coincide triangle for triangle.
const TRIANGLES: [[u32; 3]; 44] = [
    // Squares
    [0, 21, 1],
    [0, 1, 20],
    [2, 22, 3],
    [2, 3, 23],
    [4, 17, 5],
    [4, 5, 16],
    [6, 18, 7],
    [6, 7, 19],
    [8, 13, 9],
    [8, 9, 12],
    [10, 14, 11],
    [10, 11, 15],
    // Hexagons
    [0, 20, 4],
    [0, 4, 16],
    [0, 16, 8],
    [0, 8, 12],
    [1, 14, 10],
    [1, 10, 17],
    [1, 17, 4],
    [1, 4, 20],
    [0, 12, 9],
    [0, 9, 18],
    [0, 18, 6],
    [0, 6, 21],
    [1, 21, 6],
    [1, 6, 19],
    [1, 19, 11],
    [1, 11, 14],
    [2, 13, 8],
    [2, 8, 16],
    [2, 16, 5],
    [2, 5, 22],
    [3, 22, 5],
    [3, 5, 17],
    [3, 17, 10],
    [3, 10, 15],
    [2, 23, 7],
    [2, 7, 18],
    [2, 18, 9],
    [2, 9, 13],
    [3, 15, 11],
    [3, 11, 19],
    [3, 19, 7],
    [3, 7, 23],
];

/// Creates the canonical truncated octahedron.
///
/// Vertices are the 24 permutations of (0, ±1, ±2); every edge has length
/// √2 and the solid fills space under the body-centered cubic offsets of
/// the lattice module. Faces come with the fixed 44-entry triangle table.
///
/// # Returns
///
/// A polyhedron with 24 vertices, 6 square faces, and 8 hexagon faces,
/// centered at the origin.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::create_truncated_octahedron;
///
/// let solid = create_truncated_octahedron();
/// assert_eq!(solid.vertex_count(), 24);
/// assert_eq!(solid.face_count(), 14);
/// ```
pub fn create_truncated_octahedron() -> Polyhedron {
    let faces = SQUARES
        .iter()
        .map(|face| face.to_vec())
        .chain(HEXAGONS.iter().map(|face| face.to_vec()))
        .collect();
    Polyhedron::from_parts(
        VERTICES.to_vec(),
        faces,
        Triangulation::Explicit(TRIANGLES.to_vec()),
    )
}
