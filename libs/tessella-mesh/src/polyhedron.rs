//! # Polyhedron Data Structure
//!
//! Indexed-face representation of a convex solid: shared vertex positions
//! plus faces listing vertex indices counter-clockwise seen from outside.

use config::constants::EPSILON;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::transform::Placement;

/// How a polyhedron's faces are split into triangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Triangulation {
    /// Fan each face around its centroid, one triangle per face edge.
    ///
    /// Works for any convex face and keeps the centroid as a shared apex.
    CentroidFan,
    /// Emit a fixed, pre-validated triangle index table.
    ///
    /// Used when the table is part of the solid's definition and must be
    /// reproduced exactly (for instance so lattice cell walls coincide
    /// triangle for triangle).
    Explicit(Vec<[u32; 3]>),
}

/// A convex polyhedron with indexed faces.
///
/// All geometry calculations use f64 internally. The structure is
/// read-only after construction; placement operations return new values
/// and leave the receiver untouched, so one canonical solid can be shared
/// across many placements.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::{create_dodecahedron, Polyhedron};
///
/// let solid: Polyhedron = create_dodecahedron();
/// assert_eq!(solid.vertex_count(), 20);
/// assert_eq!(solid.face_count(), 12);
/// assert!(solid.validate());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Faces as vertex index loops, wound counter-clockwise from outside
    faces: Vec<Vec<u32>>,
    /// Triangulation strategy carried with the solid
    triangulation: Triangulation,
}

impl Polyhedron {
    /// Creates a polyhedron that triangulates by centroid fan.
    ///
    /// # Arguments
    ///
    /// * `vertices` - Shared vertex positions
    /// * `faces` - Vertex index loops, counter-clockwise seen from outside
    ///
    /// # Errors
    ///
    /// Returns a domain error if any face has fewer than three vertices or
    /// references a vertex index out of range.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<Vec<u32>>) -> Result<Self, MeshError> {
        Self::check_faces(&vertices, &faces)?;
        Ok(Self {
            vertices,
            faces,
            triangulation: Triangulation::CentroidFan,
        })
    }

    /// Creates a polyhedron carrying a fixed triangle index table.
    ///
    /// The table is validated here once so downstream triangulation can
    /// emit it without re-checking.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a face or a table entry references a
    /// vertex index out of range, or a face has fewer than three vertices.
    pub fn with_explicit_triangles(
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self, MeshError> {
        Self::check_faces(&vertices, &faces)?;
        let vertex_count = vertices.len() as u32;
        for (i, tri) in triangles.iter().enumerate() {
            if tri.iter().any(|&index| index >= vertex_count) {
                return Err(MeshError::domain(format!(
                    "triangle {i} references a vertex index out of range (vertex count {vertex_count})"
                )));
            }
        }
        Ok(Self {
            vertices,
            faces,
            triangulation: Triangulation::Explicit(triangles),
        })
    }

    /// Builds a polyhedron from pre-validated parts without re-checking.
    ///
    /// Reserved for the built-in solid tables, whose invariants are pinned
    /// by their own tests.
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        faces: Vec<Vec<u32>>,
        triangulation: Triangulation,
    ) -> Self {
        Self {
            vertices,
            faces,
            triangulation,
        }
    }

    fn check_faces(vertices: &[DVec3], faces: &[Vec<u32>]) -> Result<(), MeshError> {
        let vertex_count = vertices.len() as u32;
        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::domain(format!(
                    "face {i} has {} vertices, need at least 3",
                    face.len()
                )));
            }
            if face.iter().any(|&index| index >= vertex_count) {
                return Err(MeshError::domain(format!(
                    "face {i} references a vertex index out of range (vertex count {vertex_count})"
                )));
            }
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the triangulation strategy.
    #[inline]
    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the mean of all vertex positions (the body center).
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Returns the centroid of one face.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `face_index` is out of range.
    pub fn face_centroid(&self, face_index: u32) -> Result<DVec3, MeshError> {
        let face = self.face_checked(face_index)?;
        let sum: DVec3 = face.iter().map(|&index| self.vertices[index as usize]).sum();
        Ok(sum / face.len() as f64)
    }

    /// Returns the unit normal of one face, following its winding.
    ///
    /// Uses the polygon area vector (Newell's method), so the result is
    /// meaningful even under floating-point coplanarity noise.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `face_index` is out of range or the face
    /// has no measurable area.
    pub fn face_normal(&self, face_index: u32) -> Result<DVec3, MeshError> {
        let face = self.face_checked(face_index)?;
        let area_vector = self.face_area_vector(face);
        if area_vector.length() < EPSILON {
            return Err(MeshError::domain(format!(
                "face {face_index} is degenerate (zero area)"
            )));
        }
        Ok(area_vector.normalize())
    }

    /// Returns every face outline edge as a pair of endpoint positions.
    ///
    /// One segment per face edge, wrapping from the last vertex back to the
    /// first. Edges shared by two faces are reported once per face, which
    /// is what an outline renderer wants.
    pub fn face_edges(&self) -> Vec<[DVec3; 2]> {
        let mut edges = Vec::with_capacity(self.faces.iter().map(Vec::len).sum());
        for face in &self.faces {
            for (i, &start) in face.iter().enumerate() {
                let end = face[(i + 1) % face.len()];
                edges.push([
                    self.vertices[start as usize],
                    self.vertices[end as usize],
                ]);
            }
        }
        edges
    }

    /// Validates the polyhedron for correctness.
    ///
    /// Checks:
    /// - All face indices are valid and faces have at least 3 vertices
    /// - Every face is planar within tolerance
    /// - Every face winds counter-clockwise seen from outside the body
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if Self::check_faces(&self.vertices, &self.faces).is_err() {
            return false;
        }

        let body_center = self.centroid();

        for face in &self.faces {
            let area_vector = self.face_area_vector(face);
            if area_vector.length() < EPSILON {
                return false;
            }
            let normal = area_vector.normalize();

            let face_center = face
                .iter()
                .map(|&index| self.vertices[index as usize])
                .sum::<DVec3>()
                / face.len() as f64;

            // Planarity: every corner lies in the face plane
            for &index in face {
                let offset = self.vertices[index as usize] - face_center;
                if offset.dot(normal).abs() > EPSILON {
                    return false;
                }
            }

            // Outward winding: the normal leaves the body
            if normal.dot(face_center - body_center) <= 0.0 {
                return false;
            }
        }

        true
    }

    /// Returns a copy translated by a vector.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v + offset).collect(),
            faces: self.faces.clone(),
            triangulation: self.triangulation.clone(),
        }
    }

    /// Returns a copy with every vertex rotated by a matrix.
    pub fn rotated(&self, rotation: &DMat3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| *rotation * v).collect(),
            faces: self.faces.clone(),
            triangulation: self.triangulation.clone(),
        }
    }

    /// Returns a copy with every vertex mapped through a placement.
    pub fn transformed(&self, placement: &Placement) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| placement.apply_point(v)).collect(),
            faces: self.faces.clone(),
            triangulation: self.triangulation.clone(),
        }
    }

    fn face_checked(&self, face_index: u32) -> Result<&[u32], MeshError> {
        self.faces
            .get(face_index as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                MeshError::domain(format!(
                    "face index {face_index} out of range (face count {})",
                    self.faces.len()
                ))
            })
    }

    /// Polygon area vector: half its length is the face area, its direction
    /// the winding normal.
    fn face_area_vector(&self, face: &[u32]) -> DVec3 {
        let mut sum = DVec3::ZERO;
        for (i, &start) in face.iter().enumerate() {
            let end = face[(i + 1) % face.len()];
            sum += self.vertices[start as usize].cross(self.vertices[end as usize]);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Regular tetrahedron on alternating cube corners, centered at the
    /// origin, faces wound counter-clockwise from outside.
    fn tetrahedron() -> Polyhedron {
        let vertices = vec![
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(-1.0, 1.0, -1.0),
            DVec3::new(-1.0, -1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 2, 3],
            vec![0, 3, 1],
            vec![0, 1, 2],
            vec![1, 3, 2],
        ];
        Polyhedron::new(vertices, faces).unwrap()
    }

    #[test]
    fn test_polyhedron_counts() {
        let tetra = tetrahedron();
        assert_eq!(tetra.vertex_count(), 4);
        assert_eq!(tetra.face_count(), 4);
        assert_eq!(tetra.triangulation(), &Triangulation::CentroidFan);
    }

    #[test]
    fn test_polyhedron_rejects_short_face() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let result = Polyhedron::new(vertices, vec![vec![0, 1]]);
        assert!(matches!(result, Err(MeshError::Domain { .. })));
    }

    #[test]
    fn test_polyhedron_rejects_out_of_range_index() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let result = Polyhedron::new(vertices, vec![vec![0, 1, 7]]);
        assert!(matches!(result, Err(MeshError::Domain { .. })));
    }

    #[test]
    fn test_explicit_triangles_rejects_out_of_range_index() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        let faces = vec![vec![0, 1, 2]];
        let result =
            Polyhedron::with_explicit_triangles(vertices, faces, vec![[0, 1, 9]]);
        assert!(matches!(result, Err(MeshError::Domain { .. })));
    }

    #[test]
    fn test_centroid_at_origin() {
        let tetra = tetrahedron();
        assert!(tetra.centroid().length() < EPSILON);
    }

    #[test]
    fn test_face_centroid() {
        let tetra = tetrahedron();
        let centroid = tetra.face_centroid(2).unwrap();
        // Face [0, 1, 2] averages to (1/3, 1/3, -1/3)
        assert!((centroid - DVec3::new(1.0, 1.0, -1.0) / 3.0).length() < EPSILON);
    }

    #[test]
    fn test_face_centroid_out_of_range() {
        let tetra = tetrahedron();
        assert!(matches!(
            tetra.face_centroid(4),
            Err(MeshError::Domain { .. })
        ));
    }

    #[test]
    fn test_face_normal_points_outward() {
        let tetra = tetrahedron();
        for face_index in 0..4 {
            let normal = tetra.face_normal(face_index).unwrap();
            let centroid = tetra.face_centroid(face_index).unwrap();
            assert!(normal.dot(centroid) > 0.0);
            assert!((normal.length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_face_edges_one_per_face_edge() {
        let tetra = tetrahedron();
        let edges = tetra.face_edges();
        assert_eq!(edges.len(), 12);
        // First face is [0, 2, 3]; its first edge runs vertex 0 -> vertex 2
        assert_eq!(edges[0], [tetra.vertex(0), tetra.vertex(2)]);
        // Last edge of the first face wraps back to vertex 0
        assert_eq!(edges[2], [tetra.vertex(3), tetra.vertex(0)]);
    }

    #[test]
    fn test_validate_accepts_tetrahedron() {
        assert!(tetrahedron().validate());
    }

    #[test]
    fn test_validate_rejects_inward_winding() {
        let tetra = tetrahedron();
        let reversed: Vec<Vec<u32>> = tetra
            .faces()
            .iter()
            .map(|face| face.iter().rev().copied().collect())
            .collect();
        let inward = Polyhedron::new(tetra.vertices().to_vec(), reversed).unwrap();
        assert!(!inward.validate());
    }

    #[test]
    fn test_validate_rejects_non_planar_face() {
        let vertices = vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.3),
            DVec3::Y,
        ];
        let bent = Polyhedron::new(vertices, vec![vec![0, 1, 2, 3]]).unwrap();
        assert!(!bent.validate());
    }

    #[test]
    fn test_translated_moves_centroid() {
        let tetra = tetrahedron();
        let offset = DVec3::new(4.0, -2.0, 10.0);
        let moved = tetra.translated(offset);
        assert!((moved.centroid() - offset).length() < EPSILON);
        // Original untouched, topology carried along
        assert!(tetra.centroid().length() < EPSILON);
        assert_eq!(moved.faces(), tetra.faces());
    }

    #[test]
    fn test_rotated_preserves_vertex_norms() {
        let tetra = tetrahedron();
        let rotation = DMat3::from_rotation_z(1.0);
        let turned = tetra.rotated(&rotation);
        for (before, after) in tetra.vertices().iter().zip(turned.vertices()) {
            assert!((before.length() - after.length()).abs() < EPSILON);
        }
    }
}
