//! # Scene Assembly
//!
//! Collects triangulated solids into the flat triangle and edge lists a
//! renderer consumes. All geometry stays f64 until the `_f32` exports at
//! the renderer boundary; presentation attributes (color, camera,
//! lighting) are the renderer's business and never appear here.

use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::polyhedron::Polyhedron;
use crate::triangle::Triangle;
use crate::triangulate::triangulate;

/// Accumulates placed solids into a [`Scene`].
///
/// # Example
///
/// ```rust
/// use tessella_mesh::{create_dodecahedron, SceneBuilder};
///
/// let mut builder = SceneBuilder::new();
/// builder.add_solid(&create_dodecahedron()).unwrap();
/// let scene = builder.finish();
/// assert_eq!(scene.triangle_count(), 60);
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    triangles: Vec<Triangle>,
    edges: Vec<[DVec3; 2]>,
}

impl SceneBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulates one solid and appends its triangles and face outlines.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the solid fails to triangulate.
    pub fn add_solid(&mut self, solid: &Polyhedron) -> Result<(), MeshError> {
        let soup = triangulate(solid)?;
        self.triangles.extend(soup);
        self.edges.extend(solid.face_edges());
        Ok(())
    }

    /// Appends a set of already placed solids, in order.
    ///
    /// # Errors
    ///
    /// Returns a domain error if any solid fails to triangulate.
    pub fn add_solids(&mut self, solids: &[Polyhedron]) -> Result<(), MeshError> {
        for solid in solids {
            self.add_solid(solid)?;
        }
        Ok(())
    }

    /// Tiles a base solid over placement offsets and appends every copy.
    ///
    /// Placements are independent, so the per-copy triangulation runs in
    /// parallel; the output order still follows the offset order.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the base solid fails to triangulate.
    pub fn add_tiling(
        &mut self,
        base: &Polyhedron,
        offsets: &[DVec3],
    ) -> Result<(), MeshError> {
        let parts: Vec<(Vec<Triangle>, Vec<[DVec3; 2]>)> = offsets
            .par_iter()
            .map(|&offset| {
                let copy = base.translated(offset);
                let soup = triangulate(&copy)?;
                let edges = copy.face_edges();
                Ok((soup, edges))
            })
            .collect::<Result<_, MeshError>>()?;

        for (soup, edges) in parts {
            self.triangles.extend(soup);
            self.edges.extend(edges);
        }
        Ok(())
    }

    /// Finishes the scene.
    pub fn finish(self) -> Scene {
        Scene {
            triangles: self.triangles,
            edges: self.edges,
        }
    }
}

/// A finished scene: triangle soup plus face outline segments.
///
/// The triangles carry the fill geometry; the edges retrace every face
/// outline so a renderer can draw crisp cell borders on top of the fill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    triangles: Vec<Triangle>,
    edges: Vec<[DVec3; 2]>,
}

impl Scene {
    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the face outline segments.
    #[inline]
    pub fn edges(&self) -> &[[DVec3; 2]] {
        &self.edges
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of outline segments.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the scene holds no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.edges.is_empty()
    }

    /// Computes the axis-aligned bounding box over all geometry.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for tri in &self.triangles {
            for corner in [tri.a, tri.b, tri.c] {
                min = min.min(corner);
                max = max.max(corner);
            }
        }
        for edge in &self.edges {
            for endpoint in *edge {
                min = min.min(endpoint);
                max = max.max(endpoint);
            }
        }
        (min, max)
    }

    /// Exports triangle corners as f32 array for the renderer.
    ///
    /// Returns a flattened [x, y, z, x, y, z, ...] array, nine floats per
    /// triangle.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 9);
        for tri in &self.triangles {
            for corner in [tri.a, tri.b, tri.c] {
                result.push(corner.x as f32);
                result.push(corner.y as f32);
                result.push(corner.z as f32);
            }
        }
        result
    }

    /// Exports outline segment endpoints as f32 array for the renderer.
    ///
    /// Returns a flattened array, six floats per segment.
    pub fn edge_positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.edges.len() * 6);
        for edge in &self.edges {
            for endpoint in *edge {
                result.push(endpoint.x as f32);
                result.push(endpoint.y as f32);
                result.push(endpoint.z as f32);
            }
        }
        result
    }

    /// Consumes the scene, returning the triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}
