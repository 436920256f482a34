//! # Tessella Mesh
//!
//! Polyhedral tiling mesh generation: canonical solids, face-to-face
//! neighbor placement, and body-centered cubic tilings, flattened into
//! triangle soups for an external renderer.
//!
//! ## Architecture
//!
//! ```text
//! solids (Polyhedron) → placement (attach / lattice) → scene (Scene)
//! ```
//!
//! All geometry is f64 end to end; f32 appears only in the `Scene`
//! position exports at the renderer boundary. Errors are synchronous:
//! configuration mistakes and geometric degeneracies surface as
//! [`MeshError`] values, never as logs or silent fallbacks.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DEFAULT_LATTICE_RANGE;
//! use tessella_mesh::truncated_octahedron_lattice;
//!
//! let scene = truncated_octahedron_lattice(DEFAULT_LATTICE_RANGE).unwrap();
//! assert_eq!(scene.triangle_count(), 54 * 44);
//! ```

pub mod attach;
pub mod error;
pub mod lattice;
pub mod polyhedron;
pub mod scene;
pub mod solids;
pub mod transform;
pub mod triangle;
pub mod triangulate;

pub use attach::{attach_neighbor, face_plane};
pub use error::MeshError;
pub use lattice::{bcc_offsets, tile, CELL_HALF_PERIOD, CELL_PERIOD};
pub use polyhedron::{Polyhedron, Triangulation};
pub use scene::{Scene, SceneBuilder};
pub use solids::{create_dodecahedron, create_truncated_octahedron, SolidFamily};
pub use transform::{rotate, rotation_matrix, translate, Placement};
pub use triangle::Triangle;
pub use triangulate::triangulate;

/// Builds the reference dodecahedron cluster scene.
///
/// One canonical dodecahedron at the origin plus a twisted mirror copy
/// attached to each listed face.
///
/// # Arguments
///
/// * `neighbor_faces` - Face indices of the base that receive a neighbor
/// * `twist` - Rotation about each face normal, in radians
///
/// # Errors
///
/// Returns a domain error if a face index is out of range.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_NEIGHBOR_FACES, DEFAULT_TWIST_ANGLE};
/// use tessella_mesh::dodecahedron_cluster;
///
/// let faces: Vec<u32> = (0..DEFAULT_NEIGHBOR_FACES as u32).collect();
/// let scene = dodecahedron_cluster(&faces, DEFAULT_TWIST_ANGLE).unwrap();
/// assert_eq!(scene.triangle_count(), 360); // six solids, sixty triangles each
/// ```
pub fn dodecahedron_cluster(neighbor_faces: &[u32], twist: f64) -> Result<Scene, MeshError> {
    let base = create_dodecahedron();

    let mut builder = SceneBuilder::new();
    builder.add_solid(&base)?;
    for &face_index in neighbor_faces {
        let neighbor = attach_neighbor(&base, face_index, twist)?;
        builder.add_solid(&neighbor)?;
    }
    Ok(builder.finish())
}

/// Builds the reference truncated octahedron lattice scene.
///
/// The canonical cell tiled over the body-centered cubic offsets of the
/// given range; adjacent cells share walls exactly.
///
/// # Arguments
///
/// * `range` - Half-extent of the index grid on each axis
///
/// # Errors
///
/// Returns a configuration error if `range` exceeds the lattice cap.
///
/// # Example
///
/// ```rust
/// use tessella_mesh::truncated_octahedron_lattice;
///
/// let scene = truncated_octahedron_lattice(0).unwrap();
/// assert_eq!(scene.triangle_count(), 88); // two cells at range zero
/// ```
pub fn truncated_octahedron_lattice(range: u32) -> Result<Scene, MeshError> {
    let base = create_truncated_octahedron();
    let offsets = bcc_offsets(range)?;

    let mut builder = SceneBuilder::new();
    builder.add_tiling(&base, &offsets)?;
    Ok(builder.finish())
}
