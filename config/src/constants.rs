//! # Configuration Constants
//!
//! Centralized constants for the tessella pipeline. All precision tolerances,
//! reference scene parameters, and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Reference parameters**: Default twist, neighbor count, lattice range
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance: unit-sphere vertex distances, face coplanarity,
/// normal alignment, and centering checks all compare against this value.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-10));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// REFERENCE SCENE PARAMETERS
// =============================================================================

/// Default twist angle (radians) applied when attaching a neighbor solid.
///
/// One tenth of a full turn. Rotating a regular pentagon by this angle about
/// its center maps its edge midpoints onto its vertices, so two face-to-face
/// dodecahedra twisted by it interlock edge-over-vertex instead of
/// edge-over-edge.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TWIST_ANGLE;
///
/// let full_turn = 2.0 * std::f64::consts::PI;
/// assert!((full_turn / DEFAULT_TWIST_ANGLE - 10.0).abs() < 1e-12);
/// ```
pub const DEFAULT_TWIST_ANGLE: f64 = std::f64::consts::PI / 5.0;

/// Number of faces that receive a neighbor in the reference cluster.
///
/// The reference dodecahedron cluster attaches one copy to each of the
/// first five faces of the central solid.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_NEIGHBOR_FACES;
///
/// let face_indices: Vec<u32> = (0..DEFAULT_NEIGHBOR_FACES as u32).collect();
/// assert_eq!(face_indices.len(), 5);
/// ```
pub const DEFAULT_NEIGHBOR_FACES: usize = 5;

/// Default half-extent of the body-centered cubic lattice, in cells.
///
/// A range of `r` spans indices `-r..=r` on each axis for both interleaved
/// sub-lattices, producing `2 * (2r + 1)^3` placements (54 at the default).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_LATTICE_RANGE;
///
/// let side = 2 * DEFAULT_LATTICE_RANGE as usize + 1;
/// assert_eq!(2 * side * side * side, 54);
/// ```
pub const DEFAULT_LATTICE_RANGE: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum accepted lattice range.
///
/// Safety limit to prevent memory exhaustion from an oversized tiling
/// request: at this range the lattice already holds 71,874 cells
/// (about 3.2 million triangles once tessellated).
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LATTICE_RANGE;
///
/// let requested = 3u32;
/// assert!(requested <= MAX_LATTICE_RANGE);
/// ```
pub const MAX_LATTICE_RANGE: u32 = 16;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-10));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-10));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
