//! # Lattice Tiler
//!
//! Body-centered cubic placement offsets and solid tiling.

use config::constants::MAX_LATTICE_RANGE;
use glam::DVec3;

use crate::error::MeshError;
use crate::polyhedron::Polyhedron;

/// Center-to-center period of each cubic sub-lattice.
///
/// Two truncated octahedron cells whose centers differ by this much along
/// one axis share a square wall.
pub const CELL_PERIOD: f64 = 4.0;

/// Body-center shift between the two interleaved sub-lattices.
///
/// Cells offset by this much on all three axes share a hexagon wall.
pub const CELL_HALF_PERIOD: f64 = 2.0;

/// Generates the body-centered cubic placement offsets.
///
/// Two interleaved cubic lattices: corner points at `(4x, 4y, 4z)` and
/// body centers at `(4x + 2, 4y + 2, 4z + 2)` for x, y, z in
/// `-range..=range`. The order is deterministic: x-major, then y, then z,
/// with the corner point before the body-center point at each index
/// triple.
///
/// # Arguments
///
/// * `range` - Half-extent of the index grid on each axis
///
/// # Returns
///
/// `2 * (2 * range + 1)^3` distinct offsets, 54 at range 1.
///
/// # Errors
///
/// Returns a configuration error if `range` exceeds
/// [`MAX_LATTICE_RANGE`].
///
/// # Example
///
/// ```rust
/// use tessella_mesh::bcc_offsets;
///
/// let offsets = bcc_offsets(1).unwrap();
/// assert_eq!(offsets.len(), 54);
/// ```
pub fn bcc_offsets(range: u32) -> Result<Vec<DVec3>, MeshError> {
    if range > MAX_LATTICE_RANGE {
        return Err(MeshError::configuration(format!(
            "lattice range {range} exceeds the maximum of {MAX_LATTICE_RANGE}"
        )));
    }

    let side = 2 * range as usize + 1;
    let mut offsets = Vec::with_capacity(2 * side * side * side);

    let range = i64::from(range);
    for x in -range..=range {
        for y in -range..=range {
            for z in -range..=range {
                let corner = DVec3::new(
                    CELL_PERIOD * x as f64,
                    CELL_PERIOD * y as f64,
                    CELL_PERIOD * z as f64,
                );
                offsets.push(corner);
                offsets.push(corner + DVec3::splat(CELL_HALF_PERIOD));
            }
        }
    }

    Ok(offsets)
}

/// Places one copy of `base` at every offset.
///
/// Pure translation: face tables and triangulation strategy carry over
/// unchanged, which keeps the walls of adjacent cells in lock-step.
pub fn tile(base: &Polyhedron, offsets: &[DVec3]) -> Vec<Polyhedron> {
    offsets
        .iter()
        .map(|&offset| base.translated(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solids::create_truncated_octahedron;

    #[test]
    fn test_range_one_yields_54_offsets() {
        let offsets = bcc_offsets(1).unwrap();
        assert_eq!(offsets.len(), 54);
        // All pairwise distinct; nearest neighbors sit 2*sqrt(3) apart
        for i in 0..offsets.len() {
            for j in (i + 1)..offsets.len() {
                assert!((offsets[i] - offsets[j]).length() > 1.0);
            }
        }
    }

    #[test]
    fn test_range_zero_yields_both_sub_lattices() {
        let offsets = bcc_offsets(0).unwrap();
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[0], DVec3::ZERO);
        assert_eq!(offsets[1], DVec3::splat(2.0));
    }

    #[test]
    fn test_offsets_order_is_stable() {
        let first = bcc_offsets(1).unwrap();
        let second = bcc_offsets(1).unwrap();
        assert_eq!(first, second);
        // x-major scan starting at the low corner
        assert_eq!(first[0], DVec3::splat(-4.0));
        assert_eq!(first[1], DVec3::splat(-2.0));
        assert_eq!(first[2], DVec3::new(-4.0, -4.0, 0.0));
    }

    #[test]
    fn test_offsets_stay_on_their_sub_lattice() {
        for (i, offset) in bcc_offsets(2).unwrap().iter().enumerate() {
            let expected = if i % 2 == 0 { 0.0 } else { 2.0 };
            assert_eq!(offset.x.rem_euclid(CELL_PERIOD), expected);
            assert_eq!(offset.y.rem_euclid(CELL_PERIOD), expected);
            assert_eq!(offset.z.rem_euclid(CELL_PERIOD), expected);
        }
    }

    #[test]
    fn test_range_above_cap_rejected() {
        let result = bcc_offsets(MAX_LATTICE_RANGE + 1);
        assert!(matches!(result, Err(MeshError::Configuration { .. })));
    }

    #[test]
    fn test_tile_translates_copies() {
        let base = create_truncated_octahedron();
        let offsets = bcc_offsets(0).unwrap();
        let cells = tile(&base, &offsets);
        assert_eq!(cells.len(), 2);
        assert!(cells[0].centroid().length() < 1e-12);
        assert!((cells[1].centroid() - DVec3::splat(2.0)).length() < 1e-12);
        assert_eq!(cells[1].triangulation(), base.triangulation());
    }

    fn wall_sets(cell: &Polyhedron) -> Vec<Vec<DVec3>> {
        cell.faces()
            .iter()
            .map(|face| face.iter().map(|&i| cell.vertex(i)).collect())
            .collect()
    }

    fn share_identical_wall(a: &Polyhedron, b: &Polyhedron) -> bool {
        let walls_b = wall_sets(b);
        wall_sets(a).iter().any(|wall_a| {
            walls_b.iter().any(|wall_b| {
                wall_a.len() == wall_b.len()
                    && wall_a
                        .iter()
                        .all(|p| wall_b.iter().any(|q| (*p - *q).length() < 1e-9))
            })
        })
    }

    #[test]
    fn test_diagonal_neighbors_share_hexagon_wall() {
        let base = create_truncated_octahedron();
        let neighbor = base.translated(DVec3::splat(CELL_HALF_PERIOD));
        assert!(share_identical_wall(&base, &neighbor));
    }

    #[test]
    fn test_axis_neighbors_share_square_wall() {
        let base = create_truncated_octahedron();
        let neighbor = base.translated(DVec3::new(CELL_PERIOD, 0.0, 0.0));
        assert!(share_identical_wall(&base, &neighbor));
    }
}
