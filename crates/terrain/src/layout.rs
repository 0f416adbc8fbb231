//! Offset hex-grid layout: integer tile coordinates to world positions.

use bevy::math::Vec2;

use crate::config::{HEX_SPACING_X, HEX_SPACING_Y, ISLAND_RADIUS, SCAN_EXTENT};

/// Integer (column, row) coordinate of one hex tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// World-space centre of this tile on the ground plane.
    ///
    /// Odd rows are shifted by half a column. The shift uses the truncating
    /// remainder, so negative odd rows shift left instead of right; both land
    /// on the same hex lattice.
    pub fn to_world(self) -> Vec2 {
        let row_offset = (self.row % 2) as f32 * 0.5;
        Vec2::new(
            (self.col as f32 + row_offset) * HEX_SPACING_X,
            self.row as f32 * HEX_SPACING_Y,
        )
    }

    /// Whether this tile's centre lies inside the circular island boundary.
    pub fn is_on_island(self) -> bool {
        self.to_world().length() <= ISLAND_RADIUS
    }
}

/// Every coordinate of the square scan, row by row.
pub fn scan_coords() -> impl Iterator<Item = TileCoord> {
    (-SCAN_EXTENT..=SCAN_EXTENT)
        .flat_map(|col| (-SCAN_EXTENT..=SCAN_EXTENT).map(move |row| TileCoord::new(col, row)))
}

/// Coordinates of the square scan that fall inside the island radius.
pub fn island_coords() -> impl Iterator<Item = TileCoord> {
    scan_coords().filter(|c| c.is_on_island())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        assert_eq!(TileCoord::new(0, 0).to_world(), Vec2::ZERO);
    }

    #[test]
    fn test_even_row_has_no_offset() {
        let p = TileCoord::new(3, 2).to_world();
        assert!((p.x - 3.0 * HEX_SPACING_X).abs() < 1e-5);
        assert!((p.y - 2.0 * HEX_SPACING_Y).abs() < 1e-5);
    }

    #[test]
    fn test_odd_row_half_step_offset() {
        let p = TileCoord::new(3, 1).to_world();
        assert!((p.x - 3.5 * HEX_SPACING_X).abs() < 1e-5);
        let n = TileCoord::new(3, -1).to_world();
        assert!((n.x - 2.5 * HEX_SPACING_X).abs() < 1e-5);
    }

    #[test]
    fn test_x_increases_with_column() {
        for row in -5..=5 {
            for col in -5..5 {
                let a = TileCoord::new(col, row).to_world();
                let b = TileCoord::new(col + 1, row).to_world();
                assert!(b.x > a.x);
                assert!((b.x - a.x - HEX_SPACING_X).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_y_proportional_to_row() {
        for row in -20..=20 {
            for col in [-7, 0, 4] {
                let p = TileCoord::new(col, row).to_world();
                assert!((p.y - row as f32 * HEX_SPACING_Y).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_scan_covers_square() {
        let side = (2 * SCAN_EXTENT + 1) as usize;
        assert_eq!(scan_coords().count(), side * side);
    }

    #[test]
    fn test_island_coords_within_radius() {
        let coords: Vec<TileCoord> = island_coords().collect();
        assert!(!coords.is_empty());
        assert!(coords.len() < scan_coords().count());
        for c in coords {
            assert!(c.to_world().length() <= ISLAND_RADIUS);
        }
    }

    #[test]
    fn test_far_corner_excluded() {
        assert!(!TileCoord::new(SCAN_EXTENT, SCAN_EXTENT).is_on_island());
        assert!(TileCoord::new(0, 0).is_on_island());
    }
}
