//! Tile data consumed read-only by searches.

use crate::coords::HexCoord;

/// Movement-penalty sentinel marking a tile no unit can enter (deep water,
/// sheer cliffs). Any edge into such a tile costs infinity.
pub const IMPASSABLE: f32 = f32::INFINITY;

/// One cell of the world grid.
///
/// The search engine never mutates tiles; it only reads the elevation (for
/// the asymmetric climb/descent cost) and the movement penalty (added to the
/// base step cost of every edge entering the tile).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub coord: HexCoord,
    /// World elevation, in the same units the cost divisors are tuned for.
    pub elevation: f32,
    /// Non-negative extra cost for entering this tile; [`IMPASSABLE`] blocks
    /// entry outright.
    pub move_cost_penalty: f32,
}

impl Tile {
    /// Create a tile with no movement penalty.
    #[inline]
    pub const fn new(coord: HexCoord, elevation: f32) -> Self {
        Self {
            coord,
            elevation,
            move_cost_penalty: 0.0,
        }
    }

    /// Create a tile with a movement penalty.
    #[inline]
    pub const fn with_penalty(coord: HexCoord, elevation: f32, penalty: f32) -> Self {
        Self {
            coord,
            elevation,
            move_cost_penalty: penalty,
        }
    }

    /// Whether no unit can enter this tile.
    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.move_cost_penalty == IMPASSABLE
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_round_trip() {
        let t = Tile::with_penalty(HexCoord::new(2, -1), 4.5, 1.25);
        let json = serde_json::to_string(&t).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
