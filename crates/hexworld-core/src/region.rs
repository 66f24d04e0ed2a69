//! Map-access traits and a concrete sparse hex map.

use rustc_hash::FxHashMap;

use crate::coords::HexCoord;
use crate::tile::Tile;

/// Identifies the unit occupying a tile, for dynamic blocking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u32);

/// Read access to a world grid; the only contract searches depend on.
///
/// Grid edges and holes are expected: a coordinate with no tile is not an
/// error, it simply has no edges. Implementations must be safe for concurrent
/// reads as long as the grid is not mutated mid-search.
pub trait Region {
    /// The tile at `coord`, if one exists.
    fn tile_at(&self, coord: HexCoord) -> Option<Tile>;

    /// Append the existing neighbor tiles of `coord` into `buf`, silently
    /// skipping coordinates with no tile. The caller clears `buf`.
    fn neighbor_tiles(&self, coord: HexCoord, buf: &mut Vec<Tile>) {
        for n in coord.neighbors() {
            if let Some(tile) = self.tile_at(n) {
                buf.push(tile);
            }
        }
    }

    /// The unit occupying `coord`, if any. Only consulted when a search has
    /// occupant blocking enabled; the default reports every tile free.
    fn occupant_at(&self, _coord: HexCoord) -> Option<OccupantId> {
        None
    }
}

// ---------------------------------------------------------------------------
// HexMap
// ---------------------------------------------------------------------------

/// A sparse hex map: tiles and occupants keyed by coordinate.
///
/// Suitable for irregular grids with boundary holes. Hosts with their own
/// terrain store can implement [`Region`] directly instead.
#[derive(Clone, Debug, Default)]
pub struct HexMap {
    tiles: FxHashMap<HexCoord, Tile>,
    occupants: FxHashMap<HexCoord, OccupantId>,
}

impl HexMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flat map (zero elevation, zero penalty) covering every coordinate
    /// within `radius` of `center`.
    pub fn flat_disc(center: HexCoord, radius: i32) -> Self {
        let mut map = Self::new();
        for c in center.disc(radius) {
            map.insert(Tile::new(c, 0.0));
        }
        map
    }

    /// Insert or replace a tile, keyed by its coordinate.
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.coord, tile);
    }

    /// Remove the tile at `coord`, leaving a hole.
    pub fn remove(&mut self, coord: HexCoord) -> Option<Tile> {
        self.tiles.remove(&coord)
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Place a unit on `coord`, replacing any previous occupant.
    pub fn place_occupant(&mut self, coord: HexCoord, id: OccupantId) {
        self.occupants.insert(coord, id);
    }

    /// Remove the unit at `coord`, if any.
    pub fn remove_occupant(&mut self, coord: HexCoord) -> Option<OccupantId> {
        self.occupants.remove(&coord)
    }
}

impl Region for HexMap {
    fn tile_at(&self, coord: HexCoord) -> Option<Tile> {
        self.tiles.get(&coord).copied()
    }

    fn occupant_at(&self, coord: HexCoord) -> Option<OccupantId> {
        self.occupants.get(&coord).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut map = HexMap::new();
        let c = HexCoord::new(1, -1);
        map.insert(Tile::new(c, 7.0));
        assert_eq!(map.tile_at(c).unwrap().elevation, 7.0);
        assert!(map.tile_at(HexCoord::new(9, 9)).is_none());
    }

    #[test]
    fn neighbor_tiles_skip_holes() {
        // Center plus two of its six neighbors; the other four are holes.
        let mut map = HexMap::new();
        let center = HexCoord::ZERO;
        map.insert(Tile::new(center, 0.0));
        map.insert(Tile::new(HexCoord::new(1, 0), 0.0));
        map.insert(Tile::new(HexCoord::new(0, 1), 0.0));

        let mut buf = Vec::new();
        map.neighbor_tiles(center, &mut buf);
        assert_eq!(buf.len(), 2);
        for t in &buf {
            assert_eq!(center.distance(t.coord), 1);
        }
    }

    #[test]
    fn flat_disc_covers_radius() {
        let map = HexMap::flat_disc(HexCoord::ZERO, 2);
        assert_eq!(map.len(), 19);
        let mut buf = Vec::new();
        map.neighbor_tiles(HexCoord::ZERO, &mut buf);
        assert_eq!(buf.len(), 6);
        // Boundary tiles see fewer neighbors.
        buf.clear();
        map.neighbor_tiles(HexCoord::new(2, 0), &mut buf);
        assert!(buf.len() < 6);
    }

    #[test]
    fn occupants() {
        let mut map = HexMap::flat_disc(HexCoord::ZERO, 1);
        let c = HexCoord::new(1, 0);
        assert!(map.occupant_at(c).is_none());
        map.place_occupant(c, OccupantId(42));
        assert_eq!(map.occupant_at(c), Some(OccupantId(42)));
        assert_eq!(map.remove_occupant(c), Some(OccupantId(42)));
        assert!(map.occupant_at(c).is_none());
    }

    #[test]
    fn remove_leaves_hole() {
        let mut map = HexMap::flat_disc(HexCoord::ZERO, 1);
        let c = HexCoord::new(0, -1);
        assert!(map.remove(c).is_some());
        assert!(map.tile_at(c).is_none());
        let mut buf = Vec::new();
        map.neighbor_tiles(HexCoord::ZERO, &mut buf);
        assert_eq!(buf.len(), 5);
    }
}
