//! The value returned by every search.

use hexworld_core::{HexCoord, Tile};

use crate::cost::TerrainCost;

/// Outcome of one search call. Immutable once returned; the caller owns it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the goal was dequeued before the frontier emptied.
    pub reached_goal: bool,
    /// Accumulated cost to the goal. Meaningful only if `reached_goal`; it is
    /// the exact sum of edge costs along the path, not an estimate.
    pub path_cost: f32,
    /// Path tiles in goal-to-start order (empty unless `reached_goal`).
    pub path_tiles: Vec<Tile>,
    /// Every tile dequeued from the frontier, each at most once. This is the
    /// movement range when the search ran as a reachability probe.
    pub explored_tiles: Vec<Tile>,
}

impl SearchResult {
    /// An empty frontier-exhausted result.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// The path in start-to-goal order.
    pub fn tiles_from_start(&self) -> Vec<Tile> {
        let mut tiles = self.path_tiles.clone();
        tiles.reverse();
        tiles
    }

    /// Whether `coord` was explored.
    pub fn explored_contains(&self, coord: HexCoord) -> bool {
        self.explored_tiles.iter().any(|t| t.coord == coord)
    }

    /// Recompute the cost sum along the returned path under `terrain`.
    ///
    /// Audit helper: for a terrain-cost search this equals
    /// [`path_cost`](Self::path_cost) up to float rounding.
    pub fn cost_along_path(&self, terrain: &TerrainCost, max_step_cost: f32) -> f32 {
        // path_tiles is goal->start; walk it from the start end.
        self.path_tiles
            .windows(2)
            .map(|w| terrain.cost_between(&w[1], &w[0], max_step_cost))
            .sum()
    }
}
