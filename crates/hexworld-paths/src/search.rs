//! The best-first search engine.
//!
//! One routine drives all variants: Dijkstra ([`dijkstra_search`]), A*
//! ([`astar_search`]) and the constant-cost movement-range sweep
//! ([`reachability_probe`]) differ only in heuristic and step-cost strategy.

use hexworld_core::{HexCoord, Region, Tile};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::cost::{StepCost, TerrainCost};
use crate::frontier::PriorityQueue;
use crate::result::SearchResult;

/// Per-call search limits and strategy knobs.
#[derive(Copy, Clone, Debug)]
pub struct SearchConfig {
    /// Hop-count ceiling from the start. A non-positive value degrades to
    /// "explore nothing beyond the start".
    pub max_depth: i32,
    /// Ceiling on accumulated path cost.
    pub max_cost: f32,
    /// Ceiling on a single edge's cost; pricier edges are impassable this
    /// search, independent of `max_cost`.
    pub max_step_cost: f32,
    /// Treat tiles occupied by another unit as blocked. The goal tile itself
    /// is exempt, so a unit can always target an occupied destination.
    pub block_occupants: bool,
    /// Elevation divisors for the terrain cost model and the A* estimate.
    pub terrain: TerrainCost,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            max_cost: f32::INFINITY,
            max_step_cost: f32::INFINITY,
            block_occupants: false,
            terrain: TerrainCost::default(),
        }
    }
}

/// Heuristic strategy for [`best_first`].
#[derive(Copy, Clone, Debug)]
pub(crate) enum Heuristic {
    /// No guidance; with a terrain step cost this is Dijkstra.
    Zero,
    /// Hex distance adjusted by the elevation asymmetry, evaluated between
    /// the node and goal tiles directly.
    ElevationAdjusted,
}

/// Priority nudge proportional to depth, so that among near-tied frontier
/// entries the one deeper along a promising branch is expanded first. Kept
/// well below the smallest real cost increment; never folded into stored
/// costs.
const DEPTH_NUDGE: f32 = 1e-4;

/// A frontier entry: a tile plus its hop count from the start.
struct SearchNode {
    tile: Tile,
    depth: i32,
}

/// Per-coordinate relaxation state. `open` distinguishes live frontier
/// entries from stale ones left behind by an improving relaxation.
struct NodeState {
    g: f32,
    open: bool,
}

/// Run one best-first search.
///
/// `goal: None` makes the search exhaust its frontier and return the full
/// explored set (the movement range); there is no sentinel coordinate.
pub(crate) fn best_first<R: Region>(
    region: &R,
    start: HexCoord,
    goal: Option<HexCoord>,
    step: &StepCost,
    heuristic: Heuristic,
    cfg: &SearchConfig,
) -> SearchResult {
    let Some(start_tile) = region.tile_at(start) else {
        return SearchResult::empty();
    };
    let goal_tile = match goal {
        Some(g) => match region.tile_at(g) {
            Some(t) => Some(t),
            None => return SearchResult::empty(),
        },
        None => None,
    };

    let mut result = SearchResult::empty();
    let mut frontier = PriorityQueue::new();
    let mut nodes: FxHashMap<HexCoord, NodeState> = FxHashMap::default();
    let mut previous: FxHashMap<HexCoord, Option<Tile>> = FxHashMap::default();
    let mut explored: FxHashSet<HexCoord> = FxHashSet::default();
    let mut nbuf: Vec<Tile> = Vec::with_capacity(6);

    frontier.enqueue(
        SearchNode {
            tile: start_tile,
            depth: 0,
        },
        0.0,
    );
    nodes.insert(start, NodeState { g: 0.0, open: true });
    previous.insert(start, None);

    let mut goal_node: Option<Tile> = None;

    while !frontier.is_empty() {
        let current = frontier.dequeue_min();
        let coord = current.tile.coord;

        let state = nodes.get_mut(&coord).expect("frontier entry without node state");
        if !state.open {
            continue;
        }
        state.open = false;
        let current_g = state.g;

        if explored.insert(coord) {
            result.explored_tiles.push(current.tile);
        }

        if goal == Some(coord) {
            result.reached_goal = true;
            result.path_cost = current_g;
            goal_node = Some(current.tile);
            break;
        }

        let next_depth = current.depth + 1;
        if next_depth > cfg.max_depth {
            continue;
        }

        nbuf.clear();
        region.neighbor_tiles(coord, &mut nbuf);

        for &neighbor in &nbuf {
            let mut edge = step.between(&current.tile, &neighbor, cfg.max_step_cost);
            if cfg.block_occupants
                && goal != Some(neighbor.coord)
                && region.occupant_at(neighbor.coord).is_some()
            {
                edge = f32::INFINITY;
            }
            if edge.is_infinite() {
                continue;
            }

            let candidate = current_g + edge;
            if candidate > cfg.max_cost {
                continue;
            }

            if let Some(ns) = nodes.get(&neighbor.coord) {
                if candidate >= ns.g {
                    continue;
                }
            }

            nodes.insert(
                neighbor.coord,
                NodeState {
                    g: candidate,
                    open: true,
                },
            );
            previous.insert(neighbor.coord, Some(current.tile));

            let estimate = match (heuristic, &goal_tile) {
                (Heuristic::ElevationAdjusted, Some(gt)) => cfg.terrain.estimate(&neighbor, gt),
                _ => 0.0,
            };
            let priority = candidate + estimate - next_depth as f32 * DEPTH_NUDGE;
            frontier.enqueue(
                SearchNode {
                    tile: neighbor,
                    depth: next_depth,
                },
                priority,
            );
        }
    }

    // Reconstruct goal-to-start by following predecessor links.
    if let Some(tile) = goal_node {
        result.path_tiles.push(tile);
        let mut cursor = previous.get(&tile.coord).copied().flatten();
        while let Some(tile) = cursor {
            result.path_tiles.push(tile);
            cursor = previous.get(&tile.coord).copied().flatten();
        }
    }

    result
}

/// Cost-optimal search from `start` to `goal` under the configured limits.
///
/// Uses the terrain cost model with no heuristic guidance; for non-negative
/// edge costs the returned `path_cost` is minimal.
pub fn dijkstra_search<R: Region>(
    region: &R,
    start: HexCoord,
    goal: HexCoord,
    cfg: &SearchConfig,
) -> SearchResult {
    best_first(
        region,
        start,
        Some(goal),
        &StepCost::Terrain(cfg.terrain),
        Heuristic::Zero,
        cfg,
    )
}

/// Heuristic-guided search from `start` to `goal` under the configured
/// limits.
///
/// The elevation-adjusted estimate is not strictly admissible, so the result
/// is near-optimal rather than guaranteed optimal; `path_cost` is still the
/// exact cost of the returned path.
pub fn astar_search<R: Region>(
    region: &R,
    start: HexCoord,
    goal: HexCoord,
    cfg: &SearchConfig,
) -> SearchResult {
    best_first(
        region,
        start,
        Some(goal),
        &StepCost::Terrain(cfg.terrain),
        Heuristic::ElevationAdjusted,
        cfg,
    )
}

/// Enumerate every tile reachable from `start` within `max_depth` hops and
/// `max_cost` total, pricing each step at 1 regardless of terrain.
///
/// The search has no goal and always terminates by exhausting its frontier;
/// the explored set of the result is the movement range.
pub fn reachability_probe<R: Region>(
    region: &R,
    start: HexCoord,
    max_depth: i32,
    max_cost: f32,
) -> SearchResult {
    let cfg = SearchConfig {
        max_depth,
        max_cost,
        ..SearchConfig::default()
    };
    best_first(
        region,
        start,
        None,
        &StepCost::Constant(1.0),
        Heuristic::Zero,
        &cfg,
    )
}
