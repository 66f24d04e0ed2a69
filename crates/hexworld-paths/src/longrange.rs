//! Budget-respecting travel toward goals beyond the per-turn budget.

use hexworld_core::{HexCoord, Region};
use rustc_hash::FxHashSet;

use crate::cost::StepCost;
use crate::result::SearchResult;
use crate::search::{Heuristic, SearchConfig, astar_search, best_first, dijkstra_search};

/// Find the best move toward `goal` when it may lie outside the turn budget.
///
/// If `goal` is reachable under `cfg`'s limits, this is just
/// [`dijkstra_search`]. Otherwise the full route geometry is probed with an
/// unbounded A*, the movement range for this turn is computed, and the
/// farthest route tile inside that range becomes a substitute goal: the
/// returned result is the bounded search to it, `reached_goal` and all. When
/// no route to `goal` exists at all, the raw movement range is returned so
/// the caller still learns how far it can get.
pub fn long_range_search<R: Region>(
    region: &R,
    start: HexCoord,
    goal: HexCoord,
    cfg: &SearchConfig,
) -> SearchResult {
    let direct = dijkstra_search(region, start, goal, cfg);
    if direct.reached_goal {
        log::debug!("long-range: goal {goal} reachable within budget");
        return direct;
    }

    // Route geometry only: drop the turn budget and ignore occupants, since
    // they will have moved by the time later turns replay this route.
    let route_cfg = SearchConfig {
        max_depth: i32::MAX,
        max_cost: f32::INFINITY,
        block_occupants: false,
        ..*cfg
    };
    let route = astar_search(region, start, goal, &route_cfg);

    // Terrain-aware movement range under the turn budget.
    let range = best_first(
        region,
        start,
        None,
        &StepCost::Terrain(cfg.terrain),
        Heuristic::Zero,
        cfg,
    );

    if !route.reached_goal {
        log::debug!("long-range: no route from {start} to {goal}, returning movement range");
        return range;
    }

    let in_range: FxHashSet<HexCoord> = range.explored_tiles.iter().map(|t| t.coord).collect();

    // path_tiles runs goal-to-start, so the first tile already in range is
    // the farthest reachable point along the route.
    let substitute = route
        .path_tiles
        .iter()
        .find(|t| in_range.contains(&t.coord));

    match substitute {
        Some(tile) => {
            log::debug!(
                "long-range: substitute goal {} on the route toward {goal}",
                tile.coord
            );
            dijkstra_search(region, start, tile.coord, cfg)
        }
        None => range,
    }
}
