//! Best-first path searches over hexagonal tile maps.
//!
//! This crate implements the movement engine of a turn-based hex strategy
//! world: a single parameterized best-first search driving three variants,
//! plus a composite finder for goals beyond the per-turn budget.
//!
//! | Entry point | Variant |
//! |---|---|
//! | [`dijkstra_search`] | uniform-cost, optimal for non-negative costs |
//! | [`astar_search`] | heuristic-guided, near-optimal |
//! | [`reachability_probe`] | constant-cost movement-range sweep |
//! | [`long_range_search`] | budget-respecting progress toward a distant goal |
//!
//! All searches run against any [`Region`](hexworld_core::Region)
//! implementation and honor per-call limits: a hop-depth ceiling, a total
//! cost budget, a per-step cost cap, and optional occupant blocking. Each
//! call allocates its own bookkeeping and mutates nothing, so concurrent
//! searches over an unchanging grid snapshot are safe.

mod cost;
mod frontier;
mod longrange;
mod result;
mod search;

pub use cost::{StepCost, TerrainCost};
pub use frontier::PriorityQueue;
pub use longrange::long_range_search;
pub use result::SearchResult;
pub use search::{SearchConfig, astar_search, dijkstra_search, reachability_probe};
