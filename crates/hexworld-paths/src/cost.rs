//! Edge-cost model and the A* distance estimate.

use hexworld_core::Tile;

/// Elevation divisors for the asymmetric climb/descent cost.
///
/// Ascending edges pay `delta / up_divisor`; descending edges are credited
/// `delta / down_divisor`. The down divisor is larger, so climbing costs more
/// per unit of elevation than descending gives back.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCost {
    pub up_divisor: f32,
    pub down_divisor: f32,
}

impl Default for TerrainCost {
    fn default() -> Self {
        Self {
            up_divisor: 2.0,
            down_divisor: 2.5,
        }
    }
}

impl TerrainCost {
    /// Cost of stepping between two adjacent tiles.
    ///
    /// Base cost 1, plus the signed elevation term, plus the destination
    /// tile's movement penalty, clamped at 0 (a steep descent never pays the
    /// mover). Any step costing more than `max_step_cost` is reported as
    /// infinite and cannot be taken this search, independent of the total
    /// budget.
    pub fn cost_between(&self, from: &Tile, to: &Tile, max_step_cost: f32) -> f32 {
        let mut cost = 1.0;

        let elevation_delta = to.elevation - from.elevation;
        if elevation_delta < 0.0 {
            cost += elevation_delta / self.down_divisor;
        } else {
            cost += elevation_delta / self.up_divisor;
        }

        cost += to.move_cost_penalty;

        let cost = cost.max(0.0);
        if cost > max_step_cost {
            return f32::INFINITY;
        }
        cost
    }

    /// Lower-bound-ish estimate of travel cost from `from` to `goal`: hex
    /// distance adjusted by the elevation asymmetry applied to the two
    /// endpoints directly.
    ///
    /// Not strictly admissible under the asymmetric divisors, so A* paths are
    /// near-optimal rather than guaranteed optimal.
    pub fn estimate(&self, from: &Tile, goal: &Tile) -> f32 {
        let mut est = from.coord.distance(goal.coord) as f32;

        let elevation_delta = from.elevation - goal.elevation;
        if elevation_delta < 0.0 {
            est += -elevation_delta / self.down_divisor;
        } else {
            est += elevation_delta / self.up_divisor;
        }

        est
    }
}

/// Strategy for pricing a single edge.
#[derive(Copy, Clone, Debug)]
pub enum StepCost {
    /// Terrain-aware: elevation asymmetry, movement penalty, per-step cap.
    Terrain(TerrainCost),
    /// Fixed cost per step, ignoring terrain entirely. Used by connectivity
    /// probes that only care about hop reachability.
    Constant(f32),
}

impl StepCost {
    /// Price the directed edge `from -> to`.
    pub fn between(&self, from: &Tile, to: &Tile, max_step_cost: f32) -> f32 {
        match self {
            StepCost::Terrain(terrain) => terrain.cost_between(from, to, max_step_cost),
            StepCost::Constant(c) => *c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexworld_core::{HexCoord, IMPASSABLE};

    fn tile(q: i32, r: i32, elevation: f32) -> Tile {
        Tile::new(HexCoord::new(q, r), elevation)
    }

    #[test]
    fn flat_step_costs_one() {
        let t = TerrainCost::default();
        let a = tile(0, 0, 0.0);
        let b = tile(1, 0, 0.0);
        assert_eq!(t.cost_between(&a, &b, f32::INFINITY), 1.0);
    }

    #[test]
    fn ascent_uses_up_divisor() {
        // +10 elevation at up_divisor 2 adds 5 to the base step.
        let t = TerrainCost::default();
        let a = tile(0, 0, 0.0);
        let b = tile(1, 0, 10.0);
        assert_eq!(t.cost_between(&a, &b, f32::INFINITY), 6.0);
    }

    #[test]
    fn descent_uses_down_divisor() {
        // -5 elevation at down_divisor 2.5 credits 2 against the base step.
        let t = TerrainCost::default();
        let a = tile(0, 0, 5.0);
        let b = tile(1, 0, 0.0);
        // 1 + (-5 / 2.5) = -1, clamped at zero.
        assert_eq!(t.cost_between(&a, &b, f32::INFINITY), 0.0);
        // A gentler descent stays positive: 1 + (-1 / 2.5) = 0.6.
        let c = tile(2, 0, 4.0);
        assert!((t.cost_between(&a, &c, f32::INFINITY) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn climb_costs_more_than_descent_refunds() {
        let t = TerrainCost::default();
        let low = tile(0, 0, 0.0);
        let high = tile(1, 0, 2.0);
        let up = t.cost_between(&low, &high, f32::INFINITY);
        let down = t.cost_between(&high, &low, f32::INFINITY);
        assert!(up - 1.0 > 1.0 - down);
    }

    #[test]
    fn penalty_is_added_for_destination_only() {
        let t = TerrainCost::default();
        let a = tile(0, 0, 0.0);
        let swamp = Tile::with_penalty(HexCoord::new(1, 0), 0.0, 2.5);
        assert_eq!(t.cost_between(&a, &swamp, f32::INFINITY), 3.5);
        assert_eq!(t.cost_between(&swamp, &a, f32::INFINITY), 1.0);
    }

    #[test]
    fn step_cap_makes_edge_infinite() {
        let t = TerrainCost::default();
        let a = tile(0, 0, 0.0);
        let b = tile(1, 0, 10.0); // cost 6
        assert_eq!(t.cost_between(&a, &b, 5.0), f32::INFINITY);
        assert_eq!(t.cost_between(&a, &b, 6.0), 6.0);
    }

    #[test]
    fn impassable_tile_is_infinite_even_unbounded() {
        let t = TerrainCost::default();
        let a = tile(0, 0, 0.0);
        let water = Tile::with_penalty(HexCoord::new(1, 0), 0.0, IMPASSABLE);
        assert_eq!(t.cost_between(&a, &water, f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn constant_ignores_terrain_and_cap() {
        let step = StepCost::Constant(1.0);
        let a = tile(0, 0, 0.0);
        let peak = Tile::with_penalty(HexCoord::new(1, 0), 100.0, 50.0);
        assert_eq!(step.between(&a, &peak, 0.5), 1.0);
    }

    #[test]
    fn estimate_penalizes_climb_toward_goal() {
        let t = TerrainCost::default();
        let low = tile(0, 0, 0.0);
        let high = tile(3, 0, 10.0);
        // Toward higher ground: distance 3 plus 10/2.5 (delta negative branch).
        assert_eq!(t.estimate(&low, &high), 3.0 + 4.0);
        // Toward lower ground: distance 3 plus 10/2.
        assert_eq!(t.estimate(&high, &low), 3.0 + 5.0);
    }
}
