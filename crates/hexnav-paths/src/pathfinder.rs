use hexnav_core::{HexCostGrid, Point, hex};

use crate::astar::{SearchStats, astar_path_with_stats};
use crate::dijkstra::dijkstra_map;
use crate::node::PathNode;
use crate::traits::{AstarPather, Pather, WeightedPather};

// ---------------------------------------------------------------------------
// HexCostGrid as a pather
// ---------------------------------------------------------------------------

impl Pather for HexCostGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(hex::neighbors(p).into_iter().filter(|&n| self.is_walkable(n)));
    }
}

impl WeightedPather for HexCostGrid {
    /// Entering a cell costs that cell's weight, at least 1 for any
    /// walkable cell.
    fn cost(&self, _from: Point, to: Point) -> i32 {
        let cost = self.get(to);
        debug_assert!(cost >= 1, "entering impassable cell {to}");
        cost
    }
}

impl AstarPather for HexCostGrid {
    /// Step count. Admissible because every walkable cost is an integer
    /// `>= 1`.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        hex::distance(from, to)
    }
}

// ---------------------------------------------------------------------------
// HexPathfinder
// ---------------------------------------------------------------------------

/// Weighted A* over a [`HexCostGrid`].
///
/// Holds no state: every query allocates its own search sets, so one
/// pathfinder (or many threads sharing a `&HexCostGrid`) can run any number
/// of independent searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexPathfinder;

impl HexPathfinder {
    pub fn new() -> Self {
        Self
    }

    /// A minimum-cost path from `start` to `goal`, both included.
    ///
    /// Returns an empty path when either endpoint is impassable or the goal
    /// cannot be reached. Among equal-cost paths, which one is returned is
    /// unspecified.
    pub fn find_path(&self, grid: &HexCostGrid, start: Point, goal: Point) -> Vec<Point> {
        self.find_path_with_stats(grid, start, goal).0
    }

    /// Like [`find_path`](Self::find_path), also returning search counters.
    pub fn find_path_with_stats(
        &self,
        grid: &HexCostGrid,
        start: Point,
        goal: Point,
    ) -> (Vec<Point>, SearchStats) {
        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            log::debug!("no path {start} -> {goal}: endpoint is impassable");
            return (Vec::new(), SearchStats::default());
        }

        let (path, stats) = astar_path_with_stats(grid, start, goal);
        match &path {
            Some(p) => log::debug!(
                "path {start} -> {goal}: {} cells, expanded {}, pushed {}, stale {}",
                p.len(),
                stats.expanded,
                stats.pushed,
                stats.stale
            ),
            None => log::debug!(
                "no path {start} -> {goal}: goal unreachable after expanding {}",
                stats.expanded
            ),
        }
        (path.unwrap_or_default(), stats)
    }

    /// Sum of the costs of every cell after the first.
    ///
    /// The start cell is free: standing there costs nothing. Empty and
    /// single-cell paths cost 0. The sum is `i64`, so it cannot overflow
    /// however large the cell costs are.
    pub fn path_cost(&self, grid: &HexCostGrid, path: &[Point]) -> i64 {
        path.iter().skip(1).map(|&p| i64::from(grid.get(p))).sum()
    }

    /// Whether every cell of `path` is walkable and each consecutive pair
    /// are neighbors. The empty path is valid.
    pub fn is_valid_path(&self, grid: &HexCostGrid, path: &[Point]) -> bool {
        path.iter().all(|&p| grid.is_walkable(p))
            && path
                .windows(2)
                .all(|w| hex::neighbors(w[0]).contains(&w[1]))
    }

    /// Every cell reachable from `start` for a total cost of at most
    /// `budget`, cheapest first. Empty if `start` is impassable.
    pub fn reachable(&self, grid: &HexCostGrid, start: Point, budget: i64) -> Vec<PathNode> {
        if !grid.is_walkable(start) {
            return Vec::new();
        }
        dijkstra_map(grid, &[start], budget)
    }
}
