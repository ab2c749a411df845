use std::collections::BinaryHeap;

use hexnav_core::Point;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::node::NodeRef;
use crate::traits::AstarPather;

/// Counters collected during one A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Entries pushed onto the open set, duplicates included.
    pub pushed: usize,
    /// Popped entries skipped because their node was already closed.
    pub stale: usize,
}

/// Compute a minimum-cost path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints) or `None` if `to` is
/// unreachable. `from` itself is not checked for passability.
pub fn astar_path<P: AstarPather>(pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
    astar_path_with_stats(pather, from, to).0
}

/// Like [`astar_path`], also returning search counters.
///
/// All search state is local to the call. Path costs accumulate in `i64`,
/// so any sequence of `i32` step costs sums exactly. The closed set is
/// lazy: a node may sit in the open set several times, and entries for
/// nodes that are already closed are skipped when popped.
pub fn astar_path_with_stats<P: AstarPather>(
    pather: &P,
    from: Point,
    to: Point,
) -> (Option<Vec<Point>>, SearchStats) {
    let mut stats = SearchStats::default();

    if from == to {
        return (Some(vec![from]), stats);
    }

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut g_score: FxHashMap<Point, i64> = FxHashMap::default();
    let mut came_from: FxHashMap<Point, Point> = FxHashMap::default();
    let mut closed: FxHashSet<Point> = FxHashSet::default();

    g_score.insert(from, 0);
    open.push(NodeRef {
        pos: from,
        f: i64::from(pather.estimate(from, to)),
    });
    stats.pushed += 1;

    let mut nbuf = Vec::with_capacity(6);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        if !closed.insert(cp) {
            stats.stale += 1;
            continue;
        }

        if cp == to {
            return (Some(reconstruct(&came_from, to)), stats);
        }

        let Some(&current_g) = g_score.get(&cp) else {
            continue;
        };
        stats.expanded += 1;
        log::trace!("expand {cp} g={current_g} f={}", current.f);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            let tentative_g = current_g + i64::from(pather.cost(cp, np));
            if let Some(&g) = g_score.get(&np) {
                if tentative_g >= g {
                    continue;
                }
            }
            g_score.insert(np, tentative_g);
            came_from.insert(np, cp);
            open.push(NodeRef {
                pos: np,
                f: tentative_g + i64::from(pather.estimate(np, to)),
            });
            stats.pushed += 1;
        }
    }

    (None, stats)
}

/// Walk `came_from` back from `goal`, then reverse.
fn reconstruct(came_from: &FxHashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
