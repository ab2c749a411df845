use std::collections::BinaryHeap;

use hexnav_core::Point;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::node::{NodeRef, PathNode};
use crate::traits::WeightedPather;

/// Compute a multi-source Dijkstra cost map.
///
/// Every source starts at cost 0. Expansion stops when the cumulative
/// cost exceeds `max_cost`. Returns every reached node, in non-decreasing
/// cost order.
pub fn dijkstra_map<P: WeightedPather>(
    pather: &P,
    sources: &[Point],
    max_cost: i64,
) -> Vec<PathNode> {
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut best: FxHashMap<Point, i64> = FxHashMap::default();
    let mut closed: FxHashSet<Point> = FxHashSet::default();
    let mut results = Vec::new();

    for &src in sources {
        if best.insert(src, 0).is_none() {
            open.push(NodeRef { pos: src, f: 0 });
        }
    }

    let mut nbuf = Vec::with_capacity(6);

    while let Some(current) = open.pop() {
        let cp = current.pos;
        if !closed.insert(cp) {
            continue;
        }
        let current_g = current.f;
        results.push(PathNode {
            pos: cp,
            cost: current_g,
        });

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            let tentative = current_g + i64::from(pather.cost(cp, np));
            if tentative > max_cost {
                continue;
            }
            if let Some(&g) = best.get(&np) {
                if tentative >= g {
                    continue;
                }
            }
            best.insert(np, tentative);
            open.push(NodeRef {
                pos: np,
                f: tentative,
            });
        }
    }

    results
}
