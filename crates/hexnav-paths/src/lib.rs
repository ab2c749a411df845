//! Weighted pathfinding over hexagonal cost grids.
//!
//! - **A\*** minimum-cost paths ([`HexPathfinder::find_path`], or the
//!   generic [`astar_path`] for any [`AstarPather`])
//! - **Dijkstra** multi-source cost maps ([`dijkstra_map`],
//!   [`HexPathfinder::reachable`])
//!
//! Searches keep no state between calls. [`HexCostGrid`](hexnav_core::HexCostGrid)
//! implements the pather traits directly: entering a cell costs its weight,
//! and the heuristic is the hex step distance.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod node;
mod pathfinder;
mod traits;

pub use astar::{SearchStats, astar_path, astar_path_with_stats};
pub use dijkstra::dijkstra_map;
pub use node::PathNode;
pub use pathfinder::HexPathfinder;
pub use traits::{AstarPather, Pather, WeightedPather};
