//! **hexnav-core** — coordinates, geometry and cost storage for hexagonal
//! grid navigation.
//!
//! - [`geom`]: [`Point`] cell addresses, [`Range`] rectangles and [`Vec2`]
//!   plane points.
//! - [`hex`]: the odd-row offset coordinate system (neighbors, cube
//!   coordinates, step distance) and hexagon geometry for renderers.
//! - [`grid`]: [`HexCostGrid`], the per-cell traversal costs.
//! - [`print`]: plain-text dumps of a grid and a path.

pub mod geom;
pub mod grid;
pub mod hex;
pub mod print;

pub use geom::{Point, Range, Vec2};
pub use grid::{GridError, HexCostGrid};
pub use hex::{Cube, Direction, HexLayout};
