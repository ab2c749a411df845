//! Per-cell traversal costs over a rectangular hex map.
//!
//! [`HexCostGrid`] is the single source of truth for terrain weights. It
//! owns its storage outright: searches borrow it immutably, editors borrow
//! it mutably, and the borrow checker keeps the two apart.
//!
//! A cost of `0` ([`HexCostGrid::OBSTACLE`]) is the only impassable marker.
//! Every cell outside the grid reads as an obstacle, so neighbor
//! enumeration never needs its own bounds checks.

use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised when building a [`HexCostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// The cost buffer does not hold `width * height` entries.
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "grid expects {expected} costs, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `width × height` array of integer traversal costs, row-major.
///
/// Costs are integers, so every walkable cell costs at least 1. The A*
/// heuristic relies on this: a step-count distance never overestimates the
/// weighted cost of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexCostGrid {
    width: i32,
    height: i32,
    costs: Vec<i32>,
}

impl HexCostGrid {
    /// Impassable cell.
    pub const OBSTACLE: i32 = 0;
    /// Cost of a plain cell, and of every cell of a new grid.
    pub const DEFAULT_COST: i32 = 1;

    /// Create a grid with every cell at [`DEFAULT_COST`](Self::DEFAULT_COST).
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = Range::new(0, 0, width, height).len();
        Ok(Self {
            width,
            height,
            costs: vec![Self::DEFAULT_COST; cells],
        })
    }

    /// Build a grid from row-major costs. Negative costs are stored as
    /// obstacles.
    pub fn from_costs(width: i32, height: i32, costs: Vec<i32>) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        if costs.len() != grid.costs.len() {
            return Err(GridError::LengthMismatch {
                expected: grid.costs.len(),
                found: costs.len(),
            });
        }
        grid.costs = costs.into_iter().map(|c| c.max(Self::OBSTACLE)).collect();
        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Cost of entering `p`. Out-of-bounds cells are obstacles.
    #[inline]
    pub fn get(&self, p: Point) -> i32 {
        match self.index(p) {
            Some(i) => self.costs[i],
            None => Self::OBSTACLE,
        }
    }

    /// Overwrite the cost of `p`. Does nothing if out of bounds.
    ///
    /// Negative costs are stored as [`OBSTACLE`](Self::OBSTACLE).
    pub fn set(&mut self, p: Point, cost: i32) {
        let Some(i) = self.index(p) else {
            log::trace!("ignoring cost write outside the grid at {p}");
            return;
        };
        self.costs[i] = cost.max(Self::OBSTACLE);
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.get(p) > Self::OBSTACLE
    }

    /// Set every cell to `cost`.
    pub fn fill(&mut self, cost: i32) {
        let cost = cost.max(Self::OBSTACLE);
        self.costs.iter_mut().for_each(|c| *c = cost);
    }

    /// Iterate over `(Point, cost)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds().iter().zip(self.costs.iter().copied())
    }

    /// Row-major rows of costs, for renderers.
    pub fn rows(&self) -> std::slice::Chunks<'_, i32> {
        self.costs.chunks(self.width as usize)
    }

    /// Cheapest walkable cost, or `None` if every cell is an obstacle.
    pub fn min_walkable_cost(&self) -> Option<i32> {
        self.costs.iter().copied().filter(|&c| c > Self::OBSTACLE).min()
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.costs.iter().filter(|&&c| c > Self::OBSTACLE).count()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexCostGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("HexCostGrid", 3)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("costs", &self.costs)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexCostGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            width: i32,
            height: i32,
            costs: Vec<i32>,
        }
        let raw = Raw::deserialize(deserializer)?;
        HexCostGrid::from_costs(raw.width, raw.height, raw.costs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_default_cost() {
        let g = HexCostGrid::new(12, 10).unwrap();
        assert_eq!(g.width(), 12);
        assert_eq!(g.height(), 10);
        assert_eq!(g.walkable_count(), 120);
        assert!(g.iter().all(|(_, c)| c == HexCostGrid::DEFAULT_COST));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            HexCostGrid::new(0, 5),
            Err(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(HexCostGrid::new(5, -1).is_err());
        let msg = HexCostGrid::new(-2, 3).unwrap_err().to_string();
        assert!(msg.contains("-2x3"));
    }

    #[test]
    fn set_and_get() {
        let mut g = HexCostGrid::new(4, 4).unwrap();
        g.set(Point::new(2, 3), 3);
        assert_eq!(g.get(Point::new(2, 3)), 3);
        assert_eq!(g.get(Point::new(0, 0)), 1);
        g.set(Point::new(2, 3), HexCostGrid::OBSTACLE);
        assert!(!g.is_walkable(Point::new(2, 3)));
    }

    #[test]
    fn cells_are_stored_row_major() {
        let (w, h) = (7, 5);
        let mut g = HexCostGrid::from_costs(w, h, (1..=w * h).collect()).unwrap();
        for p in g.bounds() {
            assert_eq!(g.get(p), p.y * w + p.x + 1, "{p}");
        }
        let last = Point::new(w - 1, h - 1);
        g.set(last, 99);
        assert_eq!(g.get(last), 99);
        assert_eq!(g.rows().last(), Some(&[29, 30, 31, 32, 33, 34, 99][..]));
    }

    #[test]
    fn out_of_bounds_is_obstacle_and_writes_are_ignored() {
        let mut g = HexCostGrid::new(3, 3).unwrap();
        for p in [Point::new(-1, 0), Point::new(0, -1), Point::new(3, 0), Point::new(0, 3)] {
            assert_eq!(g.get(p), HexCostGrid::OBSTACLE);
            assert!(!g.is_walkable(p));
            g.set(p, 5);
            assert_eq!(g.get(p), HexCostGrid::OBSTACLE);
        }
        assert!(g.iter().all(|(_, c)| c == 1));
    }

    #[test]
    fn negative_costs_become_obstacles() {
        let mut g = HexCostGrid::new(3, 3).unwrap();
        g.set(Point::new(1, 1), -1);
        assert_eq!(g.get(Point::new(1, 1)), HexCostGrid::OBSTACLE);
        let g = HexCostGrid::from_costs(2, 1, vec![-1, 2]).unwrap();
        assert_eq!(g.get(Point::new(0, 0)), 0);
        assert_eq!(g.get(Point::new(1, 0)), 2);
    }

    #[test]
    fn from_costs_checks_length() {
        assert_eq!(
            HexCostGrid::from_costs(2, 2, vec![1, 1, 1]),
            Err(GridError::LengthMismatch { expected: 4, found: 3 })
        );
    }

    #[test]
    fn rows_and_summaries() {
        let mut g = HexCostGrid::new(3, 2).unwrap();
        g.set(Point::new(1, 0), 0);
        g.set(Point::new(2, 1), 3);
        let rows: Vec<&[i32]> = g.rows().collect();
        assert_eq!(rows, vec![&[1, 0, 1][..], &[1, 1, 3][..]]);
        assert_eq!(g.min_walkable_cost(), Some(1));
        assert_eq!(g.walkable_count(), 5);
        g.fill(0);
        assert_eq!(g.min_walkable_cost(), None);
        assert_eq!(g.walkable_count(), 0);
    }
}
