//! Shared scenario model for the console demos.
//!
//! A [`Scenario`] describes a map (size, terrain patches, rocks) and one
//! query. The default is the 12x10 reference map: a sand band, a water
//! column and two rocks, pathed from (1,1) to (10,8). Scenarios can also be
//! read from JSON; missing fields fall back to the defaults.

use std::path::Path;

use hexnav_core::{GridError, HexCostGrid, HexLayout, Point, Range};
use hexnav_paths::{HexPathfinder, SearchStats};
use serde::{Deserialize, Serialize};

/// A rectangular patch of terrain with a uniform cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub name: String,
    pub area: Range,
    pub cost: i32,
}

impl Terrain {
    pub fn new(name: &str, area: Range, cost: i32) -> Self {
        Self {
            name: name.to_string(),
            area,
            cost,
        }
    }
}

/// A map plus one path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    /// Applied in order; later patches overwrite earlier ones.
    pub terrain: Vec<Terrain>,
    pub obstacles: Vec<Point>,
    pub start: Point,
    pub goal: Point,
    pub layout: HexLayout,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            width: 12,
            height: 10,
            terrain: vec![
                Terrain::new("sand", Range::new(3, 4, 8, 5), 2),
                Terrain::new("water", Range::new(6, 2, 7, 6), 3),
            ],
            obstacles: vec![Point::new(4, 3), Point::new(7, 5)],
            start: Point::new(1, 1),
            goal: Point::new(10, 8),
            layout: HexLayout::default(),
        }
    }
}

/// Outcome of running a scenario.
#[derive(Debug, Clone)]
pub struct Report {
    pub grid: HexCostGrid,
    pub path: Vec<Point>,
    pub cost: i64,
    pub stats: SearchStats,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build the cost grid described by the scenario.
    pub fn build_grid(&self) -> Result<HexCostGrid, GridError> {
        let mut grid = HexCostGrid::new(self.width, self.height)?;
        for patch in &self.terrain {
            log::debug!("{} (cost {}) over {}", patch.name, patch.cost, patch.area);
            for p in patch.area {
                grid.set(p, patch.cost);
            }
        }
        for &p in &self.obstacles {
            grid.set(p, HexCostGrid::OBSTACLE);
        }
        Ok(grid)
    }

    /// Build the grid and answer the path query.
    pub fn run(&self) -> Result<Report, GridError> {
        let grid = self.build_grid()?;
        let pf = HexPathfinder::new();
        let (path, stats) = pf.find_path_with_stats(&grid, self.start, self.goal);
        let cost = pf.path_cost(&grid, &path);
        Ok(Report {
            grid,
            path,
            cost,
            stats,
        })
    }
}
