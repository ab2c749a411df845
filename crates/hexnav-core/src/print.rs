//! Plain-text rendering of a cost grid and a path overlay.
//!
//! Odd rows are indented by one space so the stagger of the offset layout
//! is visible in a terminal.

use std::collections::HashSet;

use crate::geom::Point;
use crate::grid::HexCostGrid;

fn render(grid: &HexCostGrid, mut glyph: impl FnMut(Point, i32) -> String) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        if y & 1 == 1 {
            out.push(' ');
        }
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            out.push_str(&glyph(p, grid.get(p)));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One line per row: `#` for obstacles, the cost otherwise.
pub fn render_costs(grid: &HexCostGrid) -> String {
    render(grid, |_, cost| {
        if cost == HexCostGrid::OBSTACLE {
            "#".to_string()
        } else {
            cost.to_string()
        }
    })
}

/// Path overlay: `S` start, `E` goal, `#` obstacle, `*` path, `.` plain
/// cell, the cost for any other terrain.
pub fn render_path(grid: &HexCostGrid, start: Point, goal: Point, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    render(grid, |p, cost| {
        let glyph = if p == start {
            "S"
        } else if p == goal {
            "E"
        } else if cost == HexCostGrid::OBSTACLE {
            "#"
        } else if on_path.contains(&p) {
            "*"
        } else if cost == HexCostGrid::DEFAULT_COST {
            "."
        } else {
            return cost.to_string();
        };
        glyph.to_string()
    })
}
