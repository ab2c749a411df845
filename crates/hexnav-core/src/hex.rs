//! Hexagonal coordinate system.
//!
//! Cells are addressed in *odd-row offset* layout: a [`Point`] holds
//! `(column, row)` and every odd row is staggered half a cell to the right.
//! Adjacency therefore depends on row parity, and two offset tables are
//! needed. Distances are computed in cube coordinates ([`Cube`]), where the
//! hex metric is simply `max(|dq|, |dr|, |ds|)`.
//!
//! The geometry helpers ([`center`], [`vertices`], [`contains_point`],
//! [`cell_at`]) place hexagons with their corners at `30° + 60°·i`, which
//! tiles the plane exactly for this offset layout.

use std::ops::{Add, Sub};

use crate::geom::{Point, Range, Vec2};

const SQRT_3: f32 = 1.732_050_8;

// ---------------------------------------------------------------------------
// Directions and neighbors
// ---------------------------------------------------------------------------

/// One of the six neighbor directions. Y grows down, so "north" is the row
/// above.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

impl Direction {
    /// All directions in enumeration order (counter-clockwise from east).
    pub const ALL: [Direction; 6] = [
        Direction::E,
        Direction::NE,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::SE,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 3) % 6]
    }
}

// Offsets indexed by `Direction`. Even rows reach diagonally into columns
// `x-1` and `x`; odd rows into `x` and `x+1`.
const EVEN_ROW: [Point; 6] = [
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
];

const ODD_ROW: [Point; 6] = [
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 1),
];

#[inline]
fn offsets(p: Point) -> &'static [Point; 6] {
    if p.odd_row() { &ODD_ROW } else { &EVEN_ROW }
}

/// The neighbor of `p` in direction `dir`.
#[inline]
pub fn neighbor(p: Point, dir: Direction) -> Point {
    p + offsets(p)[dir.index()]
}

/// The six neighbors of `p`, in [`Direction::ALL`] order.
///
/// No bounds are applied: callers filter through the grid, which reports
/// any out-of-bounds cell as impassable.
#[inline]
pub fn neighbors(p: Point) -> [Point; 6] {
    let d = offsets(p);
    [p + d[0], p + d[1], p + d[2], p + d[3], p + d[4], p + d[5]]
}

// ---------------------------------------------------------------------------
// Cube coordinates
// ---------------------------------------------------------------------------

/// Cube coordinates `(q, r, s)` with `q + r + s == 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Cube {
    /// Build a cube coordinate from its two free axes.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Number of steps from the origin.
    #[inline]
    pub fn length(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }

    /// Number of steps between two cube coordinates.
    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        (self - other).length()
    }
}

impl Add for Cube {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for Cube {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

/// Odd-row offset to cube: `q = col - (row - (row & 1)) / 2`, `r = row`.
#[inline]
pub fn to_cube(p: Point) -> Cube {
    Cube::new(p.x - (p.y - (p.y & 1)) / 2, p.y)
}

/// Inverse of [`to_cube`].
#[inline]
pub fn from_cube(c: Cube) -> Point {
    Point::new(c.q + (c.r - (c.r & 1)) / 2, c.r)
}

/// Minimum number of steps between two cells, ignoring cost.
///
/// Used as the A* heuristic. It never overestimates a weighted path cost as
/// long as every walkable cell costs at least 1.
#[inline]
pub fn distance(a: Point, b: Point) -> i32 {
    to_cube(a).distance(to_cube(b))
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Pixel-space center of cell `p` for hexagons of circumradius `size`.
#[inline]
pub fn center(p: Point, size: f32) -> Vec2 {
    let stagger = if p.odd_row() { 0.5 } else { 0.0 };
    Vec2::new(
        size * SQRT_3 * (p.x as f32 + stagger),
        size * 1.5 * p.y as f32,
    )
}

/// The six corners of cell `p`, at `30° + 60°·i` around its center.
pub fn vertices(p: Point, size: f32) -> [Vec2; 6] {
    vertices_scaled(p, size, 1.0)
}

/// Like [`vertices`], with the corners pulled toward the center by `scale`
/// (e.g. `0.75` and `0.95` for an inner and outer highlight ring).
pub fn vertices_scaled(p: Point, size: f32, scale: f32) -> [Vec2; 6] {
    let c = center(p, size);
    let radius = size * scale;
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 + 30.0).to_radians();
        c + Vec2::new(angle.cos(), angle.sin()) * radius
    })
}

/// Whether `point` lies inside (or on the border of) the hexagon of cell `p`.
///
/// Same-side test over the six edges of the convex polygon; the winding of
/// the corners does not matter.
pub fn contains_point(p: Point, size: f32, point: Vec2) -> bool {
    let corners = vertices(p, size);
    let mut pos = false;
    let mut neg = false;
    for i in 0..6 {
        let a = corners[i];
        let b = corners[(i + 1) % 6];
        let cross = (b - a).cross(point - a);
        if cross > 0.0 {
            pos = true;
        } else if cross < 0.0 {
            neg = true;
        }
        if pos && neg {
            return false;
        }
    }
    true
}

/// The cell of `range` whose hexagon contains `point`, if any.
///
/// Only the cells around the nearest row/column estimate are tested. Points
/// on a shared border resolve to the first candidate in row-major order.
/// Non-finite points and sizes resolve to `None`.
pub fn cell_at(range: Range, size: f32, point: Vec2) -> Option<Point> {
    if !size.is_finite() || size <= 0.0 || !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    // Estimates are clamped to one cell beyond the range before the integer
    // cast, so the candidate window never leaves `i32`.
    let row = clamp_estimate(point.y / (size * 1.5), range.min.y, range.max.y);
    for y in row - 1..=row + 1 {
        let stagger = if y & 1 == 1 { 0.5 } else { 0.0 };
        let col = clamp_estimate(point.x / (size * SQRT_3) - stagger, range.min.x, range.max.x);
        for x in col - 1..=col + 1 {
            let p = Point::new(x, y);
            if range.contains(p) && contains_point(p, size, point) {
                return Some(p);
            }
        }
    }
    None
}

fn clamp_estimate(v: f32, min: i32, max: i32) -> i32 {
    v.round().clamp(min as f32 - 1.0, max as f32) as i32
}

// ---------------------------------------------------------------------------
// HexLayout
// ---------------------------------------------------------------------------

/// Geometry settings shared by renderers and pickers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLayout {
    /// Circumradius of a hexagon, in world units.
    pub size: f32,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl HexLayout {
    pub const fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn center(&self, p: Point) -> Vec2 {
        center(p, self.size)
    }

    pub fn vertices(&self, p: Point) -> [Vec2; 6] {
        vertices(p, self.size)
    }

    pub fn vertices_scaled(&self, p: Point, scale: f32) -> [Vec2; 6] {
        vertices_scaled(p, self.size, scale)
    }

    pub fn contains_point(&self, p: Point, point: Vec2) -> bool {
        contains_point(p, self.size, point)
    }

    /// Resolve a world point to a cell of `range`.
    pub fn cell_at(&self, range: Range, point: Vec2) -> Option<Point> {
        cell_at(range, self.size, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn neighbors_are_symmetric() {
        for p in Range::new(-4, -4, 9, 9) {
            for n in neighbors(p) {
                assert!(
                    neighbors(n).contains(&p),
                    "{n} is a neighbor of {p} but not the other way round"
                );
            }
        }
    }

    #[test]
    fn opposite_direction_steps_back() {
        for p in Range::new(-2, -2, 3, 3) {
            for dir in Direction::ALL {
                assert_eq!(neighbor(neighbor(p, dir), dir.opposite()), p);
            }
        }
    }

    #[test]
    fn neighbors_are_distinct_and_one_step_away() {
        let p = Point::new(4, 3);
        let ns = neighbors(p);
        for (i, a) in ns.iter().enumerate() {
            assert_eq!(distance(p, *a), 1);
            for b in &ns[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parity_tables() {
        assert_eq!(
            neighbors(Point::new(2, 2)),
            [
                Point::new(3, 2),
                Point::new(2, 1),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(1, 3),
                Point::new(2, 3),
            ]
        );
        assert_eq!(
            neighbors(Point::new(2, 1)),
            [
                Point::new(3, 1),
                Point::new(3, 0),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 2),
            ]
        );
    }

    #[test]
    fn cube_conversion() {
        assert_eq!(to_cube(Point::new(0, 0)), Cube { q: 0, r: 0, s: 0 });
        assert_eq!(to_cube(Point::new(10, 8)), Cube { q: 6, r: 8, s: -14 });
        assert_eq!(to_cube(Point::new(3, -1)), Cube { q: 4, r: -1, s: -3 });
        for p in Range::new(-5, -5, 6, 6) {
            let c = to_cube(p);
            assert_eq!(c.q + c.r + c.s, 0);
            assert_eq!(from_cube(c), p);
        }
    }

    #[test]
    fn known_distances() {
        assert_eq!(distance(Point::new(1, 1), Point::new(1, 1)), 0);
        assert_eq!(distance(Point::new(0, 0), Point::new(5, 0)), 5);
        assert_eq!(distance(Point::new(1, 1), Point::new(10, 8)), 12);
        assert_eq!(distance(Point::new(10, 8), Point::new(1, 1)), 12);
        assert_eq!(distance(Point::new(0, 0), Point::new(0, 4)), 4);
    }

    #[test]
    fn distance_matches_breadth_first_steps() {
        let area = Range::new(-10, -10, 11, 11);
        let origin = Point::new(0, 0);
        let mut steps = HashMap::from([(origin, 0)]);
        let mut queue = VecDeque::from([origin]);
        while let Some(p) = queue.pop_front() {
            let d = steps[&p];
            for n in neighbors(p) {
                if area.contains(n) && !steps.contains_key(&n) {
                    steps.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        for (p, d) in steps {
            if d <= 5 {
                assert_eq!(distance(origin, p), d, "at {p}");
            }
        }
    }

    #[test]
    fn neighbor_centers_are_evenly_spaced() {
        let size = 2.0;
        for p in [Point::new(3, 2), Point::new(3, 3)] {
            let c = center(p, size);
            for n in neighbors(p) {
                assert!(approx((center(n, size) - c).length(), SQRT_3 * size));
            }
        }
    }

    #[test]
    fn vertices_lie_on_circumcircle() {
        let p = Point::new(1, 1);
        let c = center(p, 3.0);
        assert!(approx(c.x, 3.0 * SQRT_3 * 1.5));
        assert!(approx(c.y, 4.5));
        let vs = vertices(p, 3.0);
        for v in vs {
            assert!(approx((v - c).length(), 3.0));
        }
        // First corner at 30°.
        assert!(approx(vs[0].y - c.y, 1.5));
        for v in vertices_scaled(p, 3.0, 0.75) {
            assert!(approx((v - c).length(), 2.25));
        }
    }

    #[test]
    fn contains_point_inside_and_outside() {
        let p = Point::new(2, 3);
        let c = center(p, 1.0);
        assert!(contains_point(p, 1.0, c));
        assert!(contains_point(p, 1.0, c + Vec2::new(0.5, 0.5)));
        assert!(!contains_point(p, 1.0, c + Vec2::new(1.5, 0.0)));
        assert!(!contains_point(p, 1.0, c + Vec2::new(0.0, -1.2)));
    }

    #[test]
    fn cell_at_recovers_every_center() {
        let layout = HexLayout::new(1.5);
        let rng = Range::new(0, 0, 12, 10);
        for p in rng {
            assert_eq!(layout.cell_at(rng, layout.center(p)), Some(p));
            let nudged = layout.center(p) + Vec2::new(0.4, -0.3);
            assert_eq!(layout.cell_at(rng, nudged), Some(p));
        }
    }

    #[test]
    fn cell_at_outside_grid() {
        let rng = Range::new(0, 0, 4, 4);
        assert_eq!(cell_at(rng, 1.0, Vec2::new(-5.0, -5.0)), None);
        assert_eq!(cell_at(rng, 1.0, Vec2::new(100.0, 1.0)), None);
        assert_eq!(cell_at(rng, 0.0, Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn cell_at_far_and_non_finite_points() {
        let rng = Range::new(0, 0, 4, 4);
        for point in [
            Vec2::new(0.0, -1e30),
            Vec2::new(0.0, 1e30),
            Vec2::new(-1e30, 1.0),
            Vec2::new(f32::MAX, f32::MIN),
            Vec2::new(f32::INFINITY, 0.0),
            Vec2::new(0.0, f32::NEG_INFINITY),
            Vec2::new(f32::NAN, 1.0),
        ] {
            assert_eq!(cell_at(rng, 1.0, point), None, "{point:?}");
        }
        assert_eq!(cell_at(rng, f32::NAN, Vec2::new(0.0, 0.0)), None);
        assert_eq!(cell_at(rng, f32::INFINITY, Vec2::new(0.0, 0.0)), None);
        // A tiny hexagon turns an ordinary point into a huge cell estimate.
        assert_eq!(cell_at(rng, 1e-30, Vec2::new(5.0, 5.0)), None);
        assert_eq!(cell_at(rng, 1.0, center(Point::new(3, 3), 1.0)), Some(Point::new(3, 3)));
    }
}
