//! Weighted grids described as text.
//!
//! A grid maps cells to the cost of entering them. Cells missing from
//! the map are walls. The text form is whitespace-separated rows:
//! integers are open cells, any other token (conventionally `■`) is a
//! wall.
//!
//! ```text
//! 1  ■  1
//! 1  1  3
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use costpath::{CostMap, CostModel, Edges, Options};
use rand::Rng;

use crate::Point;

/// Token used for walls when rendering.
pub const WALL: char = '■';

/// Token used for path cells in [`CostGrid::render_path`].
pub const PATH: char = '*';

/// How [`CostGrid::random_walls`] picks walls.
#[derive(Debug, Clone)]
pub struct WallRule {
    /// Each cell is a wall with probability `1 / one_in`. Zero means no
    /// walls.
    pub one_in: u32,
    /// Entry cost of open cells.
    pub cost: u32,
}

impl Default for WallRule {
    fn default() -> Self {
        Self { one_in: 7, cost: 1 }
    }
}

/// A sparse weighted grid with 4-way movement.
///
/// As a [`CostModel`], moving into a cell adds that cell's entry cost and
/// moving into a wall is not admissible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostGrid {
    cells: HashMap<Point, u32>,
}

impl CostGrid {
    /// An empty grid (all walls).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text form. Row `n` of the trimmed text is `y = n`,
    /// token `m` of a row is `x = m`.
    pub fn parse(text: &str) -> Self {
        let mut cells = HashMap::new();
        for (y, line) in text.trim().lines().enumerate() {
            for (x, token) in line.split_whitespace().enumerate() {
                if let Ok(cost) = token.parse::<u32>() {
                    cells.insert(Point::new(x as i32, y as i32), cost);
                }
            }
        }
        Self { cells }
    }

    /// A `cols` x `rows` grid without walls.
    pub fn flat(cols: u32, rows: u32, cost: u32) -> Self {
        let mut cells = HashMap::with_capacity((cols * rows) as usize);
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                cells.insert(Point::new(x, y), cost);
            }
        }
        Self { cells }
    }

    /// A `cols` x `rows` grid with walls scattered according to `rule`.
    pub fn random_walls(cols: u32, rows: u32, rule: &WallRule, rng: &mut impl Rng) -> Self {
        if rule.one_in == 0 {
            return Self::flat(cols, rows, rule.cost);
        }
        let mut cells = HashMap::new();
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                if rng.random_range(0..rule.one_in) == 0 {
                    continue;
                }
                cells.insert(Point::new(x, y), rule.cost);
            }
        }
        Self { cells }
    }

    /// The accumulated costs of a search, laid out as a grid.
    pub fn from_costs(costs: &CostMap<Point, u32>) -> Self {
        let cells = costs.iter().map(|r| (r.state, r.cost)).collect();
        Self { cells }
    }

    /// Entry cost of `p`, or `None` for a wall.
    pub fn get(&self, p: Point) -> Option<u32> {
        self.cells.get(&p).copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains_key(&p)
    }

    /// Open `p` with the given entry cost.
    pub fn insert(&mut self, p: Point, cost: u32) -> Option<u32> {
        self.cells.insert(p, cost)
    }

    /// Turn `p` into a wall.
    pub fn remove(&mut self, p: Point) -> Option<u32> {
        self.cells.remove(&p)
    }

    /// Number of open cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One past the largest open `x` and `y`: the number of columns and
    /// rows a rendering starting at the origin covers.
    pub fn size(&self) -> Point {
        self.bounds()
            .map_or(Point::ZERO, |(_, max)| Point::new(max.x + 1, max.y + 1))
    }

    /// Inclusive bounding box of the open cells, widened to include the
    /// origin. `None` for an empty grid.
    fn bounds(&self) -> Option<(Point, Point)> {
        let mut it = self.cells.keys();
        let first = *it.next()?;
        let (mut min, mut max) = (first, first);
        for p in it {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        min = Point::new(min.x.min(0), min.y.min(0));
        Some((min, max))
    }

    /// Render the grid, one row per line, walls as [`WALL`].
    pub fn render(&self) -> String {
        self.render_with(|_| false)
    }

    /// Render the grid with the cells of `path` drawn as [`PATH`].
    pub fn render_path(&self, path: &[Point]) -> String {
        self.render_with(|p| path.contains(&p))
    }

    fn render_with(&self, marked: impl Fn(Point) -> bool) -> String {
        let mut out = String::new();
        let Some((min, max)) = self.bounds() else {
            return out;
        };
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let p = Point::new(x, y);
                // Writing to a String cannot fail.
                let _ = match self.get(p) {
                    _ if marked(p) => write!(out, "{PATH:>2} "),
                    Some(cost) => write!(out, "{cost:>2} "),
                    None => write!(out, "{WALL:>2} "),
                };
            }
            out.push('\n');
        }
        out
    }

    /// Closure-based search configuration over this grid, equivalent to
    /// using the grid itself as the [`CostModel`].
    pub fn options(&self) -> Options<'_, Point, u32> {
        Options::<Point, u32>::new(
            |agg, from, to| self.accumulate(agg, from, to),
            |a, b| a < b,
            |p, buf| self.edges(p, buf),
        )
    }
}

impl Edges<Point> for CostGrid {
    fn edges(&self, from: &Point, buf: &mut Vec<Point>) {
        buf.extend(
            from.neighbors_4()
                .into_iter()
                .filter(|p| self.cells.contains_key(p)),
        );
    }
}

impl CostModel<Point> for CostGrid {
    type Cost = u32;

    fn accumulate(&self, agg: &u32, _from: &Point, to: &Point) -> Option<u32> {
        self.get(*to).map(|cost| agg + cost)
    }

    fn less(&self, a: &u32, b: &u32) -> bool {
        a < b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SMALL: &str = "
        1  ■  1
        1  1  3
    ";

    #[test]
    fn parse_reads_rows_and_walls() {
        let g = CostGrid::parse(SMALL);
        assert_eq!(g.len(), 5);
        assert_eq!(g.get(Point::new(0, 0)), Some(1));
        assert_eq!(g.get(Point::new(1, 0)), None);
        assert_eq!(g.get(Point::new(2, 1)), Some(3));
    }

    #[test]
    fn render_round_trips_through_parse() {
        let g = CostGrid::parse(SMALL);
        let text = g.render();
        assert_eq!(text, " 1  ■  1 \n 1  1  3 \n");
        assert_eq!(CostGrid::parse(&text), g);
    }

    #[test]
    fn render_path_marks_cells() {
        let g = CostGrid::parse(SMALL);
        let text = g.render_path(&[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(text, " *  ■  1 \n *  1  3 \n");
    }

    #[test]
    fn flat_grid_has_no_walls() {
        let g = CostGrid::flat(10, 8, 1);
        assert_eq!(g.len(), 80);
        assert!(g.contains(Point::new(9, 7)));
        assert!(!g.contains(Point::new(10, 7)));
    }

    #[test]
    fn edges_stay_inside() {
        let g = CostGrid::parse(SMALL);
        let mut buf = Vec::new();
        g.edges(&Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn accumulate_adds_entry_cost() {
        let g = CostGrid::parse(SMALL);
        assert_eq!(g.accumulate(&4, &Point::new(1, 1), &Point::new(2, 1)), Some(7));
        assert_eq!(g.accumulate(&4, &Point::new(0, 0), &Point::new(1, 0)), None);
    }

    #[test]
    fn random_walls_is_seeded() {
        let rule = WallRule::default();
        let a = CostGrid::random_walls(20, 20, &rule, &mut rand::rngs::StdRng::seed_from_u64(7));
        let b = CostGrid::random_walls(20, 20, &rule, &mut rand::rngs::StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.len() < 400);
        assert!(a.len() > 200);
    }

    #[test]
    fn random_walls_without_walls() {
        let rule = WallRule { one_in: 0, cost: 2 };
        let g = CostGrid::random_walls(4, 4, &rule, &mut rand::rng());
        assert_eq!(g, CostGrid::flat(4, 4, 2));
    }

    #[test]
    fn empty_grid_renders_empty() {
        assert_eq!(CostGrid::new().render(), "");
        assert_eq!(CostGrid::new().size(), Point::ZERO);
    }

    #[test]
    fn size_covers_open_cells() {
        assert_eq!(CostGrid::parse(SMALL).size(), Point::new(3, 2));
        assert_eq!(CostGrid::flat(10, 8, 1).size(), Point::new(10, 8));
    }
}
