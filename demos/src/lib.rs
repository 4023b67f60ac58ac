//! Shared helpers for the demo binaries: terminal rendering of grids
//! with a highlighted path.

use std::io::{self, Write};

use costpath::{CostMap, NotReachable, PathFinder};
use costpath_grid::{CostGrid, Point, WALL};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

const COL_WALL: Color = Color::Rgb {
    r: 100,
    g: 100,
    b: 130,
};
const COL_PATH: Color = Color::Rgb {
    r: 50,
    g: 180,
    b: 255,
};
const COL_START: Color = Color::Rgb {
    r: 255,
    g: 220,
    b: 80,
};

/// Map used by the `sample` binary: `1` is an open cell, `■` a wall.
pub const SAMPLE_MAP: &str = "
    1  ■  ■  1  1  1  ■  1
    1  1  1  1  ■  1  1  1
    ■  ■  1  ■  ■  ■  1  ■
    ■  1  ■  1  1  1  1  1
    ■  1  ■  1  ■  ■  ■  1
    ■  1  ■  1  ■  1  1  1
    ■  1  1  1  ■  1  ■  1
";

/// Write `grid` to `out`, one row per line, with the cells of `path`
/// coloured and the path's first cell marked as the start.
pub fn draw_path(out: &mut impl Write, grid: &CostGrid, path: &[Point]) -> io::Result<()> {
    let size = grid.size();
    for y in 0..size.y {
        for x in 0..size.x {
            let p = Point::new(x, y);
            let (color, text) = match grid.get(p) {
                None => (COL_WALL, format!("{WALL:>2} ")),
                Some(_) if path.first() == Some(&p) => (COL_START, format!("{:>2} ", 'S')),
                Some(cost) if path.contains(&p) => (COL_PATH, format!("{cost:>2} ")),
                Some(cost) => (Color::Reset, format!("{cost:>2} ")),
            };
            queue!(out, SetForegroundColor(color), Print(text))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Print `path` as `(y, x)` pairs.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(|p| format!("({}, {})", p.y, p.x))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summarise a failed query for the terminal.
pub fn describe_failure(err: &NotReachable<'_, Point, u32>) -> String {
    match &err.start {
        Some(start) => format!(
            "{} -> {} is not reachable ({} cells explored)",
            start,
            err.goal,
            err.costs.len()
        ),
        None => format!("{} is not reachable (nothing explored)", err.goal),
    }
}

/// Search once from `start` over `grid`.
pub fn finder(grid: &CostGrid, start: Point) -> PathFinder<Point, &CostGrid> {
    PathFinder::new(grid, start, 0)
}

/// The accumulated costs of `costs` rendered as a grid.
pub fn cost_table(costs: &CostMap<Point, u32>) -> String {
    CostGrid::from_costs(costs).render()
}
