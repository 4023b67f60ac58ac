//! Shortest path across a seeded random map, with the full cost table.
//!
//! Run: cargo run --bin random [seed]

use std::io;

use costpath::{compute_costs, resolve_path};
use costpath_demos::{cost_table, describe_failure, draw_path, format_path};
use costpath_grid::{CostGrid, Point, WallRule};
use rand::SeedableRng;

const COLS: u32 = 20;
const ROWS: u32 = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut grid = CostGrid::random_walls(COLS, ROWS, &WallRule::default(), &mut rng);

    let start = Point::new(0, 0);
    let goal = Point::new(COLS as i32 - 1, ROWS as i32 - 1);
    // Endpoints are always open.
    grid.insert(start, 1);
    grid.insert(goal, 1);

    let costs = compute_costs(&grid, start, 0);
    println!("seed {seed}: {} of {} cells reachable\n", costs.len(), grid.len());
    println!("{}", cost_table(&costs));

    match resolve_path(&grid, &costs, &goal) {
        Ok(path) => {
            println!("{}\n", format_path(&path));
            draw_path(&mut io::stdout(), &grid, &path)?;
        }
        Err(err) => println!("{}", describe_failure(&err)),
    }
    Ok(())
}
