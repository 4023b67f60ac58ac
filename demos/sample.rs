//! Shortest path across a small fixed map.
//!
//! Run: cargo run --bin sample

use std::io;

use costpath_demos::{SAMPLE_MAP, describe_failure, draw_path, finder, format_path};
use costpath_grid::{CostGrid, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = CostGrid::parse(SAMPLE_MAP);
    let start = Point::new(0, 0);
    let goal = Point::new(5, 5);

    let paths = finder(&grid, start);
    match paths.find(&goal) {
        Ok(path) => {
            println!("{}", format_path(&path));
            draw_path(&mut io::stdout(), &grid, &path)?;
        }
        Err(err) => println!("{}", describe_failure(&err)),
    }
    Ok(())
}
