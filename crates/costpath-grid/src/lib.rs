//! Grid helpers for `costpath`.
//!
//! - [`Point`] with a 4-way [`Adjacent`](costpath::Adjacent) impl
//! - [`manhattan`] distance
//! - [`CostGrid`], a text-described weighted grid usable directly as a
//!   [`CostModel`](costpath::CostModel), plus ASCII rendering of grids,
//!   cost maps and paths

mod distance;
mod grid;
mod point;

pub use distance::manhattan;
pub use grid::{CostGrid, PATH, WALL, WallRule};
pub use point::Point;
