//! Generic single-source shortest paths.
//!
//! Given a start state, a cost-accumulation rule, a strict ordering on
//! costs and a neighbour enumeration, this crate computes the minimal
//! cost of every reachable state and reconstructs optimal paths from the
//! recorded predecessors. States are any `Eq + Hash + Clone` keys; costs
//! are opaque values ordered by a caller-supplied `less`.
//!
//! - **Search** ([`compute_costs`]) runs lazy-deletion Dijkstra and
//!   returns a [`CostMap`].
//! - **Paths** ([`resolve_path`], [`PathFinder`]) walk predecessor links
//!   back from a goal, failing with [`NotReachable`].
//! - **Configuration** is either a type implementing [`CostModel`] or an
//!   [`Options`] value built from closures.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Edges`] | candidate neighbours |
//! | [`CostModel`] : [`Edges`] | cost accumulation, ordering, visit cap |
//! | [`Adjacent`] | neighbours described by the state type itself |
//!
//! Costs must never decrease along an accumulation step under `less`;
//! this is not checked.

mod costmap;
mod dijkstra;
mod error;
mod frontier;
mod options;
mod path;
mod traits;

pub use costmap::{CostMap, Record};
pub use dijkstra::compute_costs;
pub use error::NotReachable;
pub use frontier::{Entry, Frontier};
pub use options::Options;
pub use path::{PathFinder, resolve_path};
pub use traits::{Adjacent, CostModel, Edges};
