//! Pathfinding on gridpath occupancy grids.
//!
//! - **A\*** shortest-path search ([`find_path`], [`PathRange::astar_path`])
//! - **BFS** shortest step counts ([`PathRange::bfs_distance`])
//!
//! [`find_path`] is the usual entry point: it checks the endpoints and runs
//! A* with 4-way unit-cost movement and a Euclidean heuristic. Callers that
//! search repeatedly can keep a [`PathRange`], which owns and reuses the
//! per-cell search records.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | edge costs for A* |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod distance;
mod error;
mod grid_pather;
mod pathrange;
mod search;
mod traits;

pub use distance::{euclidean, manhattan};
pub use error::{Endpoint, PathError};
pub use grid_pather::GridPather;
pub use pathrange::PathRange;
pub use search::{PathResult, find_path};
pub use traits::{AstarPather, Pather, WeightedPather};
