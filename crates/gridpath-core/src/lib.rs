//! **gridpath-core**: geometry and occupancy grids for the gridpath demo.
//!
//! This crate provides the types shared by the generator, the pathfinder
//! and the terminal front-end: cell coordinates, rectangles, the
//! [`Grid`] of [`Tile`]s, and an ASCII [`Layout`] parser.

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::{Point, Range};
pub use grid::{Grid, Tile};
pub use layout::{Layout, LayoutError};
