//! Occupancy grid generation for the gridpath demo.
//!
//! Generation is a pluggable [`GridGenerator`] strategy: [`RandomGrid`] for
//! the demo and [`LayoutGrid`] for fixed, hand-drawn grids. [`GridConfig`]
//! carries the dimensions, endpoints and blocked probability.

pub mod config;
pub mod generator;

pub use config::{ConfigError, GridConfig};
pub use generator::{GridGenerator, LayoutGrid, RandomGrid, generate_grid};
