//! Grid generation strategies.
//!
//! - [`RandomGrid`]: each cell is blocked independently with the configured
//!   probability.
//! - [`LayoutGrid`]: a fixed grid parsed from ASCII art, for reproducible
//!   scenarios.
//!
//! Both force the configured start and destination to be traversable.
//! Neither checks that a path between them exists.

use gridpath_core::{Grid, Layout, Point, Tile};
use rand::Rng;

use crate::config::{ConfigError, GridConfig};

/// A source of occupancy grids.
pub trait GridGenerator {
    /// Produce a grid for `cfg`. The config is validated first.
    fn generate(&mut self, cfg: &GridConfig) -> Result<Grid, ConfigError>;
}

fn open_endpoints(grid: &mut Grid, cfg: &GridConfig) {
    grid.set(cfg.start, Tile::Traversable);
    grid.set(cfg.destination, Tile::Traversable);
}

/// Random occupancy: each cell is blocked with probability
/// `cfg.blocked_probability`.
pub struct RandomGrid<R: Rng> {
    pub rng: R,
}

impl<R: Rng> RandomGrid<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GridGenerator for RandomGrid<R> {
    fn generate(&mut self, cfg: &GridConfig) -> Result<Grid, ConfigError> {
        cfg.validate()?;
        let mut grid = Grid::new(cfg.rows, cfg.cols);
        grid.fill_fn(|_| {
            let r: f64 = self.rng.random();
            if r < cfg.blocked_probability {
                Tile::Blocked
            } else {
                Tile::Traversable
            }
        });
        open_endpoints(&mut grid, cfg);
        log::debug!(
            "generated {}x{} grid with {} blocked cells",
            cfg.rows,
            cfg.cols,
            grid.count(Tile::Blocked)
        );
        Ok(grid)
    }
}

/// Always yields the same grid, parsed once from a layout.
#[derive(Debug, Clone)]
pub struct LayoutGrid {
    layout: Layout,
}

impl LayoutGrid {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// A config sized to the layout.
    ///
    /// Endpoints come from the layout's `S`/`D` markers, falling back to
    /// `fallback_start` and `fallback_destination`. The blocked probability
    /// is unused by this generator and is set to 0.
    pub fn config(&self, fallback_start: Point, fallback_destination: Point) -> GridConfig {
        GridConfig {
            rows: self.layout.grid.rows(),
            cols: self.layout.grid.cols(),
            start: self.layout.start.unwrap_or(fallback_start),
            destination: self.layout.destination.unwrap_or(fallback_destination),
            blocked_probability: 0.0,
        }
    }
}

impl GridGenerator for LayoutGrid {
    fn generate(&mut self, cfg: &GridConfig) -> Result<Grid, ConfigError> {
        cfg.validate()?;
        let found = self.layout.grid.size();
        let expected = cfg.bounds().size();
        if found != expected {
            return Err(ConfigError::LayoutSize { expected, found });
        }
        let mut grid = self.layout.grid.clone();
        open_endpoints(&mut grid, cfg);
        Ok(grid)
    }
}

/// Generate a random `rows × cols` grid with `start` and `destination`
/// forced open.
pub fn generate_grid<R: Rng>(
    rows: i32,
    cols: i32,
    start: Point,
    destination: Point,
    blocked_probability: f64,
    rng: &mut R,
) -> Result<Grid, ConfigError> {
    let cfg = GridConfig {
        rows,
        cols,
        start,
        destination,
        blocked_probability,
    };
    RandomGrid::new(rng).generate(&cfg)
}
