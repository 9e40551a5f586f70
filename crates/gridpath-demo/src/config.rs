//! Command-line configuration.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gridpath_core::{Layout, Point};
use gridpath_gen::config::{DEFAULT_BLOCKED_PROBABILITY, DEFAULT_COLS, DEFAULT_ROWS};
use gridpath_gen::{GridConfig, GridGenerator, LayoutGrid, RandomGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Visualize A* pathfinding on a random occupancy grid.
#[derive(Parser, Debug)]
#[command(name = "gridpath-demo", version)]
pub struct Args {
    /// Grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, conflicts_with = "layout")]
    pub rows: i32,

    /// Grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS, conflicts_with = "layout")]
    pub cols: i32,

    /// Start cell as ROW,COL [default: bottom-left corner].
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Point>,

    /// Destination cell as ROW,COL [default: top-right corner].
    #[arg(long, value_parser = parse_cell)]
    pub dest: Option<Point>,

    /// Chance that a cell is blocked.
    #[arg(long, default_value_t = DEFAULT_BLOCKED_PROBABILITY, conflicts_with = "layout")]
    pub blocked: f64,

    /// Seed for grid generation. A random seed is picked and logged if unset.
    #[arg(long, conflicts_with = "layout")]
    pub seed: Option<u64>,

    /// Use a fixed ASCII layout (`#` wall, `.` open, `S`/`D` endpoints)
    /// instead of random generation. The file sets the grid size.
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Write log records to this file. Logging is off otherwise.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Parse a `ROW,COL` pair.
fn parse_cell(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Point::from_row_col(row, col))
}

fn bottom_left(rows: i32) -> Point {
    Point::from_row_col(rows - 1, 0)
}

fn top_right(cols: i32) -> Point {
    Point::from_row_col(0, cols - 1)
}

impl Args {
    /// Config for random generation.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            cols: self.cols,
            start: self.start.unwrap_or_else(|| bottom_left(self.rows)),
            destination: self.dest.unwrap_or_else(|| top_right(self.cols)),
            blocked_probability: self.blocked,
        }
    }

    /// Build the grid config and generator selected by the arguments.
    ///
    /// With `--layout`, the grid size comes from the file and its `S`/`D`
    /// markers take precedence over `--start`/`--dest`.
    pub fn generator(&self) -> Result<(GridConfig, Box<dyn GridGenerator>), Box<dyn Error>> {
        if let Some(path) = &self.layout {
            let text = fs::read_to_string(path)?;
            let generator = LayoutGrid::new(Layout::parse(&text)?);
            let grid = &generator.layout().grid;
            let cfg = generator.config(
                self.start.unwrap_or_else(|| bottom_left(grid.rows())),
                self.dest.unwrap_or_else(|| top_right(grid.cols())),
            );
            log::info!("using layout {}", path.display());
            return Ok((cfg, Box::new(generator)));
        }

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("grid seed {seed}");
        let generator = RandomGrid::new(StdRng::seed_from_u64(seed));
        Ok((self.grid_config(), Box::new(generator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_grid_config_default() {
        let args = Args::try_parse_from(["gridpath-demo"]).unwrap();
        assert_eq!(args.grid_config(), GridConfig::default());
        assert!(args.layout.is_none());
    }

    #[test]
    fn corners_follow_custom_size() {
        let args = Args::try_parse_from(["gridpath-demo", "--rows", "4", "--cols", "6"]).unwrap();
        let cfg = args.grid_config();
        assert_eq!(cfg.start, Point::from_row_col(3, 0));
        assert_eq!(cfg.destination, Point::from_row_col(0, 5));
    }

    #[test]
    fn parses_endpoints_and_probability() {
        let args = Args::try_parse_from([
            "gridpath-demo",
            "--start",
            "2, 3",
            "--dest",
            "0,0",
            "--blocked",
            "0.5",
            "--seed",
            "11",
        ])
        .unwrap();
        let cfg = args.grid_config();
        assert_eq!(cfg.start, Point::from_row_col(2, 3));
        assert_eq!(cfg.destination, Point::ZERO);
        assert_eq!(cfg.blocked_probability, 0.5);
        assert_eq!(args.seed, Some(11));
    }

    #[test]
    fn rejects_malformed_cells() {
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
        assert!(parse_cell("1,").is_err());
        assert!(Args::try_parse_from(["gridpath-demo", "--start", "x"]).is_err());
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let args = Args::try_parse_from(["gridpath-demo", "--seed", "5"]).unwrap();
        let (cfg, mut a) = args.generator().unwrap();
        let (_, mut b) = args.generator().unwrap();
        assert_eq!(a.generate(&cfg).unwrap(), b.generate(&cfg).unwrap());
    }

    #[test]
    fn layout_conflicts_with_random_generation_flags() {
        for flag in [["--rows", "4"], ["--cols", "4"], ["--blocked", "0.1"], ["--seed", "3"]] {
            let mut argv = vec!["gridpath-demo", "--layout", "maze.txt"];
            argv.extend(flag);
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{flag:?}");
        }

        let args = Args::try_parse_from([
            "gridpath-demo",
            "--layout",
            "maze.txt",
            "--start",
            "1,1",
        ])
        .unwrap();
        assert_eq!(args.start, Some(Point::new(1, 1)));
        assert_eq!(args.rows, DEFAULT_ROWS);
    }

    #[test]
    fn missing_layout_file_is_an_error() {
        let args = Args::try_parse_from([
            "gridpath-demo",
            "--layout",
            "/nonexistent/gridpath/layout.txt",
        ])
        .unwrap();
        assert!(args.generator().is_err());
    }
}
