//! Grid generation parameters.

use std::fmt;

use gridpath_core::{Point, Range};

/// Default grid height.
pub const DEFAULT_ROWS: i32 = 9;
/// Default grid width.
pub const DEFAULT_COLS: i32 = 10;
/// Default chance that a cell is blocked.
pub const DEFAULT_BLOCKED_PROBABILITY: f64 = 0.3;

/// Parameters shared by every [`GridGenerator`](crate::GridGenerator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub destination: Point,
    /// Chance in `[0, 1]` that a random cell is blocked.
    pub blocked_probability: f64,
}

impl Default for GridConfig {
    /// 9×10 grid from the bottom-left to the top-right corner.
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: Point::from_row_col(DEFAULT_ROWS - 1, 0),
            destination: Point::from_row_col(0, DEFAULT_COLS - 1),
            blocked_probability: DEFAULT_BLOCKED_PROBABILITY,
        }
    }
}

impl GridConfig {
    /// The rectangle the configured grid will cover.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    /// Check dimensions, endpoints and probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let bounds = self.bounds();
        if !bounds.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds(self.start));
        }
        if !bounds.contains(self.destination) {
            return Err(ConfigError::DestinationOutOfBounds(self.destination));
        }
        let p = self.blocked_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        Ok(())
    }
}

/// Errors produced by [`GridConfig::validate`] and the generators.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Rows or columns below 1.
    EmptyGrid { rows: i32, cols: i32 },
    StartOutOfBounds(Point),
    DestinationOutOfBounds(Point),
    /// Blocked probability not a finite value in `[0, 1]`.
    InvalidProbability(f64),
    /// A fixed layout does not have the configured dimensions.
    LayoutSize { expected: Point, found: Point },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the grid"),
            Self::DestinationOutOfBounds(p) => write!(f, "destination {p} is outside the grid"),
            Self::InvalidProbability(p) => {
                write!(f, "blocked probability must be within [0, 1], got {p}")
            }
            Self::LayoutSize { expected, found } => write!(
                f,
                "layout is {}x{} but the grid is configured as {}x{}",
                found.y, found.x, expected.y, expected.x
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_constants() {
        let cfg = GridConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (9, 10));
        assert_eq!(cfg.start, Point::from_row_col(8, 0));
        assert_eq!(cfg.destination, Point::from_row_col(0, 9));
        assert_eq!(cfg.blocked_probability, 0.3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_dimensions() {
        let cfg = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid { rows: 0, cols: 10 }));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let cfg = GridConfig {
            start: Point::from_row_col(9, 0),
            ..GridConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::StartOutOfBounds(Point::from_row_col(9, 0)))
        );

        let cfg = GridConfig {
            destination: Point::new(-1, 0),
            ..GridConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DestinationOutOfBounds(_))
        ));
    }

    #[test]
    fn rejects_bad_probabilities() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let cfg = GridConfig {
                blocked_probability: p,
                ..GridConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidProbability(_))),
                "{p} accepted"
            );
        }
        for p in [0.0, 1.0] {
            let cfg = GridConfig {
                blocked_probability: p,
                ..GridConfig::default()
            };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn error_messages_use_row_col() {
        let err = ConfigError::LayoutSize {
            expected: Point::new(10, 9),
            found: Point::new(4, 3),
        };
        assert_eq!(
            err.to_string(),
            "layout is 3x4 but the grid is configured as 9x10"
        );
    }
}
