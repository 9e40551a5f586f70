//! Grids written as ASCII art.
//!
//! A layout is a block of equal-width lines:
//!
//! ```text
//! S..#
//! .#.#
//! ...D
//! ```
//!
//! `#` is blocked and `.` is traversable. `S` and `D` mark the start and
//! destination and are traversable. Leading and trailing whitespace around
//! the whole block is ignored, but not inside lines.

use std::fmt;

use crate::geom::Point;
use crate::grid::{Grid, Tile};

const START: char = 'S';
const DESTINATION: char = 'D';

/// A parsed layout: the grid plus any endpoint markers it contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Point>,
    pub destination: Option<Point>,
}

impl Layout {
    /// Parse a layout string.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }

        let lines: Vec<&str> = s.lines().collect();
        let cols = lines[0].chars().count();
        if lines.iter().any(|l| l.chars().count() != cols) {
            return Err(LayoutError::InconsistentSize(s.to_string()));
        }

        let mut grid = Grid::new(lines.len() as i32, cols as i32);
        let mut start = None;
        let mut destination = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '.' => Tile::Traversable,
                    '#' => Tile::Blocked,
                    START | DESTINATION => {
                        let slot = if ch == START {
                            &mut start
                        } else {
                            &mut destination
                        };
                        if slot.is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        Tile::Traversable
                    }
                    _ => {
                        return Err(LayoutError::InvalidChar {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                };
                grid.set(pos, tile);
            }
        }

        Ok(Self {
            grid,
            start,
            destination,
        })
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no lines.
    Empty,
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `#`, `.`, `S` or `D` was found.
    InvalidChar {
        ch: char,
        pos: Point,
        content: String,
    },
    /// `S` or `D` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent line widths:\n{s}"),
            Self::InvalidChar { ch, pos, content } => write!(
                f,
                "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}:\n{content}"
            ),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
