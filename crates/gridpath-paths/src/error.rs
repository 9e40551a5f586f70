use std::fmt;

use gridpath_core::Point;

/// Which end of a search a [`PathError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// A search was requested with invalid endpoints.
///
/// An unreachable destination is not an error; see
/// [`PathResult::NotFound`](crate::PathResult::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Point },
    /// The endpoint is a blocked cell.
    Blocked { endpoint: Endpoint, pos: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "{endpoint} {pos} is outside the grid")
            }
            Self::Blocked { endpoint, pos } => write!(f, "{endpoint} {pos} is blocked"),
        }
    }
}

impl std::error::Error for PathError {}
