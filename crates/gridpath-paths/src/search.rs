//! Grid-level search entry points.

use gridpath_core::{Grid, Point};

use crate::PathRange;
use crate::error::{Endpoint, PathError};
use crate::grid_pather::GridPather;

/// Outcome of a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// Cells from start to destination, excluding the start and including
    /// the destination. Empty when start and destination coincide.
    Found(Vec<Point>),
    /// The destination is unreachable from the start.
    NotFound,
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Number of steps in the path, if one was found.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path().map(<[Point]>::len)
    }
}

impl From<Option<Vec<Point>>> for PathResult {
    fn from(path: Option<Vec<Point>>) -> Self {
        path.map_or(Self::NotFound, Self::Found)
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, pos: Point) -> Result<(), PathError> {
    match grid.at(pos) {
        None => Err(PathError::OutOfBounds { endpoint, pos }),
        Some(tile) if !tile.is_traversable() => Err(PathError::Blocked { endpoint, pos }),
        Some(_) => Ok(()),
    }
}

impl PathRange {
    /// Find a shortest 4-way path on `grid` from `start` to `destination`.
    ///
    /// The range is switched to the grid's bounds if needed. Both endpoints
    /// must be in bounds and traversable.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        destination: Point,
    ) -> Result<PathResult, PathError> {
        check_endpoint(grid, Endpoint::Start, start)?;
        check_endpoint(grid, Endpoint::Destination, destination)?;

        if self.range() != grid.bounds() {
            self.set_range(grid.bounds());
        }

        let result = PathResult::from(self.astar_path(&GridPather::new(grid), start, destination));
        match &result {
            PathResult::Found(path) => log::debug!("path traced: {path:?}"),
            PathResult::NotFound => log::debug!("no path from {start} to {destination}"),
        }
        Ok(result)
    }
}

/// Find a shortest 4-way path on `grid` from `start` to `destination`.
///
/// Convenience wrapper allocating a fresh [`PathRange`]; keep a
/// `PathRange` around instead when searching the same grid repeatedly.
pub fn find_path(grid: &Grid, start: Point, destination: Point) -> Result<PathResult, PathError> {
    PathRange::new(grid.bounds()).find_path(grid, start, destination)
}
