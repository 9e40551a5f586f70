use gridpath_core::{Grid, Point};

use crate::distance::euclidean;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// 4-way, unit-cost pather over an occupancy [`Grid`].
///
/// Neighbors are the in-bounds traversable cells one cardinal step away.
/// The A* estimate is the Euclidean distance, which never exceeds the
/// Manhattan step count and so is admissible for 4-way movement.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.grid.is_traversable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> f64 {
        1.0
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}
