use std::collections::VecDeque;

use gridpath_core::Point;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Number of unit steps on a shortest route from `from` to `to`, found
    /// by breadth-first search over `pather`.
    ///
    /// `from == to` gives `Some(0)`. `None` means either point is outside
    /// the range or `to` is unreachable.
    pub fn bfs_distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<usize> {
        let start = self.idx(from)?;
        let goal = self.idx(to)?;

        self.bfs_seen.fill(false);
        self.bfs_seen[start] = true;
        let mut frontier = VecDeque::from([(start, 0usize)]);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some((ci, steps)) = frontier.pop_front() {
            if ci == goal {
                found = Some(steps);
                break;
            }
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !self.bfs_seen[ni] {
                    self.bfs_seen[ni] = true;
                    frontier.push_back((ni, steps + 1));
                }
            }
        }

        self.nbuf = nbuf;
        log::trace!("bfs {from} -> {to}: {found:?}");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPather;
    use gridpath_core::{Grid, Layout, Range};

    #[test]
    fn distance_around_wall() {
        let layout = Layout::parse(
            "\
S.#.
..#.
....",
        )
        .unwrap();
        let grid = &layout.grid;
        let pather = GridPather::new(grid);
        let mut pr = PathRange::new(grid.bounds());
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::new(3, 0)), Some(7));
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::new(1, 2)), Some(3));
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::ZERO), Some(0));
    }

    #[test]
    fn walls_and_outside_points_are_unreachable() {
        let grid = Layout::parse("S#.").unwrap().grid;
        let pather = GridPather::new(&grid);
        let mut pr = PathRange::new(grid.bounds());
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::new(2, 0)), None);
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::new(1, 0)), None);
        assert_eq!(pr.bfs_distance(&pather, Point::ZERO, Point::new(5, 5)), None);
        assert_eq!(pr.bfs_distance(&pather, Point::new(-1, 0), Point::ZERO), None);
    }

    #[test]
    fn reused_after_shrinking_range() {
        let mut pr = PathRange::new(Range::new(0, 0, 8, 8));
        let big = Grid::new(8, 8);
        assert_eq!(
            pr.bfs_distance(&GridPather::new(&big), Point::ZERO, Point::new(7, 7)),
            Some(14)
        );

        let small = Grid::new(2, 3);
        pr.set_range(small.bounds());
        assert_eq!(
            pr.bfs_distance(&GridPather::new(&small), Point::new(2, 1), Point::ZERO),
            Some(3)
        );
    }
}
