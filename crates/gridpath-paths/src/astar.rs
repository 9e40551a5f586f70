use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, OpenEntry};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute a shortest path from `from` to `to` using A*.
    ///
    /// The returned path excludes `from` and ends with `to`, so its length
    /// is the number of steps. `from == to` yields an empty path. Returns
    /// `None` if `to` cannot be reached or either endpoint lies outside the
    /// current range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0.0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            f: 0.0,
            idx: start_idx,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries for cells that are already final.
            if self.astar_nodes[ci].closed {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].closed = true;
            expanded += 1;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };

                let n = &mut self.astar_nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = f64::INFINITY;
                    n.parent = NO_PARENT;
                    n.closed = false;
                }
                if n.closed {
                    continue;
                }

                let tentative_g = current_g + pather.cost(current_point, np);
                if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.parent = ci;
                open.push(OpenEntry {
                    f: tentative_g + pather.estimate(np, to),
                    idx: ni,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar {from} -> {to}: no path after {expanded} expansions");
            return None;
        }

        // Follow back-pointers up to, but not including, the start.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        log::debug!(
            "astar {from} -> {to}: {} steps after {expanded} expansions",
            path.len()
        );
        Some(path)
    }
}
