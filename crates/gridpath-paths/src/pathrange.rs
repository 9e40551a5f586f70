use std::cmp::Ordering;

use gridpath_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal per-cell search record for A*
// ---------------------------------------------------------------------------

/// Back-pointer sentinel meaning "no predecessor yet".
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry: an estimated total cost `f` tagged with the cell index.
///
/// Ordered by `f` only, reversed so `BinaryHeap` (max-heap) pops the
/// smallest `f` first. Entries are never updated in place; a cell may have
/// several entries and the ones popped after it is closed are stale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) f: f64,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search state for one grid rectangle.
///
/// `PathRange` owns the per-cell A* records and the BFS visited flags so that
/// repeated queries reuse their buffers. A* records are reset lazily with a
/// generation counter: a record whose generation is not the current one
/// reads as `g = +inf`, not closed, no parent.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // BFS visited flags
    pub(crate) bfs_seen: Vec<bool>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            bfs_seen: vec![false; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new range fits within the existing buffers they are kept and
    /// only the generation counter is bumped. Otherwise they are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.astar_nodes.len() {
            self.astar_generation = self.astar_generation.wrapping_add(1);
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.bfs_seen.clear();
        self.bfs_seen.resize(new_len, false);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
