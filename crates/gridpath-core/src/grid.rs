//! Occupancy grid for pathfinding.
//!
//! [`Tile`] is the state of a single cell and [`Grid`] is a row-major
//! `rows × cols` array of tiles. Coordinates follow [`Point`]: `x` is the
//! column and `y` the row.

use std::fmt;

use crate::geom::{Point, Range};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Traversable,
    Blocked,
}

impl Tile {
    /// Whether a path may pass through this tile.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Tile::Traversable)
    }

    /// ASCII glyph used by [`Grid`]'s `Display` and the layout parser.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Traversable => '.',
            Tile::Blocked => '#',
        }
    }
}

/// A fixed-size 2D grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new `rows × cols` grid with every cell traversable.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Tile::Traversable)
    }

    /// Create a new `rows × cols` grid with every cell set to `tile`.
    pub fn filled(rows: i32, cols: i32, tile: Tile) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            tiles: vec![tile; (rows as usize) * (cols as usize)],
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns the size as a Point (width = cols, height = rows).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.cols, self.rows)
    }

    /// The range covered by the grid, `[(0,0), (cols,rows))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and traversable.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_traversable)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Fill the grid using a function of each point, in row-major order.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Tile) {
        for (p, slot) in self.bounds().iter().zip(self.tiles.iter_mut()) {
            *slot = f(p);
        }
    }

    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }
}

/// Renders one line per row using [`Tile::glyph`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.cols {
                let glyph = self.at(Point::new(x, y)).map_or(' ', Tile::glyph);
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            rows: i32,
            cols: i32,
            tiles: Vec<Tile>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let expected = (raw.rows.max(0) as usize) * (raw.cols.max(0) as usize);
        if raw.tiles.len() != expected {
            return Err(serde::de::Error::custom(format!(
                "grid {}x{} needs {expected} tiles, got {}",
                raw.rows,
                raw.cols,
                raw.tiles.len()
            )));
        }
        Ok(Grid {
            rows: raw.rows.max(0),
            cols: raw.cols.max(0),
            tiles: raw.tiles,
        })
    }
}
