//! Demo state and input handling, independent of the terminal.
//!
//! [`Demo::update`] applies one [`Action`] at a time to the current grid
//! snapshot; [`Demo::view_at`] tells the front-end what each cell shows.

use gridpath_core::{Grid, Point, Tile};
use gridpath_gen::{ConfigError, GridConfig, GridGenerator};
use gridpath_paths::{PathRange, PathResult};

pub const HELP: &str = "enter/s: search  r: restart  arrows: move start  q: quit";

/// A user request, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Restart,
    /// Move the start by (dx, dy).
    Move(i32, i32),
    Quit,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a single grid cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Open,
    Blocked,
    Start,
    Destination,
    Path,
}

pub struct Demo {
    cfg: GridConfig,
    generator: Box<dyn GridGenerator>,
    finder: PathRange,
    grid: Grid,
    path: Option<PathResult>,
    status: String,
}

impl Demo {
    /// Generate the first grid for `cfg`.
    pub fn new(cfg: GridConfig, mut generator: Box<dyn GridGenerator>) -> Result<Self, ConfigError> {
        let grid = generator.generate(&cfg)?;
        Ok(Self {
            finder: PathRange::new(grid.bounds()),
            cfg,
            generator,
            grid,
            path: None,
            status: String::from("ready"),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.cfg.start
    }

    pub fn destination(&self) -> Point {
        self.cfg.destination
    }

    /// Result of the last search, cleared by moves and restarts.
    pub fn path(&self) -> Option<&PathResult> {
        self.path.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn update(&mut self, action: Action) -> Result<Flow, ConfigError> {
        match action {
            Action::Search => self.search(),
            Action::Restart => self.restart()?,
            Action::Move(dx, dy) => self.move_start(dx, dy),
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) {
        log::info!(
            "starting A* search from {} to {}",
            self.cfg.start,
            self.cfg.destination
        );
        match self
            .finder
            .find_path(&self.grid, self.cfg.start, self.cfg.destination)
        {
            Ok(result) => {
                self.status = match result.steps() {
                    Some(n) => format!("path found: {n} steps"),
                    None => String::from("no path found"),
                };
                self.path = Some(result);
            }
            Err(e) => {
                log::warn!("search rejected: {e}");
                self.status = e.to_string();
                self.path = None;
            }
        }
    }

    /// Regenerate the grid, keeping the current start open.
    fn restart(&mut self) -> Result<(), ConfigError> {
        self.grid = self.generator.generate(&self.cfg)?;
        self.path = None;
        self.status = String::from("new grid");
        log::info!("regenerated grid:\n{}", self.grid);
        Ok(())
    }

    fn move_start(&mut self, dx: i32, dy: i32) {
        let target = self.cfg.start.shift(dx, dy);
        if !self.grid.is_traversable(target) {
            log::debug!("start move to {target} rejected");
            self.status = format!("cannot move start to {target}");
            return;
        }
        self.cfg.start = target;
        self.path = None;
        self.status = format!("start at {target}");
    }

    /// What the cell at `p` shows. Endpoints take precedence over the path.
    pub fn view_at(&self, p: Point) -> CellView {
        if p == self.cfg.start {
            return CellView::Start;
        }
        if p == self.cfg.destination {
            return CellView::Destination;
        }
        if let Some(path) = self.path().and_then(PathResult::path) {
            if path.contains(&p) {
                return CellView::Path;
            }
        }
        match self.grid.at(p) {
            Some(Tile::Traversable) => CellView::Open,
            _ => CellView::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Layout;
    use gridpath_gen::{LayoutGrid, RandomGrid};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const MAZE: &str = "\
..#.D
..#..
.....
S#...";

    fn maze_demo() -> Demo {
        let generator = LayoutGrid::new(Layout::parse(MAZE).unwrap());
        let cfg = generator.config(Point::ZERO, Point::ZERO);
        Demo::new(cfg, Box::new(generator)).unwrap()
    }

    #[test]
    fn search_colors_path_cells() {
        let mut demo = maze_demo();
        assert_eq!(demo.update(Action::Search), Ok(Flow::Continue));
        let steps = demo.path().and_then(PathResult::steps);
        assert_eq!(steps, Some(7));
        assert_eq!(demo.status(), "path found: 7 steps");

        let path: Vec<Point> = demo.path().and_then(PathResult::path).unwrap().to_vec();
        for &p in &path[..path.len() - 1] {
            assert_eq!(demo.view_at(p), CellView::Path);
        }
        assert_eq!(demo.view_at(demo.start()), CellView::Start);
        assert_eq!(demo.view_at(demo.destination()), CellView::Destination);
        assert_eq!(demo.view_at(Point::from_row_col(0, 2)), CellView::Blocked);
    }

    #[test]
    fn moves_are_rejected_on_walls_and_edges() {
        let mut demo = maze_demo();
        let start = demo.start();

        demo.update(Action::Move(1, 0)).unwrap(); // wall at (3, 1)
        assert_eq!(demo.start(), start);
        assert_eq!(demo.status(), "cannot move start to (3, 1)");

        demo.update(Action::Move(0, 1)).unwrap(); // below the grid
        assert_eq!(demo.start(), start);

        demo.update(Action::Move(-1, 0)).unwrap(); // left of the grid
        assert_eq!(demo.start(), start);

        demo.update(Action::Move(0, -1)).unwrap();
        assert_eq!(demo.start(), Point::from_row_col(2, 0));
        assert_eq!(demo.view_at(start), CellView::Open);
    }

    #[test]
    fn move_clears_previous_path() {
        let mut demo = maze_demo();
        demo.update(Action::Search).unwrap();
        assert!(demo.path().is_some());
        demo.update(Action::Move(0, -1)).unwrap();
        assert!(demo.path().is_none());
        demo.update(Action::Search).unwrap();
        assert_eq!(demo.path().and_then(PathResult::steps), Some(6));
    }

    #[test]
    fn restart_keeps_endpoints_open() {
        let cfg = GridConfig {
            blocked_probability: 0.95,
            ..GridConfig::default()
        };
        let generator = RandomGrid::new(StdRng::seed_from_u64(9));
        let mut demo = Demo::new(cfg, Box::new(generator)).unwrap();
        demo.update(Action::Search).unwrap();

        for _ in 0..20 {
            demo.update(Action::Restart).unwrap();
            assert!(demo.path().is_none());
            assert!(demo.grid().is_traversable(demo.start()));
            assert!(demo.grid().is_traversable(demo.destination()));
        }
    }

    #[test]
    fn unreachable_destination_reports_no_path() {
        let generator = LayoutGrid::new(Layout::parse("S#D").unwrap());
        let cfg = generator.config(Point::ZERO, Point::ZERO);
        let mut demo = Demo::new(cfg, Box::new(generator)).unwrap();
        demo.update(Action::Search).unwrap();
        assert_eq!(demo.path(), Some(&PathResult::NotFound));
        assert_eq!(demo.status(), "no path found");
    }

    #[test]
    fn bundled_layout_is_solvable() {
        let layout = Layout::parse(include_str!("../layouts/detour.txt")).unwrap();
        let generator = LayoutGrid::new(layout);
        let cfg = generator.config(Point::ZERO, Point::ZERO);
        assert_eq!((cfg.rows, cfg.cols), (9, 10));
        let mut demo = Demo::new(cfg, Box::new(generator)).unwrap();
        demo.update(Action::Search).unwrap();
        assert!(demo.path().is_some_and(PathResult::is_found));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut demo = maze_demo();
        assert_eq!(demo.update(Action::Quit), Ok(Flow::Quit));
    }
}
