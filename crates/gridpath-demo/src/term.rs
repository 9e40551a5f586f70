//! Crossterm front-end: raw-mode setup, key decoding and drawing.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::Point;

use crate::app::{Action, CellView, Demo, HELP};

/// Terminal columns used per grid cell, so cells look roughly square.
const CELL_WIDTH: u16 = 2;

/// Grid rows drawn at most, leaving screen lines for the status and help.
const MAX_DRAWN_ROWS: u16 = u16::MAX - 3;

const COL_OPEN: Color = Color::Rgb { r: 235, g: 235, b: 235 };
const COL_BLOCKED: Color = Color::Rgb { r: 20, g: 20, b: 20 };
const COL_START: Color = Color::Rgb { r: 40, g: 170, b: 60 };
const COL_DEST: Color = Color::Rgb { r: 210, g: 40, b: 40 };
const COL_PATH: Color = Color::Rgb { r: 40, g: 90, b: 220 };
const COL_TEXT: Color = Color::Rgb { r: 200, g: 200, b: 200 };

fn cell_color(view: CellView) -> Color {
    match view {
        CellView::Open => COL_OPEN,
        CellView::Blocked => COL_BLOCKED,
        CellView::Start => COL_START,
        CellView::Destination => COL_DEST,
        CellView::Path => COL_PATH,
    }
}

/// Number of grid rows that fit on a crossterm screen.
fn drawn_rows(rows: i32) -> u16 {
    u16::try_from(rows.max(0)).map_or(MAX_DRAWN_ROWS, |r| r.min(MAX_DRAWN_ROWS))
}

/// Maps a key press to a demo [`Action`].
pub fn to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('s') => Some(Action::Search),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::Move(0, -1)),
        KeyCode::Down => Some(Action::Move(0, 1)),
        KeyCode::Left => Some(Action::Move(-1, 0)),
        KeyCode::Right => Some(Action::Move(1, 0)),
        _ => None,
    }
}

/// Owns the terminal while the demo runs and restores it on drop.
pub struct Terminal<W: Write = Stdout> {
    out: W,
}

impl Terminal {
    /// Enter raw mode and the alternate screen on stdout.
    pub fn init() -> io::Result<Self> {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    /// Enter raw mode and the alternate screen on `out`.
    ///
    /// The guard exists before anything is written, so a failed setup
    /// still leaves raw mode when it is dropped.
    pub fn with_output(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut term = Self { out };
        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(term)
    }

    /// Block until the next key that maps to an action.
    ///
    /// Returns `None` on a resize so the caller can redraw.
    pub fn next_action(&mut self) -> io::Result<Option<Action>> {
        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => {
                    if let Some(action) = to_action(code, modifiers) {
                        return Ok(Some(action));
                    }
                }
                Event::Resize(..) => return Ok(None),
                _ => {}
            }
        }
    }

    /// Draw the grid, then a status line and the key help below it.
    pub fn draw(&mut self, demo: &Demo) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;

        let grid = demo.grid();
        let shown = drawn_rows(grid.rows());
        for y in 0..shown {
            queue!(self.out, cursor::MoveTo(0, y))?;
            for x in 0..grid.cols() {
                let color = cell_color(demo.view_at(Point::new(x, i32::from(y))));
                queue!(
                    self.out,
                    SetBackgroundColor(color),
                    Print(" ".repeat(CELL_WIDTH as usize))
                )?;
            }
        }

        let below = shown;
        queue!(
            self.out,
            ResetColor,
            SetForegroundColor(COL_TEXT),
            cursor::MoveTo(0, below + 1),
            Print(format!(
                "{} -> {}  {}",
                demo.start(),
                demo.destination(),
                demo.status()
            )),
            cursor::MoveTo(0, below + 2),
            Print(HELP),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_move_one_cell() {
        let none = KeyModifiers::NONE;
        assert_eq!(to_action(KeyCode::Up, none), Some(Action::Move(0, -1)));
        assert_eq!(to_action(KeyCode::Down, none), Some(Action::Move(0, 1)));
        assert_eq!(to_action(KeyCode::Left, none), Some(Action::Move(-1, 0)));
        assert_eq!(to_action(KeyCode::Right, none), Some(Action::Move(1, 0)));
    }

    #[test]
    fn command_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(to_action(KeyCode::Enter, none), Some(Action::Search));
        assert_eq!(to_action(KeyCode::Char('s'), none), Some(Action::Search));
        assert_eq!(to_action(KeyCode::Char('r'), none), Some(Action::Restart));
        assert_eq!(to_action(KeyCode::Esc, none), Some(Action::Quit));
        assert_eq!(
            to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(to_action(KeyCode::Char('c'), none), None);
        assert_eq!(to_action(KeyCode::Tab, none), None);
    }

    #[test]
    fn oversized_grids_are_clipped() {
        assert_eq!(drawn_rows(9), 9);
        assert_eq!(drawn_rows(0), 0);
        assert_eq!(drawn_rows(-4), 0);
        assert_eq!(drawn_rows(70_000), MAX_DRAWN_ROWS);
        assert_eq!(drawn_rows(i32::MAX), MAX_DRAWN_ROWS);
        assert!(MAX_DRAWN_ROWS.checked_add(2).is_some());
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_setup_leaves_raw_mode() {
        assert!(Terminal::with_output(ClosedOutput).is_err());
        assert!(!terminal::is_raw_mode_enabled().unwrap_or(false));
    }

    #[test]
    fn every_view_has_a_distinct_color() {
        let views = [
            CellView::Open,
            CellView::Blocked,
            CellView::Start,
            CellView::Destination,
            CellView::Path,
        ];
        for (i, a) in views.iter().enumerate() {
            for b in &views[i + 1..] {
                assert_ne!(cell_color(*a), cell_color(*b));
            }
        }
    }
}
