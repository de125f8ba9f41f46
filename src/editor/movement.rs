//! Cursor movement and selection gestures.

use super::Editor;
use crate::error::EditResult;
use crate::types::Direction;

impl Editor {
    /// Move the cursor one step in `dir`.
    ///
    /// If `selecting` is true (Shift held), we create/extend a selection anchored where the
    /// cursor was before the first extending move. Otherwise we clear the selection as we move.
    pub(super) fn move_cursor(&mut self, dir: Direction, selecting: bool) -> EditResult<()> {
        if selecting {
            self.cursor.begin_selection();
        } else {
            self.cursor.clear_selection();
        }
        let (dy, dx) = dir.delta();
        self.cursor.move_by(&self.doc, dy, dx)
    }

    /// Page up/down: a vertical move scaled to the frame height.
    pub(super) fn page(&mut self, dir: Direction) -> EditResult<()> {
        let step = isize::try_from(self.view.page_step()).unwrap_or(isize::MAX);
        let dy = match dir {
            Direction::Up => -step,
            Direction::Down => step,
            Direction::Left | Direction::Right => return Ok(()),
        };
        self.cursor.clear_selection();
        self.cursor.move_by(&self.doc, dy, 0)
    }

    pub(super) fn home(&mut self) {
        self.cursor.clear_selection();
        self.cursor.line_start();
    }

    pub(super) fn end(&mut self) -> EditResult<()> {
        self.cursor.clear_selection();
        self.cursor.line_end(&self.doc)
    }
}
