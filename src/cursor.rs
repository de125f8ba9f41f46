//! Cursor position and the optional selection anchor.

use crate::document::Document;
use crate::error::EditResult;
use crate::text::clamp_offset;
use crate::types::Pos;

/// The insertion point plus an optional selection anchor.
///
/// The selection is the span between `anchor` and `pos`, whichever comes first. The anchor is
/// set by [`Cursor::begin_selection`] and cleared by [`Cursor::clear_selection`]; nothing else
/// touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    anchor: Option<Pos>,
}

impl Cursor {
    pub fn new(pos: Pos) -> Self {
        Self { pos, anchor: None }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Place the cursor without touching the selection.
    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    /// Anchor a selection at the current position, unless one is already active.
    pub fn begin_selection(&mut self) {
        if self.anchor.is_none() {
            self.anchor = Some(self.pos);
        }
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// The normalized selection span `[start, end)`, or `None` if nothing is selected.
    pub fn selection(&self) -> Option<(Pos, Pos)> {
        let a = self.anchor?;
        if a == self.pos {
            None
        } else {
            Some((a.min(self.pos), a.max(self.pos)))
        }
    }

    /// Check the cursor and anchor against the document.
    pub fn check(&self, doc: &Document) -> EditResult<()> {
        doc.check(self.pos)?;
        if let Some(a) = self.anchor {
            doc.check(a)?;
        }
        Ok(())
    }

    /// Move by `(dy, dx)`.
    ///
    /// Vertical motion first: the row is clamped into the document and, if it changed, the
    /// column is clamped to the new line's length. There is no remembered "desired column".
    ///
    /// Horizontal motion wraps at line boundaries: left from column 0 goes to the end of the
    /// previous line, right from end-of-line goes to the start of the next line. Both stop at
    /// the document's first/last position.
    pub fn move_by(&mut self, doc: &Document, dy: isize, dx: isize) -> EditResult<()> {
        doc.check(self.pos)?;
        let mut p = self.pos;

        if dy != 0 {
            let y = clamp_offset(p.y, dy, 0, doc.line_count() - 1);
            if y != p.y {
                p.y = y;
                p.x = p.x.min(doc.line_len(y)?);
            }
        }

        if dx != 0 {
            let len = doc.line_len(p.y)?;
            if dx < 0 && p.x == 0 && p.y > 0 {
                p.y -= 1;
                p.x = doc.line_len(p.y)?;
            } else if dx > 0 && p.x == len && p.y + 1 < doc.line_count() {
                p.y += 1;
                p.x = 0;
            } else {
                p.x = clamp_offset(p.x, dx, 0, len);
            }
        }

        self.pos = p;
        Ok(())
    }

    /// Jump to column 0 of the current line.
    pub fn line_start(&mut self) {
        self.pos.x = 0;
    }

    /// Jump past the last character of the current line.
    pub fn line_end(&mut self, doc: &Document) -> EditResult<()> {
        self.pos.x = doc.line_len(self.pos.y)?;
        Ok(())
    }
}
