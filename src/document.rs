//! The document: stores lines of text and provides the low-level editing operations.

use crate::error::{EditError, EditResult};
use crate::text::{byte_index, char_len, normalize_line_breaks};
use crate::types::Pos;

/// The document: a list of lines (each line is a `String`).
///
/// There is always at least one line; an empty document is a single empty line. Every
/// operation validates the position it is given and returns [`EditError::OutOfRange`] rather
/// than clamping, so a cursor bookkeeping bug surfaces instead of silently editing the wrong
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document with a single empty line.
    pub fn new() -> Self {
        Self { lines: vec![String::new()] }
    }

    /// Build a document from file content.
    ///
    /// Lines are split on `\n`, `\r\n` or a lone `\r`; a trailing terminator does not add an
    /// empty line.
    pub fn from_text(s: &str) -> Self {
        let mut lines: Vec<String> = normalize_line_breaks(s).lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Build a document from explicit lines (an empty list becomes one empty line).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Serialize for saving: lines joined with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    /// Length of line `y` in columns.
    pub fn line_len(&self, y: usize) -> EditResult<usize> {
        self.lines
            .get(y)
            .map(|l| char_len(l))
            .ok_or(EditError::OutOfRange { row: y, col: 0 })
    }

    /// Total number of chars across all lines (line breaks not counted).
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|l| char_len(l)).sum()
    }

    /// Check that `p` is a legal cursor position: a real line, and a column no further than
    /// its end.
    pub fn check(&self, p: Pos) -> EditResult<()> {
        self.byte_at(p).map(|_| ())
    }

    /// Byte offset of `p` within its line.
    fn byte_at(&self, p: Pos) -> EditResult<usize> {
        let line = self.lines.get(p.y).ok_or(EditError::OutOfRange { row: p.y, col: p.x })?;
        byte_index(line, p.x).ok_or(EditError::OutOfRange { row: p.y, col: p.x })
    }

    /// The columns `[from, to)` of line `y`; `to == None` means "to the end of the line".
    pub fn slice(&self, y: usize, from: usize, to: Option<usize>) -> EditResult<&str> {
        let line = self.lines.get(y).ok_or(EditError::OutOfRange { row: y, col: from })?;
        let b0 = byte_index(line, from).ok_or(EditError::OutOfRange { row: y, col: from })?;
        let b1 = match to {
            Some(to) if to < from => return Err(EditError::OutOfRange { row: y, col: to }),
            Some(to) => byte_index(line, to).ok_or(EditError::OutOfRange { row: y, col: to })?,
            None => line.len(),
        };
        Ok(&line[b0..b1])
    }

    /// Splice `text` into line `p.y` at column `p.x`, returning the position just after it.
    ///
    /// `text` must not contain line breaks; multi-line text goes through paste reflow.
    pub fn insert_str(&mut self, p: Pos, text: &str) -> EditResult<Pos> {
        if text.contains(['\n', '\r']) {
            return Err(EditError::LineBreak { row: p.y, col: p.x });
        }
        let bi = self.byte_at(p)?;
        self.lines[p.y].insert_str(bi, text);
        Ok(Pos { y: p.y, x: p.x + char_len(text) })
    }

    /// Append `text` to the end of line `y`.
    pub fn push_str(&mut self, y: usize, text: &str) -> EditResult<()> {
        let line = self.lines.get_mut(y).ok_or(EditError::OutOfRange { row: y, col: 0 })?;
        line.push_str(text);
        Ok(())
    }

    /// Truncate line `p.y` at column `p.x` and return the removed tail.
    pub fn split_off(&mut self, p: Pos) -> EditResult<String> {
        let bi = self.byte_at(p)?;
        Ok(self.lines[p.y].split_off(bi))
    }

    /// Insert a whole new line so that it becomes line `y`.
    pub fn insert_line(&mut self, y: usize, line: String) -> EditResult<()> {
        if y > self.lines.len() {
            return Err(EditError::OutOfRange { row: y, col: 0 });
        }
        self.lines.insert(y, line);
        Ok(())
    }

    /// Enter: split the current line in two at the cursor.
    pub fn split_line(&mut self, p: Pos) -> EditResult<Pos> {
        let rest = self.split_off(p)?;
        self.lines.insert(p.y + 1, rest);
        Ok(Pos { y: p.y + 1, x: 0 })
    }

    /// Backspace behavior:
    /// - If `x > 0`, delete the previous character.
    /// - If at start of line and not the first line, join onto the previous line; the cursor
    ///   lands where the previous line used to end.
    /// - At the very start of the document, do nothing.
    pub fn delete_backward(&mut self, p: Pos) -> EditResult<Pos> {
        self.check(p)?;
        if p.x > 0 {
            let bi = self.byte_at(Pos { y: p.y, x: p.x - 1 })?;
            self.lines[p.y].remove(bi);
            Ok(Pos { y: p.y, x: p.x - 1 })
        } else if p.y > 0 {
            let prev_len = char_len(&self.lines[p.y - 1]);
            let cur = self.lines.remove(p.y);
            self.lines[p.y - 1].push_str(&cur);
            Ok(Pos { y: p.y - 1, x: prev_len })
        } else {
            Ok(p)
        }
    }

    /// Delete-key behavior:
    /// - If within the line, delete the character at the cursor.
    /// - If at end of line and there is a next line, pull the next line up.
    /// - At the very end of the document, do nothing.
    ///
    /// The cursor never moves.
    pub fn delete_forward(&mut self, p: Pos) -> EditResult<Pos> {
        let bi = self.byte_at(p)?;
        if bi < self.lines[p.y].len() {
            self.lines[p.y].remove(bi);
        } else if p.y + 1 < self.lines.len() {
            let next = self.lines.remove(p.y + 1);
            self.lines[p.y].push_str(&next);
        }
        Ok(p)
    }
}
