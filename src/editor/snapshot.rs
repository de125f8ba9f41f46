//! Render-ready view of the editor state.

use super::Editor;
use crate::text::{char_len, display_char, slice_cols};
use crate::types::StatusMsg;

/// One document line as it appears on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine {
    /// Document line index.
    pub y: usize,
    /// The on-screen part of the line, already cut at `scroll_x` and the frame width. One char
    /// per cell: tabs and other control chars are replaced.
    pub text: String,
}

/// Selected cells on one screen row: columns `[start, end)`.
///
/// A selection that continues past the end of a line also covers the cell just after the last
/// character, so selected blank lines stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRun {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

/// Everything the renderer needs for one frame, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub lines: Vec<VisibleLine>,
    pub scroll_x: usize,
    pub frame_height: usize,
    pub frame_width: usize,
    /// Cursor cell as `(row, col)`.
    pub cursor: (usize, usize),
    pub selection: Vec<SelectedRun>,
    pub status_line: String,
    pub message: Option<StatusMsg>,
}

impl Snapshot {
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.iter().any(|r| r.row == row && (r.start..r.end).contains(&col))
    }
}

impl Editor {
    pub fn snapshot(&self) -> Snapshot {
        let view = self.view;
        let rows = view.visible_rows(self.doc.line_count());

        let lines = rows
            .clone()
            .map(|y| VisibleLine {
                y,
                text: slice_cols(&self.doc.lines()[y], view.scroll_x, view.frame_width)
                    .chars()
                    .map(display_char)
                    .collect(),
            })
            .collect();

        let mut selection = Vec::new();
        if let Some((a, b)) = self.cursor.selection() {
            for y in rows.filter(|y| (a.y..=b.y).contains(y)) {
                let start = if y == a.y { a.x } else { 0 };
                let end = if y == b.y { b.x } else { char_len(&self.doc.lines()[y]) + 1 };
                if end <= view.scroll_x {
                    continue;
                }
                let start = start.max(view.scroll_x) - view.scroll_x;
                let end = (end - view.scroll_x).min(view.frame_width);
                if start < end {
                    selection.push(SelectedRun { row: y - view.scroll_y, start, end });
                }
            }
        }

        Snapshot {
            lines,
            scroll_x: view.scroll_x,
            frame_height: view.frame_height,
            frame_width: view.frame_width,
            cursor: view.to_screen(self.cursor.pos()).unwrap_or_default(),
            selection,
            status_line: self.status_line(),
            message: self.status().cloned(),
        }
    }

    fn status_line(&self) -> String {
        let name = self
            .file_path
            .as_ref()
            .map_or_else(|| "Untitled".to_string(), |p| p.display().to_string());
        let dirty = if self.dirty { "*" } else { "" };
        let p = self.cursor.pos();
        format!(
            " {dirty}{name} - {} lines | Ln {}, Col {} ",
            self.doc.line_count(),
            p.y + 1,
            p.x + 1
        )
    }
}
