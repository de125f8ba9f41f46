//! The scroll window: which part of the document is on screen.

use crate::types::Pos;
use std::ops::Range;

/// Terminal rows reserved below the text: the status line and the message line.
pub const RESERVED_ROWS: usize = 2;

/// Terminal columns kept free on the right (the cursor never sits in the last column).
pub const RESERVED_COLS: usize = 1;

/// The visible rectangle of the document.
///
/// `scroll_y`/`scroll_x` are the document coordinates of the top-left cell; `frame_height` and
/// `frame_width` are the rows/columns available for text. Both frame dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_y: usize,
    pub scroll_x: usize,
    pub frame_height: usize,
    pub frame_width: usize,
}

impl Viewport {
    pub fn new(frame_height: usize, frame_width: usize) -> Self {
        Self {
            scroll_y: 0,
            scroll_x: 0,
            frame_height: frame_height.max(1),
            frame_width: frame_width.max(1),
        }
    }

    /// A viewport for a terminal of `height` x `width` cells.
    pub fn for_terminal(height: usize, width: usize) -> Self {
        let mut v = Self::new(1, 1);
        v.resize_terminal(height, width);
        v
    }

    /// Adopt new terminal dimensions. The scroll offsets are left alone; call
    /// [`Viewport::scroll_to`] afterwards.
    pub fn resize_terminal(&mut self, height: usize, width: usize) {
        self.frame_height = height.saturating_sub(RESERVED_ROWS).max(1);
        self.frame_width = width.saturating_sub(RESERVED_COLS).max(1);
    }

    pub fn reset(&mut self) {
        self.scroll_y = 0;
        self.scroll_x = 0;
    }

    /// Scroll just enough to bring `cursor` into the frame. Does nothing if it is already
    /// visible.
    pub fn scroll_to(&mut self, cursor: Pos) {
        self.scroll_y = reveal(self.scroll_y, self.frame_height, cursor.y);
        self.scroll_x = reveal(self.scroll_x, self.frame_width, cursor.x);
    }

    /// Rows moved by one page: the terminal height less the status and message lines, which
    /// is the frame height.
    pub fn page_step(&self) -> usize {
        self.frame_height
    }

    /// Screen cell of `p`, if it is inside the frame.
    pub fn to_screen(&self, p: Pos) -> Option<(usize, usize)> {
        let row = p.y.checked_sub(self.scroll_y)?;
        let col = p.x.checked_sub(self.scroll_x)?;
        (row < self.frame_height && col < self.frame_width).then_some((row, col))
    }

    /// Document rows on screen for a document of `line_count` lines.
    pub fn visible_rows(&self, line_count: usize) -> Range<usize> {
        let start = self.scroll_y.min(line_count);
        start..(self.scroll_y + self.frame_height).min(line_count)
    }
}

/// Minimal adjustment of a 1-D scroll offset so that `target` falls in `[offset, offset+extent)`.
fn reveal(offset: usize, extent: usize, target: usize) -> usize {
    if target < offset {
        target
    } else if target >= offset + extent {
        target + 1 - extent
    } else {
        offset
    }
}
