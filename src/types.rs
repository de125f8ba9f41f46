//! Common types used throughout the editor.

/// A position in the document.
///
/// - `y`: line index (0-based)
/// - `x`: **char index** within that line (0-based). This is *not* a byte index.
///
/// Ordering is lexicographic over `(y, x)`, which is what selection spans rely on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

impl Pos {
    pub const ORIGIN: Self = Self { y: 0, x: 0 };

    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

/// One of the four arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(delta_y, delta_x)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Short-lived message shown on the bottom line.
///
/// `ticks_left` counts renders, not wall-clock time: each rendered frame consumes one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMsg {
    pub text: String,
    pub ticks_left: u32,
}

/// What the caller should do after an intent has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}
