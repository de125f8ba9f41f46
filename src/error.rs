//! Engine errors.
//!
//! Everything here is an internal invariant violation: a caller handed the engine a position
//! the cursor bookkeeping should never have produced. User-facing I/O failures are not errors at
//! this level; they are reported through the status message.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// A row or column outside the document reached an edit operation.
    #[error("position {row}:{col} is outside the document")]
    OutOfRange { row: usize, col: usize },

    /// Text containing a line break was handed to a single-line insert.
    #[error("line break in single-line insert at {row}:{col}")]
    LineBreak { row: usize, col: usize },
}

pub type EditResult<T> = Result<T, EditError>;
