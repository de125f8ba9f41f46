//! The closed set of editing intents the engine understands.

use crate::types::Direction;
use std::path::PathBuf;

/// One discrete request from the input layer.
///
/// Key decoding lives elsewhere; by the time something reaches the editor it is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    /// Only `Up` and `Down` page; `Left`/`Right` are ignored.
    Page(Direction),
    Home,
    End,
    Newline,
    Tab,
    Backspace,
    Delete,
    Insert(char),
    SelectExtend(Direction),
    SelectCancel,
    Copy,
    Paste,
    Save,
    SaveAs(PathBuf),
    Open(PathBuf),
    New,
    Quit,
    /// New terminal size, in cells.
    Resize { height: usize, width: usize },
}

impl Intent {
    /// Whether the intent may change the document.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Newline | Self::Tab | Self::Backspace | Self::Delete | Self::Insert(_) | Self::Paste
        )
    }
}
