//! Editor: the session state and the intent dispatcher.

mod edit;
mod file_ops;
mod movement;
mod snapshot;

pub use snapshot::{SelectedRun, Snapshot, VisibleLine};

use crate::clipboard::ClipboardBackend;
use crate::config::Config;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::EditResult;
use crate::intent::Intent;
use crate::types::{Outcome, Pos, StatusMsg};
use crate::viewport::Viewport;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything one editing session owns: the document, cursor and selection, the scroll window,
/// the file it came from, and the transient status message.
///
/// All changes go through [`Editor::apply`], which checks the cursor against the document on
/// the way in and on the way out.
pub struct Editor {
    doc: Document,
    cursor: Cursor,
    view: Viewport,
    /// Path we'll save to.
    file_path: Option<PathBuf>,
    /// Unsaved changes.
    dirty: bool,
    status: Option<StatusMsg>,
    config: Config,
    clipboard: Box<dyn ClipboardBackend>,
    /// When the last "unsaved changes" quit warning was shown.
    last_quit_hint: Option<Instant>,
}

impl Editor {
    /// A fresh, untitled editor for a terminal of `height` x `width` cells.
    pub fn new(config: Config, clipboard: Box<dyn ClipboardBackend>, height: usize, width: usize) -> Self {
        Self {
            doc: Document::new(),
            cursor: Cursor::default(),
            view: Viewport::for_terminal(height, width),
            file_path: None,
            dirty: false,
            status: None,
            config,
            clipboard,
            last_quit_hint: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn cursor(&self) -> Pos {
        self.cursor.pos()
    }

    pub fn selection(&self) -> Option<(Pos, Pos)> {
        self.cursor.selection()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current message, if it still has ticks left.
    pub fn status(&self) -> Option<&StatusMsg> {
        self.status.as_ref().filter(|s| s.ticks_left > 0)
    }

    /// Show a message on the bottom line for the configured number of frames.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(StatusMsg { text: msg.into(), ticks_left: self.config.status_ticks });
    }

    /// Count down the status message by one rendered frame.
    pub fn tick(&mut self) {
        if let Some(st) = &mut self.status {
            st.ticks_left = st.ticks_left.saturating_sub(1);
            if st.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    /// The cursor (and anchor) must point into the document.
    pub fn check_invariants(&self) -> EditResult<()> {
        self.cursor.check(&self.doc)
    }

    /// Apply one intent and bring the cursor back into view.
    ///
    /// An `Err` here means the editor's own bookkeeping is broken; user-facing failures (I/O,
    /// clipboard) are reported through the status message instead.
    pub fn apply(&mut self, intent: Intent) -> EditResult<Outcome> {
        self.check_invariants()?;
        tracing::debug!(?intent, cursor = ?self.cursor.pos(), "apply");

        if intent.is_edit() {
            self.cursor.clear_selection();
        }

        match intent {
            Intent::Move(dir) => self.move_cursor(dir, false)?,
            Intent::SelectExtend(dir) => self.move_cursor(dir, true)?,
            Intent::Page(dir) => self.page(dir)?,
            Intent::Home => self.home(),
            Intent::End => self.end()?,
            Intent::SelectCancel => self.cursor.clear_selection(),
            Intent::Newline => self.newline()?,
            Intent::Tab => self.insert_text(&self.config.tab())?,
            Intent::Insert(ch) => self.insert_char(ch)?,
            Intent::Backspace => self.backspace()?,
            Intent::Delete => self.delete()?,
            Intent::Copy => self.copy()?,
            Intent::Paste => self.paste()?,
            Intent::Save => self.save(None),
            Intent::SaveAs(path) => self.save(Some(path)),
            Intent::Open(path) => self.open(path),
            Intent::New => self.new_file(),
            Intent::Quit => {
                if self.try_quit() {
                    return Ok(Outcome::Quit);
                }
            }
            Intent::Resize { height, width } => self.view.resize_terminal(height, width),
        }

        self.view.scroll_to(self.cursor.pos());
        self.check_invariants()?;
        Ok(Outcome::Continue)
    }

    /// Record an unsaved change. A pending quit warning no longer covers the new edit.
    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.last_quit_hint = None;
    }

    /// Quit right away if everything is saved; otherwise warn and quit only if asked again
    /// within the confirmation window.
    fn try_quit(&mut self) -> bool {
        if !self.dirty {
            return true;
        }
        let now = Instant::now();
        if let Some(t) = self.last_quit_hint {
            if now.duration_since(t) <= self.config.quit_confirm() {
                return true;
            }
        }
        self.last_quit_hint = Some(now);
        self.set_status("Unsaved changes! Press Ctrl+Q again to quit.");
        false
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::editor;
    use super::*;
    use crate::error::EditError;
    use crate::types::Direction;

    #[test]
    fn new_editor_is_empty_and_untitled() {
        let ed = editor(&[], Pos::ORIGIN);
        assert_eq!(ed.document().lines(), [""]);
        assert_eq!(ed.cursor(), Pos::ORIGIN);
        assert_eq!(ed.file_path(), None);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn status_counts_down_per_tick() {
        let mut ed = editor(&["a"], Pos::ORIGIN);
        ed.config.status_ticks = 2;
        ed.set_status("hello");
        assert_eq!(ed.status().map(|s| s.text.as_str()), Some("hello"));
        ed.tick();
        assert_eq!(ed.status().map(|s| s.ticks_left), Some(1));
        ed.tick();
        assert!(ed.status().is_none());
        ed.tick();
        assert!(ed.status().is_none());
    }

    #[test]
    fn apply_refuses_a_corrupt_cursor() {
        let mut ed = editor(&["ab"], Pos::ORIGIN);
        ed.cursor = Cursor::new(Pos::new(3, 0));
        let err = ed.apply(Intent::Insert('x')).unwrap_err();
        assert_eq!(err, EditError::OutOfRange { row: 3, col: 0 });
        assert_eq!(ed.document().lines(), ["ab"]);
    }

    #[test]
    fn edits_clear_the_selection() {
        let mut ed = editor(&["abc"], Pos::ORIGIN);
        ed.apply(Intent::SelectExtend(Direction::Right)).unwrap();
        assert!(ed.selection().is_some());
        ed.apply(Intent::Insert('x')).unwrap();
        assert!(ed.selection().is_none());
        assert_eq!(ed.document().lines(), ["axbc"]);
    }

    #[test]
    fn quit_when_clean() {
        let mut ed = editor(&["a"], Pos::ORIGIN);
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn quit_when_dirty_needs_confirmation() {
        let mut ed = editor(&["a"], Pos::ORIGIN);
        ed.apply(Intent::Insert('b')).unwrap();
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Continue);
        assert!(ed.status().unwrap().text.starts_with("Unsaved changes"));
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn edit_after_quit_warning_needs_new_confirmation() {
        let mut ed = editor(&["a"], Pos::ORIGIN);
        ed.apply(Intent::Insert('b')).unwrap();
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Continue);
        ed.apply(Intent::Insert('c')).unwrap();
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Continue);
        assert!(ed.status().unwrap().text.starts_with("Unsaved changes"));
        assert_eq!(ed.apply(Intent::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn resize_shrinks_frame_and_keeps_cursor_visible() {
        let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut ed = editor(&refs, Pos::new(30, 0));
        ed.apply(Intent::Resize { height: 12, width: 40 }).unwrap();
        assert_eq!(ed.viewport().frame_height, 10);
        assert_eq!(ed.viewport().frame_width, 39);
        assert_eq!(ed.viewport().to_screen(ed.cursor()), Some((9, 0)));
    }

    #[test]
    fn line_count_never_drops_below_one() {
        let mut ed = editor(&["x"], Pos::new(0, 1));
        let script = [
            Intent::Backspace,
            Intent::Backspace,
            Intent::Delete,
            Intent::Newline,
            Intent::Backspace,
            Intent::Backspace,
            Intent::Delete,
        ];
        for intent in script {
            ed.apply(intent).unwrap();
            assert!(ed.document().line_count() >= 1);
        }
        assert_eq!(ed.document().lines(), [""]);
        assert_eq!(ed.cursor(), Pos::ORIGIN);
    }
}
