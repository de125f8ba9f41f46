//! File operations: open, save, new.
//!
//! None of these can fail from the caller's point of view. Problems are reported on the status
//! line and the in-memory document stays the source of truth.

use super::Editor;
use crate::cursor::Cursor;
use crate::document::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

impl Editor {
    /// Load `path` into the editor, replacing the current document.
    ///
    /// A missing file opens as an empty document that will be created on save. Any other read
    /// error also leaves an empty document behind, with the error on the status line.
    pub fn open(&mut self, path: PathBuf) {
        let doc = match fs::read_to_string(&path) {
            Ok(s) => {
                let doc = Document::from_text(&s);
                tracing::info!(path = %path.display(), lines = doc.line_count(), "opened");
                self.set_status(format!("Opened: {}", path.display()));
                doc
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "new file");
                self.set_status(format!("New file: {}", path.display()));
                Document::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "load failed");
                self.set_status(format!("Error loading file: {e}"));
                Document::new()
            }
        };
        self.replace_document(doc, Some(path));
    }

    /// Write the document to `path`, or to the current file if `path` is `None`.
    ///
    /// On success `path` becomes the current file. On failure nothing changes.
    pub fn save(&mut self, path: Option<PathBuf>) {
        let Some(path) = path.or_else(|| self.file_path.clone()) else {
            self.set_status("No filename specified");
            return;
        };
        match fs::write(&path, self.doc.to_text()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved");
                self.set_status(format!("Saved: {}", path.display()));
                self.file_path = Some(path);
                self.dirty = false;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                self.set_status(format!("Error saving file: {e}"));
            }
        }
    }

    /// Start over with an empty, untitled document.
    pub fn new_file(&mut self) {
        self.replace_document(Document::new(), None);
        self.set_status("New file");
    }

    fn replace_document(&mut self, doc: Document, path: Option<PathBuf>) {
        self.doc = doc;
        self.cursor = Cursor::default();
        self.view.reset();
        self.file_path = path;
        self.dirty = false;
        self.last_quit_hint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::editor;
    use crate::intent::Intent;
    use crate::types::{Direction, Pos};
    use std::fs;

    fn status(ed: &crate::editor::Editor) -> String {
        ed.status().map(|s| s.text.clone()).unwrap_or_default()
    }

    // ==================== Open ====================

    #[test]
    fn open_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "one\r\ntwo\n").unwrap();

        let mut ed = editor(&["old"], Pos::new(0, 2));
        ed.apply(Intent::SelectExtend(Direction::Left)).unwrap();
        ed.apply(Intent::Open(path.clone())).unwrap();

        assert_eq!(ed.document().lines(), ["one", "two"]);
        assert_eq!(ed.cursor(), Pos::ORIGIN);
        assert_eq!(ed.selection(), None);
        assert_eq!(ed.file_path(), Some(path.as_path()));
        assert!(status(&ed).starts_with("Opened: "));
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut ed = editor(&["old"], Pos::new(0, 3));
        ed.apply(Intent::Open(path.clone())).unwrap();
        assert_eq!(ed.document().lines(), [""]);
        assert_eq!(ed.file_path(), Some(path.as_path()));
        assert!(status(&ed).starts_with("New file: "));
    }

    #[test]
    fn open_unreadable_path_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        let mut ed = editor(&["old"], Pos::new(0, 3));
        ed.apply(Intent::Open(dir.path().to_path_buf())).unwrap();
        assert_eq!(ed.document().lines(), [""]);
        assert_eq!(ed.cursor(), Pos::ORIGIN);
        assert!(status(&ed).starts_with("Error loading file: "));
    }

    // ==================== Save ====================

    #[test]
    fn save_joins_lines_with_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut ed = editor(&["a", "", "b"], Pos::ORIGIN);
        ed.apply(Intent::Insert('x')).unwrap();
        assert!(ed.is_dirty());

        ed.apply(Intent::SaveAs(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "xa\n\nb");
        assert_eq!(ed.file_path(), Some(path.as_path()));
        assert!(!ed.is_dirty());
        assert_eq!(status(&ed), format!("Saved: {}", path.display()));
    }

    #[test]
    fn save_uses_current_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "v1").unwrap();
        let mut ed = editor(&[], Pos::ORIGIN);
        ed.open(path.clone());
        ed.apply(Intent::End).unwrap();
        ed.apply(Intent::Insert('!')).unwrap();
        ed.apply(Intent::Save).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1!");
    }

    #[test]
    fn save_without_any_path() {
        let mut ed = editor(&["a"], Pos::ORIGIN);
        ed.apply(Intent::Save).unwrap();
        assert_eq!(status(&ed), "No filename specified");
    }

    #[test]
    fn failed_save_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing-dir").join("out.txt");
        let mut ed = editor(&["keep", "me"], Pos::new(1, 2));
        ed.apply(Intent::Insert('!')).unwrap();

        ed.apply(Intent::SaveAs(bad)).unwrap();
        assert!(status(&ed).starts_with("Error saving file: "));
        assert_eq!(ed.document().lines(), ["keep", "me!"]);
        assert_eq!(ed.cursor(), Pos::new(1, 3));
        assert_eq!(ed.file_path(), None);
        assert!(ed.is_dirty());
    }

    #[test]
    fn save_then_open_round_trips_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        let mut ed = editor(&["héllo", "", "wörld"], Pos::ORIGIN);
        ed.apply(Intent::SaveAs(path.clone())).unwrap();
        let saved = ed.document().clone();
        ed.apply(Intent::New).unwrap();
        ed.apply(Intent::Open(path)).unwrap();
        assert_eq!(ed.document(), &saved);
    }

    // ==================== New ====================

    #[test]
    fn new_file_resets_everything() {
        let lines: Vec<String> = (0..60).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut ed = editor(&refs, Pos::ORIGIN);
        ed.apply(Intent::Page(Direction::Down)).unwrap();
        ed.apply(Intent::Page(Direction::Down)).unwrap();
        ed.apply(Intent::Insert('x')).unwrap();
        ed.apply(Intent::New).unwrap();

        assert_eq!(ed.document().lines(), [""]);
        assert_eq!(ed.cursor(), Pos::ORIGIN);
        assert_eq!(ed.viewport().scroll_y, 0);
        assert_eq!(ed.file_path(), None);
        assert!(!ed.is_dirty());
        assert_eq!(status(&ed), "New file");
    }
}
