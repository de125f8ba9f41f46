//! Document mutations: typing, Enter, Backspace/Delete, copy and paste.

use super::Editor;
use crate::clipboard::{copy_payload, paste_payload};
use crate::error::EditResult;
use crate::text::normalize_line_breaks;

impl Editor {
    /// Insert text that contains no line breaks at the cursor.
    pub(super) fn insert_text(&mut self, text: &str) -> EditResult<()> {
        let p = self.doc.insert_str(self.cursor.pos(), text)?;
        self.cursor.set_pos(p);
        self.mark_dirty();
        Ok(())
    }

    /// Typed character. Line breaks and tabs go through their own paths; other control
    /// characters are dropped.
    pub(super) fn insert_char(&mut self, ch: char) -> EditResult<()> {
        match ch {
            '\n' | '\r' => self.newline(),
            '\t' => self.insert_text(&self.config.tab()),
            c if c.is_control() => Ok(()),
            c => self.insert_text(c.encode_utf8(&mut [0; 4])),
        }
    }

    pub(super) fn newline(&mut self) -> EditResult<()> {
        let p = self.doc.split_line(self.cursor.pos())?;
        self.cursor.set_pos(p);
        self.mark_dirty();
        Ok(())
    }

    pub(super) fn backspace(&mut self) -> EditResult<()> {
        let before = self.cursor.pos();
        let p = self.doc.delete_backward(before)?;
        if p != before {
            self.cursor.set_pos(p);
            self.mark_dirty();
        }
        Ok(())
    }

    pub(super) fn delete(&mut self) -> EditResult<()> {
        let lines = self.doc.line_count();
        let len = self.doc.line_len(self.cursor.pos().y)?;
        self.doc.delete_forward(self.cursor.pos())?;
        if self.doc.line_count() != lines || self.doc.line_len(self.cursor.pos().y)? != len {
            self.mark_dirty();
        }
        Ok(())
    }

    /// Copy the selection to the clipboard. Without a selection this does nothing.
    pub(super) fn copy(&mut self) -> EditResult<()> {
        let payload = copy_payload(&self.doc, self.cursor.selection())?;
        if payload.is_empty() {
            tracing::debug!("copy without selection");
            return Ok(());
        }
        match self.clipboard.set_text(&payload) {
            Ok(()) => self.set_status("Text copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.set_status(format!("Failed to copy: {e}"));
            }
        }
        Ok(())
    }

    /// Paste the clipboard at the cursor, leaving the cursor after the pasted text.
    pub(super) fn paste(&mut self) -> EditResult<()> {
        let text = match self.clipboard.get_text() {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, "paste failed");
                self.set_status(format!("Failed to paste: {e}"));
                return Ok(());
            }
        };
        if text.is_empty() {
            return Ok(());
        }

        let payload = normalize_line_breaks(&text);
        let p = paste_payload(&mut self.doc, self.cursor.pos(), &payload)?;
        self.cursor.set_pos(p);
        self.mark_dirty();
        self.set_status("Text pasted from clipboard");
        Ok(())
    }
}
