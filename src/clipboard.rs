//! Clipboard transport: turning a selection into a payload and a payload back into lines.
//!
//! The payload format is plain text with `\n` between lines. Where the text actually lives is
//! up to a [`ClipboardBackend`]: the system clipboard when one is reachable, otherwise an
//! in-process buffer.

use crate::document::Document;
use crate::error::EditResult;
use crate::text::char_len;
use crate::types::Pos;
use anyhow::{anyhow, Result};

/// Somewhere to put copied text and get pasted text from.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// The desktop clipboard, via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| anyhow!("clipboard unavailable: {e}"))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text).map_err(|e| anyhow!("{e}"))
    }

    fn get_text(&mut self) -> Result<String> {
        self.inner.get_text().map_err(|e| anyhow!("{e}"))
    }
}

/// A clipboard that only lives as long as the editor.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: String,
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        text.clone_into(&mut self.text);
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// The system clipboard if it can be opened, otherwise a [`MemoryClipboard`].
pub fn open_clipboard() -> Box<dyn ClipboardBackend> {
    match SystemClipboard::new() {
        Ok(cb) => Box::new(cb),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to in-memory clipboard");
            Box::new(MemoryClipboard::default())
        }
    }
}

/// The text covered by `span`, lines joined with `\n`. No span gives an empty payload.
pub fn copy_payload(doc: &Document, span: Option<(Pos, Pos)>) -> EditResult<String> {
    let Some((a, b)) = span else {
        return Ok(String::new());
    };
    if a.y == b.y {
        return Ok(doc.slice(a.y, a.x, Some(b.x))?.to_string());
    }

    let mut out = String::new();
    out.push_str(doc.slice(a.y, a.x, None)?);
    for y in (a.y + 1)..b.y {
        out.push('\n');
        out.push_str(doc.slice(y, 0, None)?);
    }
    out.push('\n');
    out.push_str(doc.slice(b.y, 0, Some(b.x))?);
    Ok(out)
}

/// Paste reflow: insert `payload` at `at` and return the position just after the pasted text.
///
/// A single-line payload is a plain insert. Otherwise the current line is cut at `at`; its head
/// gets the first payload line, the middle payload lines become new lines, and the last payload
/// line is followed by the cut-off tail.
pub fn paste_payload(doc: &mut Document, at: Pos, payload: &str) -> EditResult<Pos> {
    let parts: Vec<&str> = payload.split('\n').collect();
    let [first, middle @ .., last] = parts.as_slice() else {
        return doc.insert_str(at, payload);
    };

    doc.check(at)?;
    let tail = doc.split_off(at)?;
    doc.push_str(at.y, first)?;

    let mut y = at.y + 1;
    for line in middle {
        doc.insert_line(y, (*line).to_string())?;
        y += 1;
    }

    let mut last_line = (*last).to_string();
    last_line.push_str(&tail);
    doc.insert_line(y, last_line)?;

    Ok(Pos { y, x: char_len(last) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    // ==================== Copy ====================

    #[test]
    fn copy_single_line_span() {
        let d = doc(&["hello world"]);
        let s = copy_payload(&d, Some((Pos::new(0, 0), Pos::new(0, 5)))).unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn copy_two_line_span() {
        let d = doc(&["line1", "line2"]);
        let s = copy_payload(&d, Some((Pos::new(0, 2), Pos::new(1, 2)))).unwrap();
        assert_eq!(s, "ne1\nli");
    }

    #[test]
    fn copy_includes_middle_lines_verbatim() {
        let d = doc(&["line1", "line2", "", "line4"]);
        let s = copy_payload(&d, Some((Pos::new(0, 3), Pos::new(3, 3)))).unwrap();
        assert_eq!(s, "e1\nline2\n\nlin");
    }

    #[test]
    fn copy_span_ending_at_column_zero_ends_with_newline() {
        let d = doc(&["ab", "cd"]);
        let s = copy_payload(&d, Some((Pos::new(0, 1), Pos::new(1, 0)))).unwrap();
        assert_eq!(s, "b\n");
    }

    #[test]
    fn copy_without_selection_is_empty() {
        assert_eq!(copy_payload(&doc(&["abc"]), None).unwrap(), "");
    }

    #[test]
    fn copy_out_of_range_span_fails() {
        let d = doc(&["ab"]);
        assert!(copy_payload(&d, Some((Pos::new(0, 0), Pos::new(2, 0)))).is_err());
    }

    // ==================== Paste ====================

    #[test]
    fn paste_single_line_is_insert() {
        let mut d = doc(&["ad"]);
        let p = paste_payload(&mut d, Pos::new(0, 1), "bc").unwrap();
        assert_eq!(p, Pos::new(0, 3));
        assert_eq!(d.lines(), ["abcd"]);
    }

    #[test]
    fn paste_two_lines_reattaches_tail() {
        let mut d = doc(&["ab"]);
        let p = paste_payload(&mut d, Pos::new(0, 1), "X\nY").unwrap();
        assert_eq!(d.lines(), ["aX", "Yb"]);
        assert_eq!(p, Pos::new(1, 1));
    }

    #[test]
    fn paste_many_lines_in_order() {
        let mut d = doc(&["start end", "next"]);
        let p = paste_payload(&mut d, Pos::new(0, 6), "one\ntwo\nthree\n").unwrap();
        assert_eq!(d.lines(), ["start one", "two", "three", "end", "next"]);
        assert_eq!(p, Pos::new(3, 0));
    }

    #[test]
    fn paste_preserves_char_count_and_adds_lines() {
        let mut d = doc(&["héllo", "wörld"]);
        let payload = "α\nβγ\n\nδ";
        let chars_before = d.char_count();
        let lines_before = d.line_count();
        paste_payload(&mut d, Pos::new(1, 2), payload).unwrap();
        let separators = payload.matches('\n').count();
        assert_eq!(d.char_count(), chars_before + payload.chars().count() - separators);
        assert_eq!(d.line_count(), lines_before + separators);
    }

    #[test]
    fn copy_then_paste_duplicates_selection_once() {
        let mut d = doc(&["line1", "line2", "line3"]);
        let span = (Pos::new(0, 2), Pos::new(1, 3));
        let payload = copy_payload(&d, Some(span)).unwrap();
        paste_payload(&mut d, span.1, &payload).unwrap();
        assert_eq!(d.to_text(), "line1\nlinne1\nline2\nline3");
    }

    #[test]
    fn paste_out_of_range_leaves_document_alone() {
        let mut d = doc(&["ab"]);
        assert!(paste_payload(&mut d, Pos::new(0, 3), "x\ny").is_err());
        assert_eq!(d.lines(), ["ab"]);
    }

    // ==================== Backends ====================

    #[test]
    fn memory_clipboard_round_trip() {
        let mut cb = MemoryClipboard::default();
        assert_eq!(cb.get_text().unwrap(), "");
        cb.set_text("a\nb").unwrap();
        assert_eq!(cb.get_text().unwrap(), "a\nb");
    }
}
