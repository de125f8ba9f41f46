//! Column arithmetic for lines of text.
//!
//! Columns are **char indices**. Rust strings are UTF-8, so slicing needs byte offsets that lie
//! on character boundaries; every column → byte conversion in the crate goes through here.

/// Number of chars in `s` (its length in columns).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of column `col` in `s`, or `None` if `col` is past the end of the line.
///
/// `col == char_len(s)` is valid and maps to `s.len()` (the end-of-line position).
pub fn byte_index(s: &str, col: usize) -> Option<usize> {
    if col == 0 {
        return Some(0);
    }
    s.char_indices()
        .map(|(bi, _)| bi)
        .chain(std::iter::once(s.len()))
        .nth(col)
}

/// Convert a byte offset back into a column.
pub fn byte_to_char_index(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx.min(s.len())].chars().count()
}

/// Up to `count` columns of `s` starting at column `start`; empty when `start` is past the end.
///
/// Used for display slicing, where running off either end of a line is normal.
pub fn slice_cols(s: &str, start: usize, count: usize) -> &str {
    let Some(b0) = byte_index(s, start) else {
        return "";
    };
    let rest = &s[b0..];
    let b1 = byte_index(rest, count).unwrap_or(rest.len());
    &rest[..b1]
}

/// Turn `\r\n` and lone `\r` line breaks into `\n`.
pub fn normalize_line_breaks(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// The char drawn for `c`. Every char takes exactly one screen cell, so a tab becomes a space
/// and other control chars become `?`.
pub fn display_char(c: char) -> char {
    match c {
        '\t' => ' ',
        c if c.is_control() => '?',
        c => c,
    }
}

/// Clamp `base + delta` into `[lo, hi]`.
pub fn clamp_offset(base: usize, delta: isize, lo: usize, hi: usize) -> usize {
    base.saturating_add_signed(delta).clamp(lo, hi)
}
