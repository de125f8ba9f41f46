//! Rendering: painting a [`Snapshot`] onto the terminal.

use crate::app::Prompt;
use crate::editor::Snapshot;
use crate::highlight::{color_at, HighlightColor, HighlightSpan};
use crate::input::PromptKind;
use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Color},
    terminal::{self, ClearType},
    QueueableCommand,
};
use std::io::Write;

/// Convert a `HighlightColor` to a crossterm `Color`.
fn highlight_to_crossterm(color: HighlightColor) -> Color {
    match color {
        HighlightColor::Red => Color::Red,
        HighlightColor::Green => Color::Green,
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Blue => Color::Blue,
        HighlightColor::Magenta => Color::Magenta,
        HighlightColor::Cyan => Color::Cyan,
        HighlightColor::Grey => Color::DarkGrey,
    }
}

/// Screen coordinate as crossterm wants it.
fn cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Paint one frame.
///
/// `highlights[i]` holds the spans for `snap.lines[i]` in document columns; it may be shorter
/// than `snap.lines` (or empty), in which case the remaining lines are plain.
pub fn draw<W: Write>(out: &mut W, snap: &Snapshot, highlights: &[Vec<HighlightSpan>], prompt: Option<&Prompt>) -> Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(style::ResetColor)?;

    for row in 0..snap.frame_height {
        out.queue(cursor::MoveTo(0, cell(row)))?;
        out.queue(terminal::Clear(ClearType::CurrentLine))?;

        let Some(line) = snap.lines.get(row) else {
            out.queue(style::SetForegroundColor(Color::DarkGrey))?;
            out.queue(style::Print("~"))?;
            out.queue(style::ResetColor)?;
            continue;
        };
        let spans = highlights.get(row).map_or(&[][..], Vec::as_slice);
        draw_line(out, snap, row, &line.text, spans)?;
    }

    let status_y = cell(snap.frame_height);
    let width = snap.frame_width + 1;
    out.queue(cursor::MoveTo(0, status_y))?;
    out.queue(terminal::Clear(ClearType::CurrentLine))?;
    out.queue(style::SetAttribute(Attribute::Reverse))?;
    out.queue(style::Print(fit(&snap.status_line, width)))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;

    let message_y = status_y.saturating_add(1);
    out.queue(cursor::MoveTo(0, message_y))?;
    out.queue(terminal::Clear(ClearType::CurrentLine))?;

    if let Some(p) = prompt {
        let label = match p.kind {
            PromptKind::Open => "Open file: ",
            PromptKind::SaveAs => "Save file: ",
        };
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(style::Print(label))?;
        out.queue(style::ResetColor)?;
        out.queue(style::Print(&p.input))?;
        let col = label.chars().count() + p.input.chars().count();
        out.queue(cursor::MoveTo(cell(col.min(width - 1)), message_y))?;
    } else {
        if let Some(msg) = &snap.message {
            out.queue(style::Print(fit(&msg.text, width - 1)))?;
        }
        let (row, col) = snap.cursor;
        out.queue(cursor::MoveTo(cell(col), cell(row)))?;
    }

    out.queue(cursor::Show)?;
    out.flush()?;
    Ok(())
}

fn draw_line<W: Write>(out: &mut W, snap: &Snapshot, row: usize, text: &str, spans: &[HighlightSpan]) -> Result<()> {
    let mut col = 0;
    for ch in text.chars() {
        if snap.is_selected(row, col) {
            out.queue(style::SetAttribute(Attribute::Reverse))?;
        } else if let Some(c) = color_at(spans, snap.scroll_x + col) {
            out.queue(style::SetForegroundColor(highlight_to_crossterm(c)))?;
        }
        out.queue(style::Print(ch))?;
        out.queue(style::SetAttribute(Attribute::Reset))?;
        out.queue(style::ResetColor)?;
        col += 1;
    }
    // selected line breaks and selections past the end of the text
    out.queue(style::SetAttribute(Attribute::Reverse))?;
    while col < snap.frame_width && snap.is_selected(row, col) {
        out.queue(style::Print(' '))?;
        col += 1;
    }
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Pad or cut `s` to exactly `width` columns.
fn fit(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
