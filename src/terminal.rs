//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor, style,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use std::io::{self, Write};

/// RAII guard for terminal state: raw mode and the alternate screen are switched on in `new()`
/// and switched back off in `Drop`, so early returns and panics leave the shell usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new<W: Write>(out: &mut W) -> Result<Self> {
        terminal::enable_raw_mode().context("enable_raw_mode failed")?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(terminal::Clear(ClearType::All))?;
        out.flush()?;
        Ok(Self)
    }

    /// Current terminal size as `(height, width)`.
    pub fn size() -> Result<(usize, usize)> {
        let (w, h) = terminal::size().context("querying terminal size")?;
        Ok((usize::from(h), usize::from(w)))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(style::ResetColor);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
