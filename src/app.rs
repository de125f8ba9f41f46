//! The interactive shell around the editor: key handling, the filename prompt, and drawing.

use crate::editor::Editor;
use crate::highlight::Highlighter;
use crate::input::{decode_key, KeyAction, PromptKind};
use crate::intent::Intent;
use crate::render;
use crate::types::Outcome;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::io::Write;
use std::path::PathBuf;

/// Prompt state (the file name being typed on the bottom line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

pub struct App {
    editor: Editor,
    highlighter: Highlighter,
    prompt: Option<Prompt>,
}

impl App {
    pub fn new(editor: Editor, highlighter: Highlighter) -> Self {
        let mut app = Self { editor, highlighter, prompt: None };
        app.sync_highlighter();
        app
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Handle one terminal event. Returns [`Outcome::Quit`] when the editor should exit.
    pub fn handle_event(&mut self, event: Event) -> Outcome {
        match event {
            Event::Key(key) => self.handle_key(&key),
            Event::Resize(w, h) => self.dispatch(Intent::Resize { height: usize::from(h), width: usize::from(w) }),
            _ => Outcome::Continue,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Outcome {
        if self.prompt.is_some() {
            return self.handle_prompt_key(key);
        }
        match decode_key(key) {
            Some(KeyAction::Intent(Intent::Save)) if self.editor.file_path().is_none() => {
                self.open_prompt(PromptKind::SaveAs);
                Outcome::Continue
            }
            Some(KeyAction::Intent(intent)) => self.dispatch(intent),
            Some(KeyAction::Prompt(kind)) => {
                self.open_prompt(kind);
                Outcome::Continue
            }
            None => Outcome::Continue,
        }
    }

    /// Hand an intent to the editor. An engine error is a bug in the editor itself: it is
    /// logged and shown, and the session carries on with the last consistent state.
    fn dispatch(&mut self, intent: Intent) -> Outcome {
        let outcome = match self.editor.apply(intent) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "internal editor error");
                self.editor.set_status(format!("Internal error: {e}"));
                Outcome::Continue
            }
        };
        self.sync_highlighter();
        outcome
    }

    fn sync_highlighter(&mut self) {
        let ext = self.editor.file_path().and_then(|p| p.extension()).and_then(|e| e.to_str());
        self.highlighter.set_file_extension(ext);
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let input = match kind {
            PromptKind::SaveAs => self.editor.file_path().map(|p| p.display().to_string()).unwrap_or_default(),
            PromptKind::Open => String::new(),
        };
        self.prompt = Some(Prompt { kind, input });
    }

    /// Handle keys while a prompt is active.
    fn handle_prompt_key(&mut self, key: &KeyEvent) -> Outcome {
        let Some(prompt) = &mut self.prompt else { return Outcome::Continue };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Enter => {
                let Some(p) = self.prompt.take() else { return Outcome::Continue };
                let name = p.input.trim();
                if name.is_empty() {
                    return Outcome::Continue;
                }
                let path = PathBuf::from(name);
                let intent = match p.kind {
                    PromptKind::Open => Intent::Open(path),
                    PromptKind::SaveAs => Intent::SaveAs(path),
                };
                return self.dispatch(intent);
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => prompt.input.push(c),
            _ => {}
        }
        Outcome::Continue
    }

    /// Draw one frame, then count down the status message.
    pub fn draw<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let snap = self.editor.snapshot();
        let highlights: Vec<_> = if self.editor.config().highlight && self.highlighter.is_active() {
            snap.lines
                .iter()
                .filter_map(|l| self.editor.document().line(l.y))
                .map(|line| self.highlighter.highlight_line(line))
                .collect()
        } else {
            Vec::new()
        };
        render::draw(out, &snap, &highlights, self.prompt.as_ref())?;
        self.editor.tick();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::types::Pos;
    use std::fs;

    fn app() -> App {
        let editor = Editor::new(Config::default(), Box::new(MemoryClipboard::default()), 24, 80);
        App::new(editor, Highlighter::with_builtin_rules())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Outcome {
        app.handle_key(&KeyEvent::new(code, modifiers))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_enter() {
        let mut app = app();
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut app, "world");
        assert_eq!(app.editor().document().lines(), ["hello", "world"]);
        assert_eq!(app.editor().cursor(), Pos::new(1, 5));
    }

    #[test]
    fn save_without_path_opens_prompt_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.py");
        let mut app = app();
        type_str(&mut app, "x = 1");

        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.prompt().map(|p| p.kind), Some(PromptKind::SaveAs));
        type_str(&mut app, &path.display().to_string());
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.prompt().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1");
        assert!(app.highlighter.is_active());
    }

    #[test]
    fn open_prompt_can_be_cancelled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.prompt().map(|p| p.input.as_str()), Some("ab"));
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.prompt().is_none());
        assert_eq!(app.editor().document().lines(), [""]);
    }

    #[test]
    fn open_prompt_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "alpha\nbeta").unwrap();
        let mut app = app();
        press(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
        type_str(&mut app, &path.display().to_string());
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.editor().document().lines(), ["alpha", "beta"]);
    }

    #[test]
    fn quit_and_resize_events() {
        let mut app = app();
        assert_eq!(app.handle_event(Event::Resize(40, 10)), Outcome::Continue);
        assert_eq!(app.editor().viewport().frame_height, 8);
        assert_eq!(press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL), Outcome::Quit);
    }

    #[test]
    fn draw_counts_down_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        let before = app.editor().status().unwrap().ticks_left;
        let mut out = Vec::new();
        app.draw(&mut out).unwrap();
        assert_eq!(app.editor().status().unwrap().ticks_left, before - 1);
        assert!(String::from_utf8_lossy(&out).contains("New file"));
    }
}
