//! Key decoding: crossterm key events to editor intents.

use crate::intent::Intent;
use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The different prompt modes shown on the bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    SaveAs,
}

/// What a key press asks for: an intent, or a filename prompt that will produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Intent(Intent),
    Prompt(PromptKind),
}

/// Decode a key press. Keys without a binding yield `None` and are ignored.
pub fn decode_key(key: &KeyEvent) -> Option<KeyAction> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let arrow = match key.code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    };
    if let Some(dir) = arrow {
        let intent = if shift { Intent::SelectExtend(dir) } else { Intent::Move(dir) };
        return Some(KeyAction::Intent(intent));
    }

    if ctrl || alt {
        let KeyCode::Char(c) = key.code else { return None };
        let action = match (c.to_ascii_lowercase(), ctrl, shift || alt) {
            ('s', _, true) => KeyAction::Prompt(PromptKind::SaveAs),
            ('s', true, false) => KeyAction::Intent(Intent::Save),
            ('o', true, _) => KeyAction::Prompt(PromptKind::Open),
            ('n', true, _) => KeyAction::Intent(Intent::New),
            ('c', true, _) => KeyAction::Intent(Intent::Copy),
            ('v', true, _) => KeyAction::Intent(Intent::Paste),
            ('q', true, _) => KeyAction::Intent(Intent::Quit),
            _ => return None,
        };
        return Some(action);
    }

    let intent = match key.code {
        KeyCode::PageUp => Intent::Page(Direction::Up),
        KeyCode::PageDown => Intent::Page(Direction::Down),
        KeyCode::Home => Intent::Home,
        KeyCode::End => Intent::End,
        KeyCode::Enter => Intent::Newline,
        KeyCode::Tab => Intent::Tab,
        KeyCode::Backspace => Intent::Backspace,
        KeyCode::Delete => Intent::Delete,
        KeyCode::Esc => Intent::SelectCancel,
        KeyCode::Char(c) if !c.is_control() => Intent::Insert(c),
        _ => return None,
    };
    Some(KeyAction::Intent(intent))
}
