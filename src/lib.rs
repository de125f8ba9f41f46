//! `cedit`: a small plain-text editor for the terminal.
//!
//! ## Reading guide
//! - **`document::Document`**: the text as a list of lines, with the primitive edits.
//! - **`cursor::Cursor`**: caret position plus the optional selection anchor.
//! - **`viewport::Viewport`**: which part of the document is on screen.
//! - **`editor::Editor`**: one editing session; every change goes through [`editor::Editor::apply`]
//!   with an [`intent::Intent`], and [`editor::Editor::snapshot`] describes what to draw.
//! - **`clipboard`**: system clipboard access and multi-line copy/paste.
//! - **`app::App`**, **`input`**, **`render`**, **`terminal`**: the crossterm front end.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod intent;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;
pub mod viewport;
