//! `cedit` binary: argument parsing, logging setup and the main input/render loop.

use anyhow::{Context, Result};
use cedit::app::App;
use cedit::clipboard::open_clipboard;
use cedit::config::{default_config_dirs, Config};
use cedit::editor::Editor;
use cedit::highlight::Highlighter;
use cedit::terminal::TerminalGuard;
use cedit::types::Outcome;
use crossterm::event::{self, Event, KeyEventKind};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file. Without it nothing is logged, since stdout and
/// stderr belong to the editor screen.
const LOG_ENV: &str = "CEDIT_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else { return Ok(()) };
    let file = File::create(&path).with_context(|| format!("Creating log file {}", PathBuf::from(&path).display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_help() {
    println!("cedit - a simple terminal text editor");
    println!();
    println!("USAGE:");
    println!("    cedit [FILE]          Open a file (created on first save if missing)");
    println!("    cedit -h, --help      Show this help message");
    println!("    cedit -v, --version   Show version information");
    println!();
    println!("KEYBINDINGS:");
    println!("    Arrows / Shift+Arrows  Move / extend selection");
    println!("    PageUp / PageDown      Scroll a page");
    println!("    Home / End             Start / end of line");
    println!("    Ctrl+C / Ctrl+V        Copy / paste");
    println!("    Ctrl+S                 Save");
    println!("    Ctrl+Shift+S, Alt+S    Save as");
    println!("    Ctrl+O                 Open file prompt");
    println!("    Ctrl+N                 New file");
    println!("    Esc                    Cancel selection");
    println!("    Ctrl+Q                 Quit");
    println!();
    println!("Set {LOG_ENV}=<path> to write a log (filter with RUST_LOG).");
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut file_to_open = None;

    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-v" | "--version" => {
                println!("cedit v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown flag '{flag}'");
                eprintln!("Try 'cedit --help' for more information.");
                std::process::exit(1);
            }
            path => file_to_open = Some(PathBuf::from(path)),
        }
    }

    init_logging()?;
    let config = Config::load(&default_config_dirs())?;
    tracing::info!(?config, "starting");

    let mut stdout = io::stdout();
    let _term = TerminalGuard::new(&mut stdout)?;
    let (height, width) = TerminalGuard::size()?;

    let mut editor = Editor::new(config, open_clipboard(), height, width);
    if let Some(path) = file_to_open {
        editor.open(path);
    }
    let mut app = App::new(editor, Highlighter::with_builtin_rules());

    loop {
        app.draw(&mut stdout)?;

        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;
            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
            }
            if app.handle_event(ev) == Outcome::Quit {
                break;
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}
