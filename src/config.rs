//! User configuration, read from `cedit.toml`.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "cedit.toml";

/// Editor settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spaces inserted for a Tab key press.
    pub tab_width: usize,
    /// How many rendered frames a status message stays visible.
    pub status_ticks: u32,
    /// Syntax highlighting of the visible lines.
    pub highlight: bool,
    /// Window in which a second quit request overrides the unsaved-changes warning.
    pub quit_confirm_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            status_ticks: 50,
            highlight: true,
            quit_confirm_secs: 2,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        if cfg.tab_width == 0 {
            bail!("tab_width must be at least 1");
        }
        if cfg.quit_confirm_secs == 0 {
            bail!("quit_confirm_secs must be at least 1");
        }
        Ok(cfg)
    }

    /// Load the first `cedit.toml` found in `search_dirs`, or the defaults if there is none.
    pub fn load(search_dirs: &[PathBuf]) -> Result<Self> {
        for dir in search_dirs {
            let path = dir.join(CONFIG_FILE);
            if path.is_file() {
                return Self::load_file(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        let cfg = Self::from_toml(&s).with_context(|| format!("Parsing {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    pub fn tab(&self) -> String {
        " ".repeat(self.tab_width)
    }

    pub fn quit_confirm(&self) -> Duration {
        Duration::from_secs(self.quit_confirm_secs)
    }
}

/// Where to look for `cedit.toml`:
/// - the current working directory
/// - next to the executable
pub fn default_config_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs.push(dir.to_path_buf());
        }
    }

    dirs
}
