//! Configuration data model.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_KITTY_DIR, DEFAULT_THEME_DIR};

/// Resolved runtime configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// KiTTY installation directory; sessions live under `<kitty_dir>/Sessions`.
    pub kitty_dir: PathBuf,
    /// Checkout of the base16-putty themes (`base16-<name>.reg`).
    pub theme_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kitty_dir: PathBuf::from(DEFAULT_KITTY_DIR),
            theme_dir: PathBuf::from(DEFAULT_THEME_DIR),
        }
    }
}

impl Config {
    /// Apply command-line overrides; a `Some` always wins.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(dir) = &overrides.kitty_dir {
            self.kitty_dir = dir.clone();
        }
        if let Some(dir) = &overrides.theme_dir {
            self.theme_dir = dir.clone();
        }
    }
}

/// Directory overrides taken from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub kitty_dir: Option<PathBuf>,
    pub theme_dir: Option<PathBuf>,
}

/// On-disk shape of the config file.
///
/// Accepts the historic `KittyDir`/`ThemeDir` spelling alongside snake_case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    #[serde(alias = "KittyDir", alias = "kittydir", alias = "kitty-dir")]
    pub kitty_dir: Option<String>,
    #[serde(alias = "ThemeDir", alias = "themedir", alias = "theme-dir")]
    pub theme_dir: Option<String>,
}
