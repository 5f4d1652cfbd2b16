//! Configuration loading from a TOML file and environment variables.
//!
//! Config is resolved in this order of precedence (highest wins):
//! 1. Command-line flags (`--kitty-dir`, `--theme-dir`), via
//!    [`Config::apply_overrides`]
//! 2. Environment variables (`KITTY_COLOURS_KITTY_DIR`,
//!    `KITTY_COLOURS_THEME_DIR`)
//! 3. TOML file given with `--config`, else `~/.kitty-colors`
//!    (`%USERPROFILE%\.kitty-colors` on Windows), else
//!    `$XDG_CONFIG_HOME/kitty-colours/config.toml`
//! 4. Built-in defaults (current directory)

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::load_config;
pub use types::{Config, ConfigOverrides};
use types::FileConfig;
