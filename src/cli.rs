//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

use kitty_colours::build_info::LONG_VERSION;
use kitty_colours::config::ConfigOverrides;
use kitty_colours::session::WriteMode;

/// Copy a base16-putty colour theme into a KiTTY session.
#[derive(Debug, Parser)]
#[command(name = "kitty-colours", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Session name (file under `<kitty-dir>/Sessions`).
    pub session: String,

    /// Theme name; reads `<theme-dir>/base16-<theme>.reg`.
    pub theme: String,

    /// Set path to kitty directory.
    #[arg(long = "kitty-dir", visible_alias = "kittyDir", value_name = "DIR")]
    pub kitty_dir: Option<PathBuf>,

    /// Set path to base16-putty repository.
    #[arg(long = "theme-dir", visible_alias = "themeDir", value_name = "DIR")]
    pub theme_dir: Option<PathBuf>,

    /// Path to config file (default: ~/.kitty-colors).
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write over the session without truncating it first, leaving any
    /// leftover bytes of a longer original at the end of the file.
    #[arg(long = "legacy-overwrite")]
    pub legacy_overwrite: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            kitty_dir: self.kitty_dir.clone(),
            theme_dir: self.theme_dir.clone(),
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.legacy_overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Truncate
        }
    }
}
