//! Config-file source discovery.
//!
//! Source order: explicit path > home dotfile > XDG config file > built-in
//! defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, HOME_CONFIG_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `~/.kitty-colors`.
    HomeDotfile(PathBuf),
    /// Config loaded from `$XDG_CONFIG_HOME/kitty-colours/config.toml`.
    Global(PathBuf),
    /// No file found; runtime defaults are used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead>(
    path_override: Option<&Path>,
    read_file: &FRead,
    home: Option<&Path>,
    config_root: Option<&Path>,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    // An explicit path must exist.
    if let Some(path) = path_override {
        let text = read_file(path)?;
        return Ok((text, ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(home) = home {
        let dotfile = home.join(HOME_CONFIG_FILE);
        if let Some(text) = read_optional(read_file, &dotfile)? {
            return Ok((text, ConfigSource::HomeDotfile(dotfile)));
        }
    }
    if let Some(root) = config_root {
        let global = root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Some(text) = read_optional(read_file, &global)? {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Read an optional source. Only a missing file moves on to the next source.
fn read_optional<FRead>(read_file: &FRead, path: &Path) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))),
    }
}
