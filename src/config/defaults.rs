//! Default configuration constants.

/// KiTTY directory used when nothing else is configured.
pub(super) const DEFAULT_KITTY_DIR: &str = ".";
/// Theme directory used when nothing else is configured.
pub(super) const DEFAULT_THEME_DIR: &str = ".";
/// Per-user dotfile name, looked up in the home directory.
pub(super) const HOME_CONFIG_FILE: &str = ".kitty-colors";
/// Directory under the XDG config root holding `config.toml`.
pub(super) const CONFIG_DIR_NAME: &str = "kitty-colours";
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";

pub(super) const ENV_KITTY_DIR: &str = "KITTY_COLOURS_KITTY_DIR";
pub(super) const ENV_THEME_DIR: &str = "KITTY_COLOURS_THEME_DIR";
