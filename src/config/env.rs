//! Environment overrides for configured directories.

use std::path::{Path, PathBuf};

use super::defaults::{ENV_KITTY_DIR, ENV_THEME_DIR};
use super::Config;

/// Apply `KITTY_COLOURS_*` variables on top of file values.
pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(dir) = non_empty_env(env_lookup, ENV_KITTY_DIR) {
        config.kitty_dir = PathBuf::from(dir);
    }
    if let Some(dir) = non_empty_env(env_lookup, ENV_THEME_DIR) {
        config.theme_dir = PathBuf::from(dir);
    }
}

/// Home directory, preferring `USERPROFILE` so Windows setups keep working.
pub(super) fn home_dir_with<FEnv>(env_lookup: &FEnv) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty_env(env_lookup, "USERPROFILE")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// XDG config root, falling back to `~/.config` and then the platform dir.
pub(super) fn config_root_with<FEnv>(env_lookup: &FEnv, home: Option<&Path>) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty_env(env_lookup, "XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}

fn non_empty_env<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
