//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::{apply_env_overrides, config_root_with, home_dir_with};
use super::sources::{read_config_text_with_sources, ConfigSource};
use super::{Config, FileConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&Path>) -> Result<Config, ConfigError> {
    let env_lookup = |name: &str| std::env::var(name).ok();
    let home = home_dir_with(&env_lookup);
    let config_root = config_root_with(&env_lookup, home.as_deref());
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        env_lookup,
        home.as_deref(),
        config_root.as_deref(),
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    home: Option<&Path>,
    config_root: Option<&Path>,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
{
    let (text, source) =
        read_config_text_with_sources(path_override, &read_file, home, config_root)?;
    match &source {
        ConfigSource::Explicit(path)
        | ConfigSource::HomeDotfile(path)
        | ConfigSource::Global(path) => {
            tracing::debug!(path = %path.display(), "using config file");
        }
        ConfigSource::BuiltInDefaults => tracing::debug!("no config file found; using defaults"),
    }

    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve_file_config(parsed, home)?;
    apply_env_overrides(&mut config, &env_lookup);
    Ok(config)
}

fn resolve_file_config(parsed: FileConfig, home: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(dir) = parsed.kitty_dir {
        config.kitty_dir = expand_home(&dir, home)?;
    }
    if let Some(dir) = parsed.theme_dir {
        config.theme_dir = expand_home(&dir, home)?;
    }
    Ok(config)
}

/// Expand a leading `~` to the home directory.
pub(super) fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return Ok(PathBuf::from(raw)),
    };
    let home = home.ok_or_else(|| {
        ConfigError::Invalid(format!("cannot expand `{raw}`: home directory is unknown"))
    })?;
    Ok(home.join(rest.trim_start_matches(['/', '\\'])))
}
