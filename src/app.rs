//! Orchestration: resolve paths, load the palette, patch the session.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::palette::{load_palette, PALETTE_SIZE};
use crate::session::{patch_session, WriteMode};

/// One requested transfer of a theme onto a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourRequest {
    /// Session name as stored by KiTTY (file name under `Sessions/`).
    pub session: String,
    /// Theme name without the `base16-` prefix and `.reg` suffix.
    pub theme: String,
    pub write_mode: WriteMode,
}

/// What a successful run touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub theme_path: PathBuf,
    pub session_path: PathBuf,
    /// Colour lines whose slot the palette defined, changed or not.
    pub matched: usize,
}

/// `<theme_dir>/base16-<theme>.reg`
pub fn theme_path(config: &Config, theme: &str) -> PathBuf {
    config.theme_dir.join(format!("base16-{theme}.reg"))
}

/// `<kitty_dir>/Sessions/<session>`
pub fn session_path(config: &Config, session: &str) -> PathBuf {
    config.kitty_dir.join("Sessions").join(session)
}

fn is_regular_file(path: &Path) -> bool {
    path.metadata().is_ok_and(|meta| meta.is_file())
}

/// Apply the requested theme to the requested session.
pub fn run(config: &Config, request: &ColourRequest) -> Result<Summary, Error> {
    let theme_path = theme_path(config, &request.theme);
    if !is_regular_file(&theme_path) {
        return Err(Error::ThemeNotFound(request.theme.clone()));
    }

    let palette = load_palette(&theme_path)?;
    if palette.len() != PALETTE_SIZE {
        return Err(Error::IncompletePalette {
            found: palette.len(),
            expected: PALETTE_SIZE,
        });
    }

    let session_path = session_path(config, &request.session);
    if !is_regular_file(&session_path) {
        return Err(Error::SessionNotFound(request.session.clone()));
    }

    let stats = patch_session(&palette, &session_path, request.write_mode)?;
    tracing::info!(
        theme = %request.theme,
        session = %request.session,
        matched = stats.matched,
        "applied theme"
    );

    Ok(Summary {
        theme_path,
        session_path,
        matched: stats.matched,
    })
}
