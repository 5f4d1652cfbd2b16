//! Unified error types for the colour transfer.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// PaletteError
// ---------------------------------------------------------------------------

/// Errors from reading a theme file.
#[derive(Debug)]
pub enum PaletteError {
    /// The theme file could not be opened or read.
    Io(PathBuf, std::io::Error),
    /// A line matched the entry pattern but did not split into key and value.
    InvalidEntry(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{}: {e}", path.display()),
            Self::InvalidEntry(line) => {
                write!(f, "cannot load putty colors, string {line:?} is invalid")
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::InvalidEntry(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors from rewriting a session file.
#[derive(Debug)]
pub enum SessionError {
    /// Snapshot read of the original content failed.
    Read(PathBuf, std::io::Error),
    /// Opening, writing, or flushing the rewritten content failed.
    Write(PathBuf, std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, e) => write!(f, "read {}: {e}", path.display()),
            Self::Write(path, e) => write!(f, "write {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(_, e) | Self::Write(_, e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Error — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for a run.
#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    Palette(PaletteError),
    Session(SessionError),
    /// No regular file exists for the named theme.
    ThemeNotFound(String),
    /// No regular file exists for the named session.
    SessionNotFound(String),
    /// The theme did not yield exactly the expected number of slots.
    IncompletePalette { found: usize, expected: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Palette(e) => write!(f, "{e}"),
            Self::Session(e) => write!(f, "{e}"),
            Self::ThemeNotFound(theme) => write!(f, "can't find theme {theme}"),
            Self::SessionNotFound(session) => write!(f, "can't find session {session}"),
            Self::IncompletePalette { found, expected } => write!(
                f,
                "color palette is not complete ({found} of {expected} colours)"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PaletteError> for Error {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<SessionError> for Error {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}
