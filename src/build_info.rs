//! Compile-time build metadata exposed to the CLI.

/// `git describe` output at build time, or "unknown".
pub const GIT_COMMIT: &str = env!("KITTY_COLOURS_GIT_DESCRIBE");

/// UTC build date, `YYYY-MM-DD`.
pub const BUILD_DATE: &str = env!("KITTY_COLOURS_BUILD_DATE");

/// Version string shown by `kitty-colours --version`,
/// e.g. `0.1.0 (v0.1.0-3-g1a2b3c4d5e6f 2026-10-14)`.
pub const LONG_VERSION: &str = env!("KITTY_COLOURS_LONG_VERSION");
