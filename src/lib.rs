//! kitty-colours: copy a base16-putty colour theme into a KiTTY session.
//!
//! A theme file (`base16-<name>.reg`) is parsed into a [`palette::Palette`]
//! of 22 colour slots, which [`session::patch_session`] then writes over the
//! matching `Colour<N>\R,G,B\` lines of a session file.
//!
//! ```no_run
//! use kitty_colours::app::{run, ColourRequest};
//! use kitty_colours::config::load_config;
//! use kitty_colours::session::WriteMode;
//!
//! let config = load_config(None).unwrap();
//! let request = ColourRequest {
//!     session: "Default%20Settings".into(),
//!     theme: "ocean".into(),
//!     write_mode: WriteMode::Truncate,
//! };
//! run(&config, &request).unwrap();
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod textutil;
