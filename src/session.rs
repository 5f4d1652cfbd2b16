//! In-place rewrite of KiTTY session colour lines.
//!
//! Session lines look like `Colour0\128,64,32\`. The text before the first
//! backslash names the slot; when the palette has that slot the whole line is
//! replaced by `<slot>\<colour>\`. Every other line is copied unchanged.

use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SessionError;
use crate::palette::Palette;
use crate::textutil::split_lines;

const COLOUR_PREFIX: &[u8] = b"Colour";

/// How the rewritten content is written back over the original file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate before writing; the file holds exactly the new content.
    #[default]
    Truncate,
    /// Write over the existing bytes without truncating. When the new content
    /// is shorter, the tail of the old content stays in the file.
    Overwrite,
}

/// Result of patching one session file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
    /// Lines in the file.
    pub lines: usize,
    /// Colour lines whose slot was found in the palette, including ones that
    /// already held the new value.
    pub matched: usize,
}

/// Slot name of a colour line, or `None` for any other line.
fn slot_name(line: &[u8]) -> Option<&[u8]> {
    if !line.starts_with(COLOUR_PREFIX) {
        return None;
    }
    let end = line.iter().position(|&b| b == b'\\').unwrap_or(line.len());
    Some(&line[..end])
}

/// Rewrite a single line against `palette`.
///
/// Anything after the first value segment is dropped from a rewritten line.
pub fn patch_line<'a>(palette: &Palette, line: &'a [u8]) -> Cow<'a, [u8]> {
    let colour = slot_name(line).and_then(|name| {
        let name = std::str::from_utf8(name).ok()?;
        palette.get(name).map(|colour| (name, colour))
    });
    match colour {
        Some((name, colour)) => Cow::Owned(format!("{name}\\{colour}\\").into_bytes()),
        None => Cow::Borrowed(line),
    }
}

/// Rewrite whole session content, terminating every line with `\n`.
pub fn patch_content(palette: &Palette, content: &[u8]) -> (Vec<u8>, PatchStats) {
    let mut out = Vec::with_capacity(content.len() + 64);
    let mut stats = PatchStats::default();
    for line in split_lines(content) {
        let patched = patch_line(palette, line);
        if matches!(patched, Cow::Owned(_)) {
            stats.matched += 1;
        }
        stats.lines += 1;
        out.extend_from_slice(&patched);
        out.push(b'\n');
    }
    (out, stats)
}

/// Patch the session file at `path` in place.
///
/// The original content is read completely before the file is reopened for
/// writing. There is no backup; an interrupted write leaves a partial file.
pub fn patch_session(
    palette: &Palette,
    path: &Path,
    mode: WriteMode,
) -> Result<PatchStats, SessionError> {
    let original = fs::read(path).map_err(|e| SessionError::Read(path.to_path_buf(), e))?;
    let (patched, stats) = patch_content(palette, &original);

    let write_err = |e: std::io::Error| SessionError::Write(path.to_path_buf(), e);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(mode == WriteMode::Truncate)
        .open(path)
        .map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&patched).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    if mode == WriteMode::Overwrite && patched.len() < original.len() {
        tracing::warn!(
            path = %path.display(),
            stale_bytes = original.len() - patched.len(),
            "session shrank; old trailing bytes left in place"
        );
    }
    tracing::debug!(
        path = %path.display(),
        lines = stats.lines,
        matched = stats.matched,
        "patched session"
    );
    Ok(stats)
}
