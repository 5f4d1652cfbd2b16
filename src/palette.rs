//! Theme-file parsing into a colour palette.
//!
//! A theme is a registry export from the base16-putty project. Only lines of
//! the exact form `"Colour<N>"="<R>,<G>,<B>"` carry colours; everything else
//! (section headers, comments, unrelated keys) is ignored.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::PaletteError;

/// Number of colour slots a complete theme defines.
pub const PALETTE_SIZE: usize = 22;

/// Mapping from slot name (`Colour0`..`Colour21`) to an `R,G,B` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colours: BTreeMap<String, String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour value for `slot`, if the theme defined one.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.colours.get(slot).map(String::as_str)
    }

    /// Insert or replace a slot. A later line for the same slot wins.
    pub fn insert(&mut self, slot: impl Into<String>, colour: impl Into<String>) {
        self.colours.insert(slot.into(), colour.into());
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colours.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for (slot, colour) in iter {
            palette.insert(slot, colour);
        }
        palette
    }
}

fn entry_regex() -> &'static Regex {
    static ENTRY: OnceLock<Regex> = OnceLock::new();
    ENTRY.get_or_init(|| {
        Regex::new(r#"^"Colour\d+"="\d+,\d+,\d+"$"#).expect("palette entry regex")
    })
}

/// Whether `line` is a full `"Colour<N>"="<R>,<G>,<B>"` entry.
///
/// Channel values are not range-checked.
pub fn is_palette_entry(line: &str) -> bool {
    entry_regex().is_match(line)
}

/// Split a matched entry into its unquoted slot name and colour value.
fn parse_entry(line: &str) -> Result<(&str, &str), PaletteError> {
    let (slot, colour) = line
        .split_once('=')
        .ok_or_else(|| PaletteError::InvalidEntry(line.to_string()))?;
    Ok((slot.trim_matches('"'), colour.trim_matches('"')))
}

/// Build a palette from in-memory theme content.
///
/// Returns whatever entries were found, possibly none; completeness is the
/// caller's decision.
pub fn parse_palette(content: &[u8]) -> Result<Palette, PaletteError> {
    read_palette(content, Path::new("<memory>"))
}

/// Scan theme lines from `reader` one at a time. `source` names the input in
/// read errors.
pub fn read_palette<R: BufRead>(reader: R, source: &Path) -> Result<Palette, PaletteError> {
    let mut palette = Palette::new();
    for raw in reader.split(b'\n') {
        let raw = raw.map_err(|e| PaletteError::Io(source.to_path_buf(), e))?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
        let line = String::from_utf8_lossy(raw);
        if !is_palette_entry(&line) {
            continue;
        }
        let (slot, colour) = parse_entry(&line)?;
        palette.insert(slot, colour);
    }
    Ok(palette)
}

/// Read and parse the theme file at `path`.
pub fn load_palette(path: &Path) -> Result<Palette, PaletteError> {
    let file = File::open(path).map_err(|e| PaletteError::Io(path.to_path_buf(), e))?;
    let palette = read_palette(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), entries = palette.len(), "loaded palette");
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{full_theme, TestTempDir};

    #[test]
    fn entry_predicate_accepts_well_formed_lines() {
        assert!(is_palette_entry(r#""Colour0"="0,0,0""#));
        assert!(is_palette_entry(r#""Colour21"="255,255,255""#));
        // No range check at this stage.
        assert!(is_palette_entry(r#""Colour7"="999,1,0001""#));
    }

    #[test]
    fn entry_predicate_rejects_near_misses() {
        for line in [
            r#"; "Colour0"="0,0,0""#,
            r#""Colour0"="0,0,0" "#,
            r#" "Colour0"="0,0,0""#,
            r#""Colour"="0,0,0""#,
            r#""Colour0"="0,0""#,
            r#""Colour0"="0,0,0,0""#,
            r##""Colour0"="#ffffff""##,
            r#""colour0"="0,0,0""#,
            r#""Colour0"=dword:00000000"#,
            r#""Font"="Consolas""#,
            "[HKEY_CURRENT_USER\\Software\\SimonTatham\\PuTTY\\Sessions\\base16-ocean]",
            "",
        ] {
            assert!(!is_palette_entry(line), "accepted {line:?}");
        }
    }

    #[test]
    fn parse_entry_unquotes_both_halves() {
        assert_eq!(
            parse_entry(r#""Colour3"="1,2,3""#).unwrap(),
            ("Colour3", "1,2,3")
        );
    }

    #[test]
    fn parse_entry_without_separator_is_an_error() {
        assert!(matches!(
            parse_entry(r#""Colour3""#),
            Err(PaletteError::InvalidEntry(line)) if line == r#""Colour3""#
        ));
    }

    #[test]
    fn full_theme_yields_every_slot_and_ignores_other_lines() {
        let palette = parse_palette(full_theme().as_bytes()).unwrap();
        assert_eq!(palette.len(), PALETTE_SIZE);
        assert_eq!(palette.get("Colour0"), Some("0,0,0"));
        assert_eq!(palette.get("Colour21"), Some("255,255,255"));
        assert!(palette.iter().all(|(k, v)| !k.contains('"') && !v.contains('"')));
    }

    #[test]
    fn partial_theme_loads_without_error() {
        let content = "; base16\n\"Colour0\"=\"1,2,3\"\n\"Colour1\"=\"4,5,6\"\n";
        let palette = parse_palette(content.as_bytes()).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("Colour1"), Some("4,5,6"));
    }

    #[test]
    fn windows_line_endings_and_stray_bytes_are_tolerated() {
        let mut content = b"Windows Registry Editor Version 5.00\r\n".to_vec();
        content.extend_from_slice(b"\"Author\"=\"\xe9\xff\"\r\n");
        content.extend_from_slice(b"\"Colour4\"=\"10,20,30\"\r\n");
        let palette = parse_palette(&content).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get("Colour4"), Some("10,20,30"));
    }

    #[test]
    fn empty_content_yields_empty_palette() {
        assert!(parse_palette(b"").unwrap().is_empty());
    }

    #[test]
    fn read_errors_name_the_source() {
        // Lossy decoding never fails; only the reader itself can.
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }
        let err = read_palette(BufReader::new(Failing), Path::new("x.reg")).unwrap_err();
        assert_eq!(err.to_string(), "x.reg: disk gone");
    }

    #[test]
    fn load_palette_reads_from_disk() {
        let tmp = TestTempDir::new("palette-load");
        let path = tmp.write_text("base16-ocean.reg", &full_theme());
        let palette = load_palette(&path).unwrap();
        assert_eq!(palette.len(), PALETTE_SIZE);
    }

    #[test]
    fn load_palette_missing_file_propagates_io_error() {
        let tmp = TestTempDir::new("palette-missing");
        let path = tmp.child("base16-nope.reg");
        let err = load_palette(&path).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::Io(ref p, ref e) if p == &path && e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
