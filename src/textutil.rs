//! Shared byte-oriented line splitting.
//!
//! Session files are edited on Windows as often as not. `\n` terminates a
//! line, one trailing `\r` is dropped, and a final terminator does not start
//! an extra empty line.

/// Iterate over the lines of `content` without their terminators.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let mut pieces = (!content.is_empty()).then(|| body.split(|&b| b == b'\n'));
    std::iter::from_fn(move || pieces.as_mut()?.next()).map(strip_cr)
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
