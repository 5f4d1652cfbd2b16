//! Compose the `--version` text at build time.
//!
//! Emits `KITTY_COLOURS_GIT_DESCRIBE`, `KITTY_COLOURS_BUILD_DATE` and the
//! combined `KITTY_COLOURS_LONG_VERSION`. `SOURCE_DATE_EPOCH` pins the date
//! for reproducible builds; without git the commit reads "unknown".

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let commit = git_describe().unwrap_or_else(|| "unknown".to_string());
    let date = build_date();
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();

    println!("cargo:rustc-env=KITTY_COLOURS_GIT_DESCRIBE={commit}");
    println!("cargo:rustc-env=KITTY_COLOURS_BUILD_DATE={date}");
    println!("cargo:rustc-env=KITTY_COLOURS_LONG_VERSION={version} ({commit} {date})");
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;
    let described = String::from_utf8(output.stdout).ok()?;
    Some(described.trim().to_string()).filter(|s| !s.is_empty())
}

/// `YYYY-MM-DD` in UTC.
fn build_date() -> String {
    let secs = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let (y, m, d) = civil_from_days((secs / 86_400) as i64);
    format!("{y:04}-{m:02}-{d:02}")
}

/// Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
