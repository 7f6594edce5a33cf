//! CLI output formatting.
//!
//! Every user-facing line starts with a bracketed tag so a run log can be
//! grepped by outcome:
//!
//! ```text
//! [info] Converting 3 images (quality=70, max=8192, lossless=false)
//! [ok] Erangel_Main_High_Res.png -> Erangel_Main_High_Res.webp (8192x8192) 7.43MB
//! [skip] Broken_High_Res.png: open failed: Format error decoding Png: ...
//! [fail] Huge_High_Res.png: WebP encode failed (20000x20000): VP8_ENC_ERROR_BAD_DIMENSION
//! [info] Done: 1 converted, 1 skipped, 1 failed
//! ```
//!
//! # Architecture
//!
//! Each line has a `format_*` function (pure, returns `String`) for
//! testability and, where the driver prints it outside the progress bar, a
//! `print_*` wrapper that writes to stdout.

use crate::convert::Outcome;
use crate::imaging::EncodeParams;
use crate::run::RunTally;
use std::fmt::Display;

/// Format a byte count as mebibytes with two decimals, e.g. `7.43MB`.
fn format_mib(mib: f64) -> String {
    format!("{mib:.2}MB")
}

/// `[error] <message>`
pub fn format_error(err: &impl Display) -> String {
    format!("[error] {err}")
}

pub fn format_no_targets() -> String {
    "[info] No High_Res targets found.".to_string()
}

/// Summary printed once before the first job.
pub fn format_run_header(count: usize, params: &EncodeParams) -> String {
    let max = match params.resize_limit() {
        Some(limit) => limit.to_string(),
        None => "original".to_string(),
    };
    format!(
        "[info] Converting {} images (quality={}, max={}, lossless={})",
        count,
        params.quality.value(),
        max,
        params.lossless
    )
}

/// One line per job.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Converted(file) => format!(
            "[ok] {} -> {} ({}x{}) {}",
            file.source_name,
            file.output_name,
            file.width,
            file.height,
            format_mib(file.size_mib())
        ),
        Outcome::SkippedDecode {
            source_name,
            reason,
        } => format!("[skip] {source_name}: open failed: {reason}"),
        Outcome::FailedEncode {
            source_name,
            reason,
        } => format!("[fail] {source_name}: {reason}"),
    }
}

/// Closing line with the per-outcome counts.
pub fn format_tally(tally: &RunTally) -> String {
    format!(
        "[info] Done: {} converted, {} skipped, {} failed",
        tally.converted, tally.skipped, tally.failed
    )
}

pub fn print_error(err: &impl Display) {
    println!("{}", format_error(err));
}

pub fn print_no_targets() {
    println!("{}", format_no_targets());
}

pub fn print_run_header(count: usize, params: &EncodeParams) {
    println!("{}", format_run_header(count, params));
}

// ============================================================================
// Tests
// ============================================================================
