//! Per-file conversion.
//!
//! One call to [`convert_file`] is one job: decode the source, normalize it
//! to RGBA, clamp the longer side, and write `<stem>.webp` into the output
//! directory. Jobs share nothing, so the order they run in does not matter.
//!
//! ## Failure handling
//!
//! A job never returns an error. Every path ends in an [`Outcome`]:
//!
//! | Stage | Failure | Outcome |
//! |---|---|---|
//! | decode | unreadable, corrupt, unsupported | [`Outcome::SkippedDecode`] |
//! | create output dir | permissions, path is a file | [`Outcome::FailedEncode`] |
//! | encode / write | encoder rejection, write error | [`Outcome::FailedEncode`] |
//!
//! The caller turns outcomes into log lines; they never steer the run.

use crate::imaging::{Dimensions, EncodeParams, ImageBackend, clamp_to_max_side};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of every output file.
pub const OUTPUT_EXTENSION: &str = "webp";

/// A successfully written output.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    pub source_name: String,
    pub output_name: String,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the written file in bytes.
    pub bytes: u64,
}

impl ConvertedFile {
    /// Output size in mebibytes (1024²).
    pub fn size_mib(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Result of one conversion job.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(ConvertedFile),
    SkippedDecode { source_name: String, reason: String },
    FailedEncode { source_name: String, reason: String },
}

impl Outcome {
    pub fn source_name(&self) -> &str {
        match self {
            Outcome::Converted(file) => &file.source_name,
            Outcome::SkippedDecode { source_name, .. } => source_name,
            Outcome::FailedEncode { source_name, .. } => source_name,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Destination for `source`: `out_dir/<source stem>.webp`.
///
/// Only the final extension of the source is replaced, so dots inside the
/// stem survive.
pub fn output_path(source: &Path, out_dir: &Path) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    out_dir.join(name)
}

/// Convert one source image. See the [module docs](self) for outcomes.
pub fn convert_file(
    backend: &impl ImageBackend,
    source: &Path,
    out_dir: &Path,
    params: &EncodeParams,
) -> Outcome {
    let source_name = display_name(source);

    let image = match backend.load(source) {
        Ok(image) => image,
        Err(e) => {
            return Outcome::SkippedDecode {
                source_name,
                reason: e.to_string(),
            };
        }
    };

    let original = Dimensions::of(&image);
    let image = match clamp_to_max_side(original, params.max_side) {
        Some(target) => {
            log::debug!(
                "{source_name}: resizing {}x{} -> {}x{}",
                original.width,
                original.height,
                target.width,
                target.height
            );
            backend.resize(&image, target)
        }
        None => image,
    };
    let final_dims = Dimensions::of(&image);

    if let Err(e) = fs::create_dir_all(out_dir) {
        return Outcome::FailedEncode {
            source_name,
            reason: format!("cannot create {}: {e}", out_dir.display()),
        };
    }

    let output = output_path(source, out_dir);
    match backend.encode(&image, &output, params) {
        Ok(bytes) => Outcome::Converted(ConvertedFile {
            source_name,
            output_name: display_name(&output),
            output_path: output,
            width: final_dims.width,
            height: final_dims.height,
            bytes,
        }),
        Err(e) => Outcome::FailedEncode {
            source_name,
            reason: e.to_string(),
        },
    }
}
