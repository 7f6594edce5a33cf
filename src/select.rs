//! Source selection.
//!
//! The map asset tree ships several renders of every map side by side:
//!
//! ```text
//! Maps/
//! ├── Erangel_Main_High_Res.png          # annotated, full size  → converted
//! ├── Erangel_Main_No_Text_High_Res.png  # text-free render      → skipped
//! ├── Erangel_Main_Low_Res.png           # preview               → skipped
//! └── Extras/                            # never entered
//! ```
//!
//! Only plain files directly inside the source directory are considered. A
//! name is selected when it ends with [`HIGH_RES_SUFFIX`] and does not
//! contain [`NO_TEXT_MARKER`]. Everything else is omitted silently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix of the annotated full-resolution variant.
pub const HIGH_RES_SUFFIX: &str = "_High_Res.png";

/// Marker of the text-free sibling variant.
pub const NO_TEXT_MARKER: &str = "_No_Text_";

/// Whether a file name matches the conversion rule. Case-sensitive.
pub fn is_target(file_name: &str) -> bool {
    file_name.ends_with(HIGH_RES_SUFFIX) && !file_name.contains(NO_TEXT_MARKER)
}

// Both patterns are ASCII, so a lossy name matches exactly when the raw one
// does. Non-UTF-8 names stay selectable.
fn is_target_path(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| is_target(&n.to_string_lossy()))
}

/// Lazily yield matching files in directory-listing order.
///
/// Fails only if `src` itself cannot be listed. Entries that error while
/// iterating are skipped.
pub fn targets(src: &Path) -> io::Result<impl Iterator<Item = PathBuf>> {
    Ok(fs::read_dir(src)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            let keep = is_target_path(p);
            if !keep {
                log::trace!("not a conversion target: {}", p.display());
            }
            keep
        }))
}

/// Materialize [`targets`] so the caller can report a count before starting.
pub fn collect_targets(src: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(targets(src)?.collect())
}
