//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Scale a length by `scale`, rounding half up, never below one pixel.
fn scale_edge(edge: u32, scale: f64) -> u32 {
    ((edge as f64 * scale + 0.5).floor() as u32).max(1)
}

/// Calculate the dimensions after clamping the longer side to `max_side`.
///
/// Returns `None` when no resize is needed: either `max_side` is `0`
/// (clamp disabled) or the longer side already fits.
///
/// Both edges are scaled by `max_side / longer_side` and rounded half up, so
/// the longer edge lands on `max_side` and the aspect ratio is kept within
/// one pixel.
///
/// # Examples
/// ```
/// # use map_webp::imaging::{Dimensions, clamp_to_max_side};
/// let big = Dimensions { width: 16000, height: 8000 };
/// assert_eq!(
///     clamp_to_max_side(big, 8192),
///     Some(Dimensions { width: 8192, height: 4096 })
/// );
///
/// let small = Dimensions { width: 4096, height: 4096 };
/// assert_eq!(clamp_to_max_side(small, 8192), None);
/// ```
pub fn clamp_to_max_side(original: Dimensions, max_side: u32) -> Option<Dimensions> {
    let longer = original.longer_side();
    if max_side == 0 || longer <= max_side {
        return None;
    }

    let scale = max_side as f64 / longer as f64;
    Some(Dimensions {
        width: scale_edge(original.width, scale),
        height: scale_edge(original.height, scale),
    })
}
