//! Parameter types for the encode step.
//!
//! These structs describe *what* to produce, not *how*. They sit between the
//! [`convert`](crate::convert) module (which decides what each job needs) and
//! the [`backend`](super::backend) (which does the pixel and codec work).
//!
//! ## Types
//!
//! - [`Quality`]: WebP quality (0–100, default 70). Clamped on construction.
//! - [`EncodeParams`]: quality, longest-side clamp and lossless switch, shared
//!   by every job of a run.

/// WebP quality setting (0-100).
///
/// In lossy mode this is fidelity. In lossless mode libwebp reads it as
/// compression effort: output pixels are identical at any value, higher
/// values only spend more time for a smaller file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(70)
    }
}

/// Encoding parameters, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeParams {
    pub quality: Quality,
    /// Upper bound on the longer image side. `0` disables resizing.
    pub max_side: u32,
    pub lossless: bool,
}

impl EncodeParams {
    /// The clamp to apply, or `None` when resizing is disabled.
    pub fn resize_limit(&self) -> Option<u32> {
        (self.max_side > 0).then_some(self.max_side)
    }
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            max_side: 8192,
            lossless: false,
        }
    }
}
