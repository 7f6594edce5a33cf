//! Image processing: decode, resize, encode to WebP.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image` decoders, normalized to RGBA8 |
//! | **Resize** | Lanczos3 via `image::imageops::resize` |
//! | **Encode** | libwebp through the `webp` crate, method 6 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing the encode step
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::clamp_to_max_side;
pub use params::{EncodeParams, Quality};
pub use rust_backend::RustBackend;
