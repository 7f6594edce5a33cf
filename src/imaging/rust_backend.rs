//! Production image backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, WebP) | `image::ImageReader` with format sniffing, limits lifted |
//! | Normalize | `DynamicImage::into_rgba8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → WebP | `webp` (libwebp), `method = 6`, lossy or lossless |
//!
//! The `image` crate's own WebP encoder is lossless-only and has no effort
//! setting, so encoding goes through libwebp.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::EncodeParams;
use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// libwebp compression method: 0 is fastest, 6 is slowest with the best
/// compression.
const WEBP_METHOD: i32 = 6;

/// Backend built on the `image` crate for decoding and libwebp for encoding.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode RGBA pixels to an in-memory WebP stream.
fn encode_webp(image: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, BackendError> {
    let mut config = webp::WebPConfig::new()
        .map_err(|_| BackendError::Encode("libwebp refused to initialise a config".into()))?;
    config.quality = params.quality.value() as f32;
    config.method = WEBP_METHOD;
    if params.lossless {
        config.lossless = 1;
        // keep RGB under fully transparent pixels too
        config.exact = 1;
    }

    let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let encoded = encoder.encode_advanced(&config).map_err(|e| {
        BackendError::Encode(format!(
            "WebP encode failed ({}x{}): {e:?}",
            image.width(),
            image.height()
        ))
    })?;
    Ok(encoded.to_vec())
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let mut reader = ImageReader::open(path)?.with_guessed_format()?;
        // Full-resolution map renders exceed the default allocation cap.
        reader.no_limits();
        let img = reader
            .decode()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        log::trace!("{}: decoded as {:?}", path.display(), img.color());
        Ok(img.into_rgba8())
    }

    fn resize(&self, image: &RgbaImage, target: Dimensions) -> RgbaImage {
        image::imageops::resize(image, target.width, target.height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        image: &RgbaImage,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<u64, BackendError> {
        let data = encode_webp(image, params)?;
        write_replacing(output, &data)?;
        Ok(data.len() as u64)
    }
}

/// Write `data` to a sibling `.part` file, then rename it over `output`.
///
/// A failed write never leaves a truncated file under the final name. The
/// partial file is removed on failure.
fn write_replacing(output: &Path, data: &[u8]) -> std::io::Result<()> {
    let partial = partial_path(output);
    let result = std::fs::write(&partial, data)
        .and_then(|()| std::fs::rename(&partial, output));
    if result.is_err() {
        let _ = std::fs::remove_file(&partial);
    }
    result
}

fn partial_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
