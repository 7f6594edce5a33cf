//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three steps every conversion is
//! made of: load (decode + RGBA normalization), resize, and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend). Tests drive the
//! conversion logic through a recording mock instead.

use super::params::EncodeParams;
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Encode(String),
}

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    pub fn longer_side(self) -> u32 {
        self.width.max(self.height)
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode an image and normalize it to 8-bit RGBA.
    ///
    /// Opaque sources gain a fully opaque alpha channel; existing alpha is kept.
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Resample to exactly `target` with a high-quality filter.
    fn resize(&self, image: &RgbaImage, target: Dimensions) -> RgbaImage;

    /// Encode `image` to WebP at `output`, returning the bytes written.
    ///
    /// A file appears at `output` only when encoding and writing both
    /// succeeded.
    fn encode(
        &self,
        image: &RgbaImage,
        output: &Path,
        params: &EncodeParams,
    ) -> Result<u64, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::Quality;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Mock backend that records operations without touching codecs.
    ///
    /// `load` answers from a table keyed by file name; unknown names fail as
    /// undecodable. `encode` fails for the file names listed in
    /// `encode_failures` and otherwise reports a fixed byte count.
    #[derive(Default)]
    pub struct MockBackend {
        pub sources: HashMap<String, Dimensions>,
        pub encode_failures: Vec<String>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Load(String),
        Resize {
            width: u32,
            height: u32,
        },
        Encode {
            output: PathBuf,
            width: u32,
            height: u32,
            quality: u32,
            lossless: bool,
        },
    }

    pub const MOCK_ENCODED_BYTES: u64 = 3 * 1024 * 1024;

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_source(mut self, name: &str, width: u32, height: u32) -> Self {
            self.sources
                .insert(name.to_string(), Dimensions { width, height });
            self
        }

        pub fn failing_encode(mut self, output_name: &str) -> Self {
            self.encode_failures.push(output_name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    impl ImageBackend for MockBackend {
        fn load(&self, path: &Path) -> Result<RgbaImage, BackendError> {
            let name = file_name(path);
            self.operations
                .borrow_mut()
                .push(RecordedOp::Load(name.clone()));

            self.sources
                .get(&name)
                .map(|d| RgbaImage::new(d.width, d.height))
                .ok_or_else(|| BackendError::Decode(format!("not a mock source: {name}")))
        }

        fn resize(&self, _image: &RgbaImage, target: Dimensions) -> RgbaImage {
            self.operations.borrow_mut().push(RecordedOp::Resize {
                width: target.width,
                height: target.height,
            });
            RgbaImage::new(target.width, target.height)
        }

        fn encode(
            &self,
            image: &RgbaImage,
            output: &Path,
            params: &EncodeParams,
        ) -> Result<u64, BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Encode {
                output: output.to_path_buf(),
                width: image.width(),
                height: image.height(),
                quality: params.quality.value(),
                lossless: params.lossless,
            });

            if self.encode_failures.contains(&file_name(output)) {
                return Err(BackendError::Encode("mock encoder rejected".to_string()));
            }
            Ok(MOCK_ENCODED_BYTES)
        }
    }

    #[test]
    fn mock_records_load() {
        let backend = MockBackend::new().with_source("A_High_Res.png", 800, 600);

        let img = backend.load(Path::new("/maps/A_High_Res.png")).unwrap();
        assert_eq!(
            Dimensions::of(&img),
            Dimensions {
                width: 800,
                height: 600
            }
        );

        let ops = backend.get_operations();
        assert_eq!(ops, vec![RecordedOp::Load("A_High_Res.png".to_string())]);
    }

    #[test]
    fn mock_unknown_source_fails_decode() {
        let backend = MockBackend::new();
        let err = backend.load(Path::new("/maps/B_High_Res.png")).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn mock_records_encode() {
        let backend = MockBackend::new();
        let params = EncodeParams {
            quality: Quality::new(90),
            max_side: 0,
            lossless: true,
        };

        let written = backend
            .encode(&RgbaImage::new(4, 2), Path::new("/out/a.webp"), &params)
            .unwrap();
        assert_eq!(written, MOCK_ENCODED_BYTES);

        assert!(matches!(
            &backend.get_operations()[0],
            RecordedOp::Encode {
                width: 4,
                height: 2,
                quality: 90,
                lossless: true,
                ..
            }
        ));
    }

    #[test]
    fn longer_side_picks_max() {
        let tall = Dimensions {
            width: 3,
            height: 7,
        };
        let wide = Dimensions {
            width: 9,
            height: 7,
        };
        assert_eq!(tall.longer_side(), 7);
        assert_eq!(wide.longer_side(), 9);
    }
}
