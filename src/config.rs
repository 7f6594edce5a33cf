//! Run configuration.
//!
//! Options come from three layers, later layers winning:
//!
//! ```text
//! stock defaults  →  --config <file>.toml  →  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! src = "api-assets-master/Assets/Maps"  # Directory holding *_High_Res.png
//! out = "converted-webp"                 # Output directory (created if absent)
//! quality = 70                           # WebP quality, 0-100
//! max_size = 8192                        # Clamp the longest side (0 = keep original size)
//! lossless = false                       # Lossless WebP (larger files)
//! progress = true                        # Show the progress bar
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{EncodeParams, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Effective configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Source directory scanned (non-recursively) for targets.
    pub src: PathBuf,
    /// Output directory for `.webp` files.
    pub out: PathBuf,
    /// WebP quality (lossy fidelity or lossless effort).
    pub quality: u32,
    /// Longest-side clamp in pixels; `0` keeps the original size.
    pub max_size: u32,
    /// Encode lossless instead of lossy.
    pub lossless: bool,
    /// Draw the progress bar.
    pub progress: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            src: PathBuf::from("api-assets-master/Assets/Maps"),
            out: PathBuf::from("converted-webp"),
            quality: 70,
            max_size: 8192,
            lossless: false,
            progress: true,
        }
    }
}

impl ConvertConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quality > 100 {
            return Err(ConfigError::Validation("quality must be 0-100".into()));
        }
        Ok(())
    }

    /// The encoding parameters shared by every job of the run.
    pub fn encode_params(&self) -> EncodeParams {
        EncodeParams {
            quality: Quality::new(self.quality),
            max_side: self.max_size,
            lossless: self.lossless,
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(src) = &overrides.src {
            self.src = src.clone();
        }
        if let Some(out) = &overrides.out {
            self.out = out.clone();
        }
        if let Some(quality) = overrides.quality {
            self.quality = quality;
        }
        if let Some(max_size) = overrides.max_size {
            self.max_size = max_size;
        }
        if let Some(lossless) = overrides.lossless {
            self.lossless = lossless;
        }
        if let Some(progress) = overrides.progress {
            self.progress = progress;
        }
        self
    }
}

/// Values given explicitly on the command line. `None` leaves the lower
/// layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub src: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub quality: Option<u32>,
    pub max_size: Option<u32>,
    pub lossless: Option<bool>,
    pub progress: Option<bool>,
}

/// Parse a config file. Missing keys take stock defaults.
pub fn load_config_file(path: &Path) -> Result<ConvertConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ConvertConfig = toml::from_str(&content)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Build the effective config: stock defaults, then the optional file, then
/// command-line overrides. The result is validated.
pub fn resolve(file: Option<&Path>, overrides: &Overrides) -> Result<ConvertConfig, ConfigError> {
    let base = match file {
        Some(path) => load_config_file(path)?,
        None => ConvertConfig::default(),
    };
    let config = base.with_overrides(overrides);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all default values.
///
/// Parsing this string yields exactly [`ConvertConfig::default`].
pub fn stock_config_toml() -> &'static str {
    r#"# map-webp configuration
# All options are optional. Command-line flags override values set here.

# Directory holding the *_High_Res.png map renders. Only files directly
# inside it are considered; *_No_Text_* variants are skipped.
src = "api-assets-master/Assets/Maps"

# Output directory. Created (with parents) on the first successful decode.
out = "converted-webp"

# WebP quality, 0-100. Lossy: fidelity. Lossless: compression effort.
quality = 70

# Clamp the longest image side to this many pixels. 0 keeps the original size.
max_size = 8192

# Lossless WebP. Exact pixels, larger files.
lossless = false

# Show the progress bar (hidden automatically when stderr is not a terminal).
progress = true
"#
}
