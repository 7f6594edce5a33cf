//! # map-webp
//!
//! Batch converter for high-resolution map renders. Point it at a directory
//! of `*_High_Res.png` files and it writes one WebP per map, optionally
//! clamping the longest side and choosing lossy or lossless encoding.
//!
//! # Pipeline
//!
//! ```text
//! 1. Select    src/      →  [A_High_Res.png, ...]   (filename rule, one level)
//! 2. Convert   each file →  out/A_High_Res.webp     (decode → RGBA → clamp → WebP)
//! 3. Report    outcomes  →  stdout                  (one line per file + tally)
//! ```
//!
//! Jobs are independent and run sequentially. A file that cannot be decoded
//! or encoded is reported and skipped; the run as a whole still succeeds.
//! Only a missing source directory aborts it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`select`] | Filename rule and single-level directory scan |
//! | [`convert`] | One job: source path → [`convert::Outcome`] |
//! | [`imaging`] | Backend trait, resize math, `image` + libwebp implementation |
//! | [`run`] | Driver: validation, work list, progress, tally |
//! | [`config`] | Defaults, TOML config file, CLI overrides |
//! | [`progress`] | `indicatif` bar as an iteration decorator |
//! | [`output`] | User-facing line formatting |
//!
//! # Design Decisions
//!
//! ## Encode in Memory, Then Write
//!
//! libwebp encodes into a memory buffer and the file is written only after
//! the encoder returned successfully. A rejected image (for example wider
//! than WebP's 16383 pixel limit with resizing disabled) leaves no file
//! behind. The bytes go to a sibling `.part` file that is renamed into
//! place, so an interrupted or failed write never leaves a truncated
//! `.webp`. Existing outputs with the same name are replaced.
//!
//! ## Lossless Means Exact
//!
//! Lossless mode also sets libwebp's `exact` flag, so the RGB values under
//! fully transparent pixels survive. Decoding a lossless output gives back
//! the normalized, resized source pixel for pixel.

pub mod config;
pub mod convert;
pub mod imaging;
pub mod output;
pub mod progress;
pub mod run;
pub mod select;
