//! qrstamp - URL to timestamped QR-code PNG
//!
//! This library validates a URL, encodes it as a QR symbol, rasterizes the
//! symbol with configurable colors, and writes the result to disk as a PNG.
//!
//! # Features
//!
//! - **Validation**: syntactic URL checking before any encoding work
//! - **Auto-fit encoding**: version 1 requested as a floor, grown on demand
//! - **Rendering**: CSS color names for module and background colors
//!
//! # Example
//!
//! ```no_run
//! use qrstamp::{RenderOptions, generate};
//! use std::path::Path;
//!
//! fn main() -> qrstamp::Result<()> {
//!     let options = RenderOptions::default();
//!     generate("https://example.com", Path::new("qr.png"), &options)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod qr;
pub mod validate;

// Re-exports for convenience
pub use config::{Config, LoggingOptions};
pub use error::{Error, Result};
pub use qr::{QrEncoder, RenderOptions};
pub use validate::validate_url;

use image::{ImageFormat, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Run the whole pipeline for one URL: validate, encode, render, write.
///
/// Validation failure short-circuits before any encoding work, so no file
/// (partial or otherwise) is produced for a rejected URL. Every failure mode
/// comes back as a typed [`Error`]; nothing is logged here, the caller
/// decides how to report the outcome.
pub fn generate(url: &str, path: &Path, options: &RenderOptions) -> Result<()> {
    validate::validate_url(url)?;

    let encoder = QrEncoder::new();
    let code = encoder.encode(url)?;
    let image = encoder.render(&code, options)?;

    write_png(&image, path)
}

/// Write `image` to `path` as PNG, creating or truncating the file.
///
/// The handle is scoped to this function, so it is closed on every exit
/// path, including mid-write errors.
fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}
