//! QR code encoding and rasterization
//!
//! This module turns a string into a QR module grid and paints that grid
//! into an RGBA bitmap with configurable colors, module size, and quiet
//! zone.

mod encoder;

pub use encoder::QrEncoder;

/// Rendering parameters for rasterizing a QR symbol to a bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Image pixels per QR module
    pub box_size: u32,
    /// Quiet-zone width around the symbol, in modules
    pub border: u32,
    /// Module (dark) color, any CSS color string
    pub fill: String,
    /// Background (light) color, any CSS color string
    pub back: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 5,
            fill: "black".to_string(),
            back: "white".to_string(),
        }
    }
}

impl RenderOptions {
    /// Default geometry with the given fill and background colors.
    pub fn with_colors(fill: &str, back: &str) -> Self {
        Self {
            fill: fill.to_string(),
            back: back.to_string(),
            ..Self::default()
        }
    }
}
