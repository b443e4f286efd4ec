//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::RenderOptions;
use image::{Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ecc_level: EcLevel,
    /// Smallest symbol version to request
    min_version: Version,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (version 1 minimum,
    /// Medium ECC)
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::M,
            min_version: Version::Normal(1),
        }
    }

    /// Encode data into a QR symbol.
    ///
    /// The configured minimum version is requested first; if the payload
    /// does not fit, the library picks the smallest version that does. The
    /// minimum is a floor, not a cap.
    pub fn encode(&self, data: &str) -> Result<QrCode> {
        match QrCode::with_version(data, self.min_version, self.ecc_level) {
            Ok(code) => Ok(code),
            Err(QrError::DataTooLong) => {
                Ok(QrCode::with_error_correction_level(data, self.ecc_level)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Rasterize a QR symbol into an RGBA bitmap.
    ///
    /// The image is `(modules + 2 * border) * box_size` pixels square:
    /// background-filled, with each dark module painted as a
    /// `box_size`-sided block inside the quiet zone. Color strings are
    /// parsed here so a bad name from the environment fails at render time.
    pub fn render(&self, code: &QrCode, options: &RenderOptions) -> Result<RgbaImage> {
        let fill = parse_color(&options.fill)?;
        let back = parse_color(&options.back)?;

        let modules = code.width() as u32;
        let side = (modules + 2 * options.border) * options.box_size;
        let mut image = RgbaImage::from_pixel(side, side, back);

        for (index, module) in code.to_colors().iter().enumerate() {
            if *module != qrcode::Color::Dark {
                continue;
            }
            let index = index as u32;
            let x0 = (index % modules + options.border) * options.box_size;
            let y0 = (index / modules + options.border) * options.box_size;
            for dy in 0..options.box_size {
                for dx in 0..options.box_size {
                    image.put_pixel(x0 + dx, y0 + dy, fill);
                }
            }
        }

        Ok(image)
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(name: &str) -> Result<Rgba<u8>> {
    let color = csscolorparser::parse(name).map_err(|e| Error::Color {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Rgba(color.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn short_payload_stays_at_version_one() {
        let encoder = QrEncoder::new();
        let code = encoder.encode("https://g.co").unwrap();
        // Version 1 symbols are 21 modules on a side.
        assert_eq!(code.width(), 21);
    }

    #[test]
    fn long_payload_grows_beyond_version_one() {
        let encoder = QrEncoder::new();
        let url = format!("https://example.com/{}", "a".repeat(120));
        let code = encoder.encode(&url).unwrap();
        assert!(code.width() > 21);
    }

    #[test]
    fn rendered_image_has_expected_geometry() {
        let encoder = QrEncoder::new();
        let code = encoder.encode("https://g.co").unwrap();
        let image = encoder.render(&code, &RenderOptions::default()).unwrap();
        // (21 modules + 2 * 5 border) * 10 px per module
        assert_eq!(image.width(), 310);
        assert_eq!(image.height(), 310);
    }

    #[test]
    fn quiet_zone_and_finder_pattern_use_configured_colors() {
        let encoder = QrEncoder::new();
        let code = encoder.encode("https://g.co").unwrap();
        let options = RenderOptions::default();
        let image = encoder.render(&code, &options).unwrap();

        // Quiet-zone corner is background; the top-left finder module is
        // dark in every QR symbol.
        assert_eq!(*image.get_pixel(0, 0), WHITE);
        let offset = options.border * options.box_size;
        assert_eq!(*image.get_pixel(offset, offset), BLACK);
    }

    #[test]
    fn custom_colors_are_applied() {
        let encoder = QrEncoder::new();
        let code = encoder.encode("https://g.co").unwrap();
        let options = RenderOptions::with_colors("red", "blue");
        let image = encoder.render(&code, &options).unwrap();

        assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
        let offset = options.border * options.box_size;
        assert_eq!(*image.get_pixel(offset, offset), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn unknown_color_name_is_rejected() {
        let encoder = QrEncoder::new();
        let code = encoder.encode("https://g.co").unwrap();
        let options = RenderOptions::with_colors("not-a-color", "white");
        match encoder.render(&code, &options) {
            Err(Error::Color { name, .. }) => assert_eq!(name, "not-a-color"),
            other => panic!("expected Color error, got {other:?}"),
        }
    }
}
