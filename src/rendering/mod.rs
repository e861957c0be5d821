//! Rendering: canvases, paint commands, glyph layout and PNG encoding

pub mod layout;
pub mod paint;
pub mod raster;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};

use crate::Result;

/// An encoded icon ready to be written to disk.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    /// File name inside the output directory
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    /// Hex SHA-256 of the PNG bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Encode a canvas as PNG.
pub fn encode_png(name: impl Into<String>, canvas: &RgbaImage) -> Result<RenderedIcon> {
    let mut png_data = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
    Ok(RenderedIcon {
        name: name.into(),
        width: canvas.width(),
        height: canvas.height(),
        png_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_icon_is_png() {
        let canvas = raster::new_canvas(16);
        let icon = encode_png("blank.png", &canvas).unwrap();
        assert_eq!(icon.name, "blank.png");
        assert_eq!((icon.width, icon.height), (16, 16));
        assert_eq!(&icon.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn digest_is_stable() {
        let canvas = raster::new_canvas(8);
        let a = encode_png("a.png", &canvas).unwrap();
        let b = encode_png("b.png", &canvas).unwrap();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);
    }
}
