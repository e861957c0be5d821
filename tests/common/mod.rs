#![allow(dead_code)]

use appicon::font::system::system_database;
use appicon::font::{FixedFont, FontChain, FontResolver};
use image::{ImageFormat, RgbaImage};

pub const PURPLE: [u8; 4] = [94, 53, 177, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

pub fn fonts_installed() -> bool {
    system_database().faces().next().is_some()
}

/// The font the stock candidate chain picks on this machine.
///
/// `None` only when no font is installed at all; with any installed face
/// the default chain has to succeed.
pub fn system_font() -> Option<FixedFont> {
    if !fonts_installed() {
        return None;
    }
    let sized = FontChain::default()
        .resolve(614.0)
        .expect("default font chain must resolve when fonts are installed");
    Some(FixedFont::new(sized.font, sized.source))
}

pub fn decode(png: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(png, ImageFormat::Png)
        .expect("valid png")
        .to_rgba8()
}
