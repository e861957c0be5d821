/// Paint command set applied to icon canvases

use image::RgbaImage;

use crate::font::SizedFont;
use crate::rendering::layout::{layout_text, Rect};
use crate::rendering::raster;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    RoundedRect {
        rect: Rect,
        radius: u32,
        rgba: [u8; 4],
    },
    /// Text whose line box has its top-left at `(x, y)`
    Text {
        x: i32,
        y: i32,
        text: String,
        rgba: [u8; 4],
    },
}

/// Apply `commands` in order. Text commands need a font; without one they
/// are skipped.
pub fn paint(canvas: &mut RgbaImage, commands: &[PaintCommand], font: Option<&SizedFont>) {
    for cmd in commands {
        match cmd {
            PaintCommand::RoundedRect { rect, radius, rgba } => {
                raster::fill_rounded_rect(canvas, *rect, *radius, *rgba);
            }
            PaintCommand::Text { x, y, text, rgba } => {
                let Some(font) = font else {
                    log::warn!("no font for text command {text:?}; skipped");
                    continue;
                };
                let glyphs = layout_text(font, text, (*x as f32, *y as f32));
                raster::draw_glyphs(canvas, font, &glyphs, *rgba);
            }
        }
    }
}
