/// Pixel-level drawing on RGBA canvases

use ab_glyph::{Font, Glyph};
use image::{Pixel, Rgba, RgbaImage};

use crate::font::SizedFont;
use crate::rendering::layout::Rect;

/// A fully transparent `size`×`size` canvas.
pub fn new_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Fill an inclusive box with rounded corners, clipped to the canvas.
///
/// Corner circles are centred `radius` pixels in from each side. A pixel is
/// filled when it lies within `radius` of the nearest circle centre; there
/// is no anti-aliasing, so every pixel is either the fill or untouched.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: u32, rgba: [u8; 4]) {
    if rect.x1 < rect.x0 || rect.y1 < rect.y0 {
        return;
    }
    let r = i64::from(radius);
    let (cx0, cx1) = (rect.x0 as i64 + r, rect.x1 as i64 - r);
    let (cy0, cy1) = (rect.y0 as i64 + r, rect.y1 as i64 - r);
    let r2 = r * r;

    let x_start = rect.x0.max(0) as u32;
    let y_start = rect.y0.max(0) as u32;
    let x_end = (rect.x1 as i64).min(canvas.width() as i64 - 1);
    let y_end = (rect.y1 as i64).min(canvas.height() as i64 - 1);
    if x_end < 0 || y_end < 0 {
        return;
    }

    let fill = Rgba(rgba);
    for y in y_start..=y_end as u32 {
        for x in x_start..=x_end as u32 {
            let (px, py) = (x as i64, y as i64);
            let dx = px - px.clamp(cx0.min(cx1), cx1.max(cx0));
            let dy = py - py.clamp(cy0.min(cy1), cy1.max(cy0));
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x, y, fill);
            }
        }
    }
}

/// Composite glyph coverage in `rgba` over the canvas.
pub fn draw_glyphs(canvas: &mut RgbaImage, font: &SizedFont, glyphs: &[Glyph], rgba: [u8; 4]) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for glyph in glyphs {
        let Some(outlined) = font.font.outline_glyph(glyph.clone()) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
        outlined.draw(|gx, gy, coverage| {
            let x = ox + gx as i32;
            let y = oy + gy as i32;
            if x < 0 || y < 0 || x >= w || y >= h {
                return;
            }
            let alpha = (f32::from(rgba[3]) * coverage.clamp(0.0, 1.0)).round() as u8;
            if alpha == 0 {
                return;
            }
            canvas
                .get_pixel_mut(x as u32, y as u32)
                .blend(&Rgba([rgba[0], rgba[1], rgba[2], alpha]));
        });
    }
}
