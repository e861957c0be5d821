/// Text measurement and centering

use ab_glyph::{point, Font, Glyph, ScaleFont};
use log::debug;

use crate::font::SizedFont;

/// Inclusive pixel box `[(x0, y0), (x1, y1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Inked extent of a laid-out string whose origin is at `(0, 0)`.
///
/// The origin is the top-left of the line box (ascender line), so `top` is
/// the distance from the ascender down to the highest inked pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphMetrics {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Position each glyph of `text`, with the line box's top-left at `origin`.
pub fn layout_text(font: &SizedFont, text: &str, origin: (f32, f32)) -> Vec<Glyph> {
    let scaled = font.scaled();
    let baseline = origin.1 + scaled.ascent();
    let mut caret = origin.0;
    let mut prev = None;
    let mut glyphs = Vec::with_capacity(text.len());

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(font.scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

/// Measure the inked bounding box of `text` laid out at the origin.
///
/// Strings without any outlines (e.g. whitespace) measure as all zeros.
pub fn measure_text(font: &SizedFont, text: &str) -> GlyphMetrics {
    let mut bounds: Option<GlyphMetrics> = None;
    for glyph in layout_text(font, text, (0.0, 0.0)) {
        let Some(outlined) = font.font.outline_glyph(glyph) else {
            continue;
        };
        let r = outlined.px_bounds();
        let g = GlyphMetrics {
            left: r.min.x as i32,
            top: r.min.y as i32,
            right: r.max.x as i32,
            bottom: r.max.y as i32,
        };
        bounds = Some(match bounds {
            None => g,
            Some(b) => GlyphMetrics {
                left: b.left.min(g.left),
                top: b.top.min(g.top),
                right: b.right.max(g.right),
                bottom: b.bottom.max(g.bottom),
            },
        });
    }
    let metrics = bounds.unwrap_or_default();
    debug!("measured {text:?}: {metrics:?}");
    metrics
}

/// Drawing origin that centres `metrics` on a square canvas.
///
/// The vertical offset cancels `top` so the ink is centred. The horizontal
/// bearing (`left`) is not subtracted, which keeps placement identical to
/// the icons this tool has always produced.
pub fn center_origin(canvas: u32, metrics: &GlyphMetrics) -> (i32, i32) {
    let size = canvas as i32;
    let x = (size - metrics.width()).div_euclid(2);
    let y = (size - metrics.height()).div_euclid(2) - metrics.top;
    (x, y)
}
