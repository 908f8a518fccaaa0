//! Line rasterization using swash
//!
//! Shapes a line, rasterizes each glyph to a grayscale alpha mask and
//! composites the masks into a single bitmap covering the whole line.
//! The bitmap is color-free; a tint is applied at blit time.

use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

use crate::font::SizedFont;
use crate::shaper::TextShaper;
use crate::{Result, TextError};

/// A rasterized line of text as a single-channel alpha bitmap
#[derive(Debug, Clone)]
pub struct LineBitmap {
    /// 8-bit coverage values, row-major, `width * height` bytes
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl LineBitmap {
    fn blank(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; (width * height) as usize],
            width,
            height,
        }
    }
}

/// Rasterizes shaped lines into [`LineBitmap`]s
pub struct LineRasterizer {
    /// Swash scale context (caches scaling state)
    scale_context: ScaleContext,
    shaper: TextShaper,
}

impl LineRasterizer {
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
            shaper: TextShaper::new(),
        }
    }

    /// Rasterize one line of text at the font's size
    ///
    /// The bitmap height is the font's line height and the baseline
    /// sits at the ascender, so every line of the same font has the
    /// same height regardless of content. An empty line produces a
    /// fully transparent 1px-wide bitmap of that height.
    pub fn rasterize_line(&mut self, font: &SizedFont, text: &str) -> Result<LineBitmap> {
        let shaped = self.shaper.shape(font, text)?;

        let height = font.line_height_px().ceil().max(1.0) as u32;
        let width = shaped.width.ceil().max(1.0) as u32;
        let baseline = font.ascender_px();

        let mut bitmap = LineBitmap::blank(width, height);
        if shaped.glyphs.is_empty() {
            return Ok(bitmap);
        }

        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font.font_size())
            .build();

        let mut render = Render::new(&[
            Source::ColorOutline(0),
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::Outline,
        ]);
        render.format(Format::Alpha);

        let mut pen_x = 0.0f32;
        for glyph in &shaped.glyphs {
            if let Some(image) = render.render(&mut scaler, glyph.glyph_id) {
                let left = (pen_x + glyph.x_offset).round() as i32 + image.placement.left;
                let top = (baseline - glyph.y_offset).round() as i32 - image.placement.top;
                composite_alpha(
                    &mut bitmap,
                    &image.data,
                    image.placement.width,
                    image.placement.height,
                    left,
                    top,
                );
            }
            pen_x += glyph.x_advance;
        }

        Ok(bitmap)
    }
}

impl Default for LineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Max-blend a glyph mask into the line bitmap, clipping to its bounds
fn composite_alpha(
    bitmap: &mut LineBitmap,
    mask: &[u8],
    mask_width: u32,
    mask_height: u32,
    left: i32,
    top: i32,
) {
    if mask_width == 0 || mask_height == 0 {
        return;
    }

    for row in 0..mask_height as i32 {
        let dst_y = top + row;
        if dst_y < 0 || dst_y >= bitmap.height as i32 {
            continue;
        }
        for col in 0..mask_width as i32 {
            let dst_x = left + col;
            if dst_x < 0 || dst_x >= bitmap.width as i32 {
                continue;
            }
            let src = mask[(row as u32 * mask_width + col as u32) as usize];
            let dst = &mut bitmap.data[(dst_y as u32 * bitmap.width + dst_x as u32) as usize];
            *dst = (*dst).max(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizer_creation() {
        let _rasterizer = LineRasterizer::new();
    }

    #[test]
    fn composite_clips_to_bitmap_bounds() {
        let mut bitmap = LineBitmap::blank(4, 4);
        // 2x2 mask hanging off the top-left corner
        composite_alpha(&mut bitmap, &[255, 255, 255, 255], 2, 2, -1, -1);
        assert_eq!(bitmap.data[0], 255);
        assert_eq!(bitmap.data.iter().filter(|&&v| v == 255).count(), 1);
    }

    #[test]
    fn composite_uses_max_blend() {
        let mut bitmap = LineBitmap::blank(2, 1);
        composite_alpha(&mut bitmap, &[200, 0], 2, 1, 0, 0);
        composite_alpha(&mut bitmap, &[100, 50], 2, 1, 0, 0);
        assert_eq!(bitmap.data, vec![200, 50]);
    }
}
