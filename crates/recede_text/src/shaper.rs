//! Text shaping and measurement
//!
//! Shapes a single line of text with rustybuzz and converts advances
//! from font units to pixels. Width measurement for the word wrapper
//! goes through the [`MeasureText`] seam so the wrapper can be tested
//! without a real font.

use crate::font::SizedFont;
use crate::{Result, TextError};

/// A shaped glyph with pixel-space positioning
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// Horizontal offset from the pen position
    pub x_offset: f32,
    /// Vertical offset from the baseline
    pub y_offset: f32,
    /// Horizontal advance to the next pen position
    pub x_advance: f32,
}

/// A shaped line of glyphs
#[derive(Debug, Clone, Default)]
pub struct ShapedLine {
    pub glyphs: Vec<ShapedGlyph>,
    /// Sum of advances, i.e. the rendered width in pixels
    pub width: f32,
}

/// Shapes text at a fixed font size
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape one line of text (no newlines expected in the input)
    pub fn shape(&self, font: &SizedFont, text: &str) -> Result<ShapedLine> {
        if text.is_empty() {
            return Ok(ShapedLine::default());
        }

        let face = rustybuzz::Face::from_slice(font.data(), font.face_index())
            .ok_or(TextError::InvalidFontData)?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&face, &[], buffer);

        let scale = font.metrics().scale(font.font_size());
        let mut glyphs = Vec::with_capacity(output.len());
        let mut width = 0.0f32;

        for (info, pos) in output
            .glyph_infos()
            .iter()
            .zip(output.glyph_positions().iter())
        {
            glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
                x_advance: pos.x_advance as f32 * scale,
            });
            width += pos.x_advance as f32 * scale;
        }

        Ok(ShapedLine { glyphs, width })
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures the rendered pixel width of a piece of text
pub trait MeasureText {
    fn measure_width(&self, text: &str) -> Result<f32>;
}

/// [`MeasureText`] backed by a real font at a fixed size
pub struct FontMeasurer<'a> {
    shaper: TextShaper,
    font: &'a SizedFont,
}

impl<'a> FontMeasurer<'a> {
    pub fn new(font: &'a SizedFont) -> Self {
        Self {
            shaper: TextShaper::new(),
            font,
        }
    }
}

impl MeasureText for FontMeasurer<'_> {
    fn measure_width(&self, text: &str) -> Result<f32> {
        Ok(self.shaper.shape(self.font, text)?.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_has_zero_width() {
        let shaped = ShapedLine::default();
        assert!(shaped.glyphs.is_empty());
        assert_eq!(shaped.width, 0.0);
    }
}
