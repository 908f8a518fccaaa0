//! Effect configuration

use recede_text::FontSource;

/// Everything the effect needs, supplied programmatically (there is no
/// CLI or config-file surface)
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// The text block to scroll. May embed literal `\n` tokens as
    /// forced line breaks.
    pub text: String,
    /// Font file path or installed family name
    pub font: FontSource,
    /// Starting font size in pixels; lines render at this size and
    /// shrink geometrically as they rise
    pub start_font_size: u32,
    /// Text color as RGB
    pub font_color: [u8; 3],
    /// Logical surface dimensions
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Vertical gap between lines in pixels
    pub line_spacing: f32,
    /// Scroll speed multiplier; 1.0 scrolls 3 px/frame
    pub speed: f32,
}

impl EffectConfig {
    pub fn new(text: impl Into<String>, font: FontSource) -> Self {
        Self {
            text: text.into(),
            font,
            start_font_size: 60,
            font_color: [255, 255, 255],
            window_width: 800,
            window_height: 600,
            window_title: "recede".to_string(),
            line_spacing: 20.0,
            speed: 1.0,
        }
    }
}
