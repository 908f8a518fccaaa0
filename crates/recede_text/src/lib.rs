//! Text handling for the recede effect
//!
//! This crate provides:
//! - Font loading and parsing (TTF/OTF via ttf-parser, discovery via fontdb)
//! - Text shaping and measurement (HarfBuzz via rustybuzz)
//! - Line rasterization to alpha bitmaps (swash)
//! - Greedy word wrapping with forced-break tokens

pub mod font;
pub mod raster;
pub mod shaper;
pub mod wrap;

pub use font::{FontData, FontMetrics, FontSource, SizedFont};
pub use raster::{LineBitmap, LineRasterizer};
pub use shaper::{FontMeasurer, MeasureText, ShapedGlyph, ShapedLine, TextShaper};
pub use wrap::{wrap_lines, BREAK_TOKEN};

use thiserror::Error;

/// Text handling errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Failed to parse font: {0}")]
    FontParse(String),

    #[error("No installed font matches family '{0}'")]
    FamilyNotFound(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
