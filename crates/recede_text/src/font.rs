//! Font loading and metrics
//!
//! A font is loaded once (from a file path or by querying installed
//! families through fontdb) and validated with ttf-parser. Sizes are
//! applied by deriving immutable [`SizedFont`] values; nothing is ever
//! resized in place.

use std::path::PathBuf;
use std::sync::Arc;

use crate::{Result, TextError};

/// Where a font comes from
#[derive(Debug, Clone)]
pub enum FontSource {
    /// A TTF/OTF file on disk
    Path(PathBuf),
    /// An installed font family, resolved through fontdb
    /// (falls back to the system sans-serif if the name has no match)
    Family(String),
}

/// Vertical font metrics in font units
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
}

impl FontMetrics {
    /// Font-units-to-pixels scale at the given size
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em as f32
    }

    pub fn ascender_px(&self, font_size: f32) -> f32 {
        self.ascender as f32 * self.scale(font_size)
    }

    pub fn descender_px(&self, font_size: f32) -> f32 {
        self.descender as f32 * self.scale(font_size)
    }

    /// Height of a rendered line of text at the given size
    pub fn line_height_px(&self, font_size: f32) -> f32 {
        (self.ascender as f32 - self.descender as f32 + self.line_gap as f32)
            * self.scale(font_size)
    }
}

/// Parsed font data, shared between every size derived from it
#[derive(Debug, Clone)]
pub struct FontData {
    data: Arc<Vec<u8>>,
    face_index: u32,
    metrics: FontMetrics,
}

impl FontData {
    /// Load a font from its source. A missing file or an unmatched
    /// family is fatal; there is no fallback font.
    pub fn load(source: &FontSource) -> Result<Self> {
        match source {
            FontSource::Path(path) => {
                let data = std::fs::read(path).map_err(|e| {
                    TextError::FontLoad(format!("{}: {}", path.display(), e))
                })?;
                tracing::info!("loaded font file {} ({} bytes)", path.display(), data.len());
                Self::from_bytes(data, 0)
            }
            FontSource::Family(name) => {
                let mut db = fontdb::Database::new();
                db.load_system_fonts();
                let query = fontdb::Query {
                    families: &[fontdb::Family::Name(name), fontdb::Family::SansSerif],
                    ..fontdb::Query::default()
                };
                let id = db
                    .query(&query)
                    .ok_or_else(|| TextError::FamilyNotFound(name.clone()))?;
                let loaded = db
                    .with_face_data(id, |data, face_index| (data.to_vec(), face_index))
                    .ok_or_else(|| TextError::FamilyNotFound(name.clone()))?;
                tracing::info!("resolved font family '{}' via fontdb", name);
                Self::from_bytes(loaded.0, loaded.1)
            }
        }
    }

    /// Parse and validate raw font bytes
    pub fn from_bytes(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| TextError::FontParse(e.to_string()))?;

        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
        };

        // Shaping also parses the face independently; reject fonts it
        // cannot handle up front so later stages never fail.
        if rustybuzz::Face::from_slice(&data, face_index).is_none() {
            return Err(TextError::InvalidFontData);
        }

        Ok(Self {
            data: Arc::new(data),
            face_index,
            metrics,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Derive an immutable font-at-size value
    pub fn at_size(&self, font_size: f32) -> SizedFont {
        SizedFont {
            data: Arc::clone(&self.data),
            face_index: self.face_index,
            metrics: self.metrics,
            font_size,
        }
    }
}

/// A font fixed at one pixel size
///
/// Created once per required size and never mutated, so two stages can
/// hold different sizes of the same font without interfering.
#[derive(Debug, Clone)]
pub struct SizedFont {
    data: Arc<Vec<u8>>,
    face_index: u32,
    metrics: FontMetrics,
    font_size: f32,
}

impl SizedFont {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn ascender_px(&self) -> f32 {
        self.metrics.ascender_px(self.font_size)
    }

    pub fn line_height_px(&self) -> f32 {
        self.metrics.line_height_px(self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_fatal() {
        let source = FontSource::Path(PathBuf::from("/nonexistent/font.ttf"));
        assert!(matches!(FontData::load(&source), Err(TextError::FontLoad(_))));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        assert!(matches!(
            FontData::from_bytes(vec![0u8; 64], 0),
            Err(TextError::FontParse(_))
        ));
    }

    #[test]
    fn metrics_scale_is_linear_in_size() {
        let metrics = FontMetrics {
            units_per_em: 1000,
            ascender: 800,
            descender: -200,
            line_gap: 0,
        };
        assert_eq!(metrics.ascender_px(10.0), 8.0);
        assert_eq!(metrics.ascender_px(20.0), 16.0);
        assert_eq!(metrics.line_height_px(10.0), 10.0);
        assert_eq!(metrics.descender_px(10.0), -2.0);
    }
}
