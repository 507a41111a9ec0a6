//! Typefaces backed by real font data
//!
//! Faces keep their raw bytes and parse a `FontRef` on demand, so a
//! collection (TTC) face is just the same bytes with a different index.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use fontres_core::error::{FontLoadError, Result};
use fontres_core::{GlyphPositions, Typeface};
use skrifa::instance::{LocationRef, Size};
use skrifa::raw::TableProvider;
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, MetadataProvider};

/// A face loaded from a font file or from memory
pub struct SystemTypeface {
    name: String,
    style: String,
    data: Arc<Vec<u8>>,
    face_index: u32,
    ascent: f32,
    /// Ascent minus descent, in font units
    height_units: f32,
}

impl SystemTypeface {
    /// Opens a font file and names the face from its `name` table
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens one face of a font collection
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = read_font_file(path.as_ref())?;
        let font = FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;
        let (name, style) = face_names(&font);
        Self::from_data(name, style, data, face_index)
    }

    /// Wraps face bytes under the given family and style names
    pub fn from_data(
        name: impl Into<String>,
        style: impl Into<String>,
        data: Vec<u8>,
        face_index: u32,
    ) -> Result<Self> {
        let font = FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        let units_per_em = font.head().ok().map(|head| head.units_per_em());
        let (ascent, height_units) = vertical_extent(metrics.ascent, metrics.descent, units_per_em);

        Ok(Self {
            name: name.into(),
            style: style.into(),
            data: Arc::new(data),
            face_index,
            ascent,
            height_units,
        })
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Advance of each character in font units, with its glyph id
    fn advances(&self, text: &str) -> Vec<(u32, f32)> {
        let Some(font) = self.font_ref() else {
            return Vec::new();
        };
        let charmap = font.charmap();
        let metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());

        text.chars()
            .map(|ch| {
                let glyph = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                let advance = metrics.advance_width(glyph).unwrap_or(0.0);
                (glyph.to_u32(), advance)
            })
            .collect()
    }
}

impl Typeface for SystemTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn style(&self) -> &str {
        &self.style
    }

    fn ascent(&self) -> f32 {
        self.ascent / self.height_units
    }

    fn string_width(&self, text: &str) -> f32 {
        let total: f32 = self.advances(text).iter().map(|(_, advance)| advance).sum();
        total / self.height_units
    }

    fn glyph_positions(&self, text: &str) -> GlyphPositions {
        let advances = self.advances(text);
        let mut positions = GlyphPositions {
            glyphs: Vec::with_capacity(advances.len()),
            x_offsets: Vec::with_capacity(advances.len() + 1),
        };

        let mut x = 0.0;
        positions.x_offsets.push(x);
        for (glyph, advance) in advances {
            x += advance / self.height_units;
            positions.glyphs.push(glyph);
            positions.x_offsets.push(x);
        }
        positions
    }
}

impl std::fmt::Debug for SystemTypeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemTypeface")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("face_index", &self.face_index)
            .finish_non_exhaustive()
    }
}

/// Clamped ascent and total height in font units
///
/// Broken vertical metrics (ascent not above descent) fall back to the em
/// square, or 1000 units when the face has no `head` table.
fn vertical_extent(ascent: f32, descent: f32, units_per_em: Option<u16>) -> (f32, f32) {
    let mut height_units = ascent - descent;
    if height_units <= 0.0 {
        height_units = units_per_em.map_or(1000.0, f32::from);
    }
    (ascent.max(0.0), height_units)
}

/// Font file bytes; only a missing file is `FileNotFound`, other failures stay I/O errors
pub(crate) fn read_font_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(FontLoadError::FileNotFound(path.display().to_string()).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Family and style names from the `name` table, typographic names first
pub(crate) fn face_names(font: &FontRef<'_>) -> (String, String) {
    let family = name_string(font, StringId::TYPOGRAPHIC_FAMILY_NAME)
        .or_else(|| name_string(font, StringId::FAMILY_NAME))
        .unwrap_or_default();
    let style = subfamily_name(font).unwrap_or_default();
    (family, style)
}

pub(crate) fn subfamily_name(font: &FontRef<'_>) -> Option<String> {
    name_string(font, StringId::TYPOGRAPHIC_SUBFAMILY_NAME)
        .or_else(|| name_string(font, StringId::SUBFAMILY_NAME))
}

fn name_string(font: &FontRef<'_>, id: StringId) -> Option<String> {
    let name: String = font.localized_strings(id).english_or_first()?.chars().collect();
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_owned())
}
