//! The services a font leans on but does not implement
//!
//! - [`Typeface`] - a resolved face that can measure text
//! - [`TypefaceResolver`] - turns a [`Font`] request into a typeface
//! - [`FontEnumerator`] - lists installed families and their styles

use crate::Font;
use std::sync::Arc;

/// Glyph ids and horizontal offsets for a run of text
///
/// Offsets are in whatever units produced them: normalized (unit height)
/// when they come from a [`Typeface`], scaled once they pass through
/// [`Font::glyph_positions`]. A typeface usually reports one more offset
/// than glyphs, the last being the end of the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPositions {
    pub glyphs: Vec<u32>,
    pub x_offsets: Vec<f32>,
}

/// A resolved face capable of measuring text at unit height
///
/// All metrics are normalized: a font of height 1.0. [`Font`] scales them by
/// its height and horizontal scale.
///
/// ```ignore
/// struct FixedFace;
///
/// impl Typeface for FixedFace {
///     fn name(&self) -> &str { "Fixed" }
///     fn style(&self) -> &str { "Regular" }
///     fn ascent(&self) -> f32 { 0.8 }
///     fn string_width(&self, text: &str) -> f32 { text.chars().count() as f32 * 0.5 }
///     fn glyph_positions(&self, text: &str) -> GlyphPositions { /* ... */ }
/// }
/// ```
pub trait Typeface: Send + Sync {
    /// Family name the face reports for itself
    fn name(&self) -> &str;

    /// Style name the face reports for itself
    fn style(&self) -> &str;

    /// Fraction of the font height above the baseline
    fn ascent(&self) -> f32;

    /// Advance width of `text` in normalized units
    fn string_width(&self, text: &str) -> f32;

    /// Glyphs and their normalized x offsets
    fn glyph_positions(&self, text: &str) -> GlyphPositions;

    /// Can this face still serve `font`?
    ///
    /// Cached faces are re-checked on every lookup, so a face can retire
    /// itself (say, after the system font set changed).
    fn is_suitable_for(&self, _font: &Font) -> bool {
        true
    }
}

/// Produces a typeface for a font request
///
/// Returning `None` for a well-formed request breaks the cache's contract;
/// [`crate::TypefaceCache`] panics on it. Implementations should fall back to
/// some face rather than give up.
///
/// Closures work too:
///
/// ```ignore
/// let cache = TypefaceCache::new(Arc::new(|font: &Font| {
///     Some(Arc::new(MyFace::for_font(font)) as Arc<dyn Typeface>)
/// }));
/// ```
pub trait TypefaceResolver: Send + Sync {
    fn resolve(&self, font: &Font) -> Option<Arc<dyn Typeface>>;
}

impl<F> TypefaceResolver for F
where
    F: Fn(&Font) -> Option<Arc<dyn Typeface>> + Send + Sync,
{
    fn resolve(&self, font: &Font) -> Option<Arc<dyn Typeface>> {
        self(font)
    }
}

/// Lists what is installed, for [`Font::find_fonts`]
pub trait FontEnumerator {
    fn family_names(&self) -> Vec<String>;

    fn styles_for_family(&self, family_name: &str) -> Vec<String>;
}
