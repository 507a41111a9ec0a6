//! The record a [`crate::Font`] shares between its copies

use crate::traits::Typeface;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Everything that describes a font, plus what has been learned about it
///
/// Identity is (height, underline, horizontal scale, kerning, family, style).
/// The resolved typeface and ascent ratio are lookups remembered along the
/// way and never take part in equality.
pub struct FontAttributes {
    pub(crate) family_name: String,
    pub(crate) style_name: String,
    pub(crate) height: f32,
    pub(crate) horizontal_scale: f32,
    pub(crate) kerning: f32,
    pub(crate) underline: bool,
    resolved: Mutex<Resolved>,
}

/// Memoized lookups; `ascent == 0.0` means not computed yet
#[derive(Clone, Default)]
struct Resolved {
    typeface: Option<Arc<dyn Typeface>>,
    ascent: f32,
}

impl FontAttributes {
    pub(crate) fn new(family_name: String, style_name: String, height: f32) -> Self {
        Self {
            family_name,
            style_name,
            height,
            horizontal_scale: 1.0,
            kerning: 0.0,
            underline: false,
            resolved: Mutex::new(Resolved::default()),
        }
    }

    pub(crate) fn with_typeface(mut self, typeface: Option<Arc<dyn Typeface>>) -> Self {
        self.resolved.get_mut().typeface = typeface;
        self
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn horizontal_scale(&self) -> f32 {
        self.horizontal_scale
    }

    pub fn kerning(&self) -> f32 {
        self.kerning
    }

    pub fn underline(&self) -> bool {
        self.underline
    }

    /// The typeface remembered for this record, if any
    pub fn resolved_typeface(&self) -> Option<Arc<dyn Typeface>> {
        self.resolved.lock().typeface.clone()
    }

    /// Remembered ascent ratio, 0.0 when unknown
    pub fn cached_ascent_ratio(&self) -> f32 {
        self.resolved.lock().ascent
    }

    pub(crate) fn remember_typeface(&self, typeface: Arc<dyn Typeface>) {
        self.resolved.lock().typeface = Some(typeface);
    }

    pub(crate) fn remember_ascent_ratio(&self, ascent: f32) {
        self.resolved.lock().ascent = ascent;
    }

    /// Drop memos; called whenever family or style changes
    pub(crate) fn forget_resolved(&mut self) {
        *self.resolved.get_mut() = Resolved::default();
    }
}

impl Clone for FontAttributes {
    fn clone(&self) -> Self {
        Self {
            family_name: self.family_name.clone(),
            style_name: self.style_name.clone(),
            height: self.height,
            horizontal_scale: self.horizontal_scale,
            kerning: self.kerning,
            underline: self.underline,
            resolved: Mutex::new(self.resolved.lock().clone()),
        }
    }
}

impl PartialEq for FontAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.underline == other.underline
            && self.horizontal_scale == other.horizontal_scale
            && self.kerning == other.kerning
            && self.family_name == other.family_name
            && self.style_name == other.style_name
    }
}

impl fmt::Debug for FontAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = self.resolved.lock();
        f.debug_struct("FontAttributes")
            .field("family_name", &self.family_name)
            .field("style_name", &self.style_name)
            .field("height", &self.height)
            .field("horizontal_scale", &self.horizontal_scale)
            .field("kerning", &self.kerning)
            .field("underline", &self.underline)
            .field("typeface", &resolved.typeface.as_ref().map(|t| t.name().to_owned()))
            .field("ascent", &resolved.ascent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GlyphPositions;

    struct NamedFace;

    impl Typeface for NamedFace {
        fn name(&self) -> &str {
            "Named"
        }

        fn style(&self) -> &str {
            "Regular"
        }

        fn ascent(&self) -> f32 {
            0.75
        }

        fn string_width(&self, _text: &str) -> f32 {
            0.0
        }

        fn glyph_positions(&self, _text: &str) -> GlyphPositions {
            GlyphPositions::default()
        }
    }

    fn attrs() -> FontAttributes {
        FontAttributes::new("Serif".into(), "Bold".into(), 12.0)
    }

    #[test]
    fn test_equality_ignores_memos() {
        let a = attrs();
        let b = attrs();
        b.remember_typeface(Arc::new(NamedFace));
        b.remember_ascent_ratio(0.75);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_covers_every_identity_field() {
        let base = attrs();

        let mut other = attrs();
        other.kerning = 0.1;
        assert_ne!(base, other);

        let mut other = attrs();
        other.horizontal_scale = 0.5;
        assert_ne!(base, other);

        let mut other = attrs();
        other.underline = true;
        assert_ne!(base, other);

        let mut other = attrs();
        other.style_name = "Italic".into();
        assert_ne!(base, other);
    }

    #[test]
    fn test_clone_carries_memos() {
        let a = attrs();
        a.remember_typeface(Arc::new(NamedFace));
        a.remember_ascent_ratio(0.75);
        let b = a.clone();
        assert_eq!(b.cached_ascent_ratio(), 0.75);
        assert!(b.resolved_typeface().is_some());
    }

    #[test]
    fn test_forget_resolved() {
        let mut a = attrs().with_typeface(Some(Arc::new(NamedFace)));
        a.remember_ascent_ratio(0.75);
        a.forget_resolved();
        assert!(a.resolved_typeface().is_none());
        assert_eq!(a.cached_ascent_ratio(), 0.0);
    }
}
