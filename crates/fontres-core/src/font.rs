//! Cheap, copy-on-write font descriptions
//!
//! A [`Font`] is a handle to a shared [`FontAttributes`] record. Cloning
//! shares the record; every mutator first makes the record private to the
//! handle (`Arc::make_mut`), so a change through one handle is never seen
//! through another.
//!
//! Anything that needs real glyph data (ascent, widths, glyph positions)
//! takes the [`TypefaceCache`] explicitly and memoizes the typeface it gets
//! back inside the record.

use crate::attributes::FontAttributes;
use crate::style::{flags_for_style_name, style_name_for_flags, StyleFlags};
use crate::traits::{FontEnumerator, GlyphPositions, Typeface};
use crate::typeface_cache::TypefaceCache;
use crate::{
    limit_font_height, DEFAULT_FONT_HEIGHT, DEFAULT_MONOSPACED_FONT_NAME,
    DEFAULT_SANS_SERIF_FONT_NAME, DEFAULT_SERIF_FONT_NAME, DEFAULT_STYLE,
};
use std::fmt;
use std::sync::Arc;

/// Description of how text should look
#[derive(Clone)]
pub struct Font {
    attrs: Arc<FontAttributes>,
}

impl Font {
    /// The default sans-serif placeholder family in the default style
    pub fn new() -> Self {
        Self::with_family_and_style(DEFAULT_SANS_SERIF_FONT_NAME, DEFAULT_STYLE, DEFAULT_FONT_HEIGHT)
    }

    /// Default family at `height`, with style flags applied
    pub fn with_height_and_style(height: f32, flags: StyleFlags) -> Self {
        Self::with_family(DEFAULT_SANS_SERIF_FONT_NAME, height, flags)
    }

    /// Named family at `height`, with style flags applied
    pub fn with_family(family_name: impl Into<String>, height: f32, flags: StyleFlags) -> Self {
        let mut font = Self::with_family_and_style(family_name, DEFAULT_STYLE, height);
        font.set_style_flags(flags);
        font
    }

    /// Default family with an explicit style name
    ///
    /// Use [`TypefaceCache::font_with_style`] to also pick up the cache's
    /// default typeface.
    pub fn styled(style_name: impl Into<String>, height: f32) -> Self {
        Self::with_family_and_style(DEFAULT_SANS_SERIF_FONT_NAME, style_name, height)
    }

    pub fn with_family_and_style(
        family_name: impl Into<String>,
        style_name: impl Into<String>,
        height: f32,
    ) -> Self {
        Self::from_attributes(FontAttributes::new(
            family_name.into(),
            style_name.into(),
            limit_font_height(height),
        ))
    }

    /// A font describing `typeface` itself, at the default height
    ///
    /// The typeface is remembered, so measuring never goes through a cache.
    pub fn from_typeface(typeface: Arc<dyn Typeface>) -> Self {
        let attrs = FontAttributes::new(
            typeface.name().to_owned(),
            typeface.style().to_owned(),
            DEFAULT_FONT_HEIGHT,
        );
        Self::from_attributes(attrs.with_typeface(Some(typeface)))
    }

    pub(crate) fn from_attributes(attrs: FontAttributes) -> Self {
        Self {
            attrs: Arc::new(attrs),
        }
    }

    /// One font per installed (family, style) pair, at the default height
    pub fn find_fonts(enumerator: &dyn FontEnumerator) -> Vec<Font> {
        let mut fonts = Vec::new();
        for family in enumerator.family_names() {
            for style in enumerator.styles_for_family(&family) {
                fonts.push(Self::with_family_and_style(
                    family.as_str(),
                    style,
                    DEFAULT_FONT_HEIGHT,
                ));
            }
        }
        fonts
    }

    // Placeholder names, resolved to real families by the resolver

    pub fn default_sans_serif_font_name() -> &'static str {
        DEFAULT_SANS_SERIF_FONT_NAME
    }

    pub fn default_serif_font_name() -> &'static str {
        DEFAULT_SERIF_FONT_NAME
    }

    pub fn default_monospaced_font_name() -> &'static str {
        DEFAULT_MONOSPACED_FONT_NAME
    }

    pub fn default_style() -> &'static str {
        DEFAULT_STYLE
    }

    // Read what's inside

    pub fn attributes(&self) -> &FontAttributes {
        &self.attrs
    }

    /// Do the two handles point at the same record?
    pub fn shares_attributes_with(&self, other: &Font) -> bool {
        Arc::ptr_eq(&self.attrs, &other.attrs)
    }

    pub fn typeface_name(&self) -> &str {
        &self.attrs.family_name
    }

    pub fn typeface_style(&self) -> &str {
        &self.attrs.style_name
    }

    pub fn height(&self) -> f32 {
        self.attrs.height
    }

    pub fn horizontal_scale(&self) -> f32 {
        self.attrs.horizontal_scale
    }

    pub fn extra_kerning_factor(&self) -> f32 {
        self.attrs.kerning
    }

    pub fn is_underlined(&self) -> bool {
        self.attrs.underline
    }

    /// Flags recognised from the style name, plus the underline bit
    pub fn style_flags(&self) -> StyleFlags {
        let mut flags = flags_for_style_name(&self.attrs.style_name);
        if self.attrs.underline {
            flags |= StyleFlags::UNDERLINED;
        }
        flags
    }

    pub fn is_bold(&self) -> bool {
        flags_for_style_name(&self.attrs.style_name).contains(StyleFlags::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        flags_for_style_name(&self.attrs.style_name).contains(StyleFlags::ITALIC)
    }

    // Change what's inside

    fn attrs_mut(&mut self) -> &mut FontAttributes {
        Arc::make_mut(&mut self.attrs)
    }

    pub fn set_typeface_name(&mut self, family_name: &str) {
        if family_name != self.attrs.family_name {
            let attrs = self.attrs_mut();
            attrs.family_name = family_name.to_owned();
            attrs.forget_resolved();
        }
    }

    pub fn set_typeface_style(&mut self, style_name: &str) {
        if style_name != self.attrs.style_name {
            let attrs = self.attrs_mut();
            attrs.style_name = style_name.to_owned();
            attrs.forget_resolved();
        }
    }

    pub fn set_height(&mut self, height: f32) {
        let height = limit_font_height(height);
        if self.attrs.height != height {
            self.attrs_mut().height = height;
        }
    }

    /// Changes the height while keeping rendered text the same width
    ///
    /// The horizontal scale absorbs the change: `scale *= old / new`.
    pub fn set_height_without_changing_width(&mut self, height: f32) {
        let height = limit_font_height(height);
        if self.attrs.height != height {
            let attrs = self.attrs_mut();
            attrs.horizontal_scale *= attrs.height / height;
            attrs.height = height;
        }
    }

    /// Rewrites the style name from bold/italic bits
    ///
    /// The underline bit can switch underlining on but never off.
    pub fn set_style_flags(&mut self, flags: StyleFlags) {
        if self.style_flags() == flags {
            return;
        }
        let attrs = self.attrs_mut();
        if flags.contains(StyleFlags::UNDERLINED) {
            attrs.underline = true;
        }
        attrs.style_name = style_name_for_flags(flags).to_owned();
        attrs.forget_resolved();
    }

    /// Sets height, scale and kerning in one go, then applies `flags`
    pub fn set_size_and_style(
        &mut self,
        height: f32,
        flags: StyleFlags,
        horizontal_scale: f32,
        kerning: f32,
    ) {
        self.set_size(height, horizontal_scale, kerning);
        self.set_style_flags(flags);
    }

    /// Sets height, scale and kerning in one go, then applies `style_name`
    pub fn set_size_and_style_name(
        &mut self,
        height: f32,
        style_name: &str,
        horizontal_scale: f32,
        kerning: f32,
    ) {
        self.set_size(height, horizontal_scale, kerning);
        self.set_typeface_style(style_name);
    }

    fn set_size(&mut self, height: f32, horizontal_scale: f32, kerning: f32) {
        let height = limit_font_height(height);
        if self.attrs.height != height
            || self.attrs.horizontal_scale != horizontal_scale
            || self.attrs.kerning != kerning
        {
            let attrs = self.attrs_mut();
            attrs.height = height;
            attrs.horizontal_scale = horizontal_scale;
            attrs.kerning = kerning;
        }
    }

    /// Always takes a private copy of the record, even for an unchanged value
    pub fn set_horizontal_scale(&mut self, scale: f32) {
        self.attrs_mut().horizontal_scale = scale;
    }

    /// Extra spacing per character, as a proportion of the height
    ///
    /// Like [`Font::set_horizontal_scale`], always takes a private copy.
    pub fn set_extra_kerning_factor(&mut self, kerning: f32) {
        self.attrs_mut().kerning = kerning;
    }

    pub fn set_underline(&mut self, underline: bool) {
        if self.attrs.underline != underline {
            self.attrs_mut().underline = underline;
        }
    }

    pub fn set_bold(&mut self, bold: bool) {
        let mut flags = self.style_flags();
        if bold {
            flags.insert(StyleFlags::BOLD);
        } else {
            flags.remove(StyleFlags::BOLD);
        }
        self.set_style_flags(flags);
    }

    pub fn set_italic(&mut self, italic: bool) {
        let mut flags = self.style_flags();
        if italic {
            flags.insert(StyleFlags::ITALIC);
        } else {
            flags.remove(StyleFlags::ITALIC);
        }
        self.set_style_flags(flags);
    }

    // Modified copies

    pub fn with_height(&self, height: f32) -> Font {
        let mut font = self.clone();
        font.set_height(height);
        font
    }

    pub fn with_style(&self, flags: StyleFlags) -> Font {
        let mut font = self.clone();
        font.set_style_flags(flags);
        font
    }

    pub fn with_horizontal_scale(&self, scale: f32) -> Font {
        let mut font = self.clone();
        font.set_horizontal_scale(scale);
        font
    }

    pub fn with_extra_kerning_factor(&self, kerning: f32) -> Font {
        let mut font = self.clone();
        font.set_extra_kerning_factor(kerning);
        font
    }

    pub fn boldened(&self) -> Font {
        self.with_style(self.style_flags() | StyleFlags::BOLD)
    }

    pub fn italicised(&self) -> Font {
        self.with_style(self.style_flags() | StyleFlags::ITALIC)
    }

    // Measuring

    /// The typeface for this font, resolved through `cache` on first use
    pub fn typeface(&self, cache: &TypefaceCache) -> Arc<dyn Typeface> {
        if let Some(typeface) = self.attrs.resolved_typeface() {
            return typeface;
        }
        let typeface = cache.find_typeface_for(self);
        self.attrs.remember_typeface(Arc::clone(&typeface));
        typeface
    }

    /// Distance from the baseline to the top, in the font's height units
    pub fn ascent(&self, cache: &TypefaceCache) -> f32 {
        let mut ratio = self.attrs.cached_ascent_ratio();
        if ratio == 0.0 {
            ratio = self.typeface(cache).ascent();
            self.attrs.remember_ascent_ratio(ratio);
        }
        self.attrs.height * ratio
    }

    pub fn descent(&self, cache: &TypefaceCache) -> f32 {
        self.attrs.height - self.ascent(cache)
    }

    /// Width of `text` rounded to the nearest whole unit
    pub fn string_width(&self, cache: &TypefaceCache, text: &str) -> i32 {
        self.string_width_float(cache, text).round() as i32
    }

    /// Width of `text`, including extra kerning after every character
    pub fn string_width_float(&self, cache: &TypefaceCache, text: &str) -> f32 {
        let mut width = self.typeface(cache).string_width(text);
        if self.attrs.kerning != 0.0 {
            width += self.attrs.kerning * text.chars().count() as f32;
        }
        width * self.attrs.height * self.attrs.horizontal_scale
    }

    /// Glyphs of `text` with x offsets scaled to this font
    pub fn glyph_positions(&self, cache: &TypefaceCache, text: &str) -> GlyphPositions {
        let mut positions = self.typeface(cache).glyph_positions(text);
        let scale = self.attrs.height * self.attrs.horizontal_scale;
        let kerning = self.attrs.kerning;

        if kerning != 0.0 {
            for (i, x) in positions.x_offsets.iter_mut().enumerate() {
                *x = (*x + i as f32 * kerning) * scale;
            }
        } else {
            for x in positions.x_offsets.iter_mut() {
                *x *= scale;
            }
        }
        positions
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.attrs, &other.attrs) || *self.attrs == *other.attrs
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Font").field(&*self.attrs).finish()
    }
}
