//! Fontres Core: font descriptions and the typeface cache behind them
//!
//! UI code builds and tweaks [`Font`] values freely; they are cheap
//! copy-on-write handles. Only when text has to be measured or drawn does a
//! font ask the [`TypefaceCache`] for a concrete [`Typeface`], and the answer
//! is remembered both in the cache and in the font itself.
//!
//! ## Resolving a Font
//!
//! ```rust
//! use fontres_core::{Font, GlyphPositions, StyleFlags, Typeface, TypefaceCache};
//! use std::sync::Arc;
//!
//! struct Monospace;
//!
//! impl Typeface for Monospace {
//!     fn name(&self) -> &str { "Mono" }
//!     fn style(&self) -> &str { "Regular" }
//!     fn ascent(&self) -> f32 { 0.8 }
//!     fn string_width(&self, text: &str) -> f32 { text.chars().count() as f32 * 0.5 }
//!     fn glyph_positions(&self, _text: &str) -> GlyphPositions { GlyphPositions::default() }
//! }
//!
//! let cache = TypefaceCache::new(Arc::new(|_: &Font| {
//!     Some(Arc::new(Monospace) as Arc<dyn Typeface>)
//! }));
//!
//! let font = Font::with_family("Mono", 20.0, StyleFlags::BOLD);
//! assert_eq!(font.to_string(), "Mono; Bold; 20.0");
//! assert_eq!(font.string_width_float(&cache, "abcd"), 40.0);
//! assert_eq!(font.ascent(&cache), 16.0);
//! ```
//!
//! ## The Moving Parts
//!
//! - [`Font`] - the value UI code passes around
//! - [`FontAttributes`] - the record fonts share until one of them changes
//! - [`TypefaceCache`] - fixed-size LRU from (family, style) to typeface
//! - [`traits`] - the typeface, resolver and enumeration seams
//! - [`FontConfig`] - cache size and fallback family, in one place

pub mod attributes;
pub mod config;
pub mod description;
pub mod error;
pub mod font;
pub mod style;
pub mod traits;
pub mod typeface_cache;

pub use attributes::FontAttributes;
pub use config::FontConfig;
pub use description::FALLBACK_DESCRIPTION_HEIGHT;
pub use error::{FontError, FontLoadError, Result};
pub use font::Font;
pub use style::StyleFlags;
pub use traits::{FontEnumerator, GlyphPositions, Typeface, TypefaceResolver};
pub use typeface_cache::{CacheStats, TypefaceCache, DEFAULT_TYPEFACE_CACHE_SIZE};

/// Height of a font nobody sized
pub const DEFAULT_FONT_HEIGHT: f32 = 14.0;
pub const MIN_FONT_HEIGHT: f32 = 0.1;
pub const MAX_FONT_HEIGHT: f32 = 10_000.0;

/// Placeholder family meaning "the platform's sans-serif face"
pub const DEFAULT_SANS_SERIF_FONT_NAME: &str = "<Sans-Serif>";
/// Placeholder family meaning "the platform's serif face"
pub const DEFAULT_SERIF_FONT_NAME: &str = "<Serif>";
/// Placeholder family meaning "the platform's monospaced face"
pub const DEFAULT_MONOSPACED_FONT_NAME: &str = "<Monospaced>";
/// Placeholder style meaning "whatever the family's default is"
pub const DEFAULT_STYLE: &str = "<Style>";

/// Clamps a requested height into `[MIN_FONT_HEIGHT, MAX_FONT_HEIGHT]`
pub fn limit_font_height(height: f32) -> f32 {
    height.clamp(MIN_FONT_HEIGHT, MAX_FONT_HEIGHT)
}
