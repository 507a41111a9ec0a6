//! Find-or-resolve lookup from (family, style) to a typeface
//!
//! A fixed number of slots, scanned linearly. Every hit or fill stamps the
//! slot with the next value of a running counter; a miss overwrites the slot
//! with the smallest stamp. The cache is meant to hold a handful of faces, and
//! the per-slot suitability check costs more than the scan, so there is no
//! hashing.
//!
//! One instance is expected per application. It is handed to fonts by
//! reference; the whole find-or-resolve runs under one lock.

use crate::config::FontConfig;
use crate::traits::{Typeface, TypefaceResolver};
use crate::{limit_font_height, Font, FontAttributes, DEFAULT_SANS_SERIF_FONT_NAME, DEFAULT_STYLE};
use parking_lot::Mutex;
use std::sync::Arc;

/// Number of slots a new cache starts with
pub const DEFAULT_TYPEFACE_CACHE_SIZE: usize = 10;

/// Occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of slots
    pub capacity: usize,
    /// Slots holding a typeface
    pub entries: usize,
}

/// One slot of the cache
///
/// The keys are the names the face was *requested* under, which may be a
/// placeholder such as `<Sans-Serif>` rather than the face's own name.
#[derive(Clone, Default)]
struct CachedFace {
    family_key: String,
    style_key: String,
    last_used: u64,
    typeface: Option<Arc<dyn Typeface>>,
}

struct CacheState {
    faces: Vec<CachedFace>,
    counter: u64,
    default_face: Option<Arc<dyn Typeface>>,
    resolver: Arc<dyn TypefaceResolver>,
}

/// Small LRU cache of resolved typefaces
///
/// The resolver runs while the cache lock is held; it must not call back
/// into the same cache.
pub struct TypefaceCache {
    state: Mutex<CacheState>,
}

impl TypefaceCache {
    /// Cache with the default number of slots
    pub fn new(resolver: Arc<dyn TypefaceResolver>) -> Self {
        Self::with_capacity(resolver, DEFAULT_TYPEFACE_CACHE_SIZE)
    }

    pub fn with_capacity(resolver: Arc<dyn TypefaceResolver>, capacity: usize) -> Self {
        let cache = Self {
            state: Mutex::new(CacheState {
                faces: Vec::new(),
                counter: 0,
                default_face: None,
                resolver,
            }),
        };
        cache.set_size(capacity);
        cache
    }

    /// Cache sized from `config`
    pub fn with_config(resolver: Arc<dyn TypefaceResolver>, config: &FontConfig) -> Self {
        Self::with_capacity(resolver, config.typeface_cache_capacity)
    }

    /// Re-applies the configured capacity (a full reset)
    pub fn apply_config(&self, config: &FontConfig) {
        self.set_size(config.typeface_cache_capacity);
    }

    /// Throws away every slot and allocates `capacity` empty ones
    ///
    /// The remembered default typeface survives.
    pub fn set_size(&self, capacity: usize) {
        let mut state = self.state.lock();
        state.faces.clear();
        state.faces.resize_with(capacity, CachedFace::default);
        log::debug!("Typeface cache reset to {} slots", capacity);
    }

    /// Empties every slot, keeping the capacity
    pub fn clear(&self) {
        let capacity = self.capacity();
        self.set_size(capacity);
    }

    /// Swaps the resolver used for future misses; cached faces stay
    pub fn set_resolver(&self, resolver: Arc<dyn TypefaceResolver>) {
        self.state.lock().resolver = resolver;
    }

    pub fn capacity(&self) -> usize {
        self.state.lock().faces.len()
    }

    /// Number of slots holding a typeface
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .faces
            .iter()
            .filter(|face| face.typeface.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            capacity: state.faces.len(),
            entries: state.faces.iter().filter(|face| face.typeface.is_some()).count(),
        }
    }

    /// Typeface resolved for the default font, once it has been requested
    pub fn default_typeface(&self) -> Option<Arc<dyn Typeface>> {
        self.state.lock().default_face.clone()
    }

    /// A font in the default family with the given style
    ///
    /// When `style_name` is the default-style placeholder the font starts out
    /// with the cache's default typeface, if one is known.
    pub fn font_with_style(&self, style_name: &str, height: f32) -> Font {
        let typeface = if style_name == DEFAULT_STYLE {
            self.default_typeface()
        } else {
            None
        };
        let attrs = FontAttributes::new(
            DEFAULT_SANS_SERIF_FONT_NAME.to_owned(),
            style_name.to_owned(),
            limit_font_height(height),
        );
        Font::from_attributes(attrs.with_typeface(typeface))
    }

    /// Returns a cached typeface for `font`, resolving one on a miss
    ///
    /// # Panics
    ///
    /// If the resolver returns no typeface. Nothing downstream can draw
    /// without one.
    pub fn find_typeface_for(&self, font: &Font) -> Arc<dyn Typeface> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let family = font.typeface_name();
        let style = font.typeface_style();

        for (index, face) in state.faces.iter_mut().enumerate().rev() {
            if face.family_key != family || face.style_key != style {
                continue;
            }
            if let Some(typeface) = &face.typeface {
                if typeface.is_suitable_for(font) {
                    state.counter += 1;
                    face.last_used = state.counter;
                    log::trace!("Typeface cache hit for {}/{} in slot {}", family, style, index);
                    return Arc::clone(typeface);
                }
            }
        }

        let typeface = match state.resolver.resolve(font) {
            Some(typeface) => typeface,
            None => unresolvable(font),
        };

        if let Some(index) = least_recently_used(&state.faces) {
            state.counter += 1;
            let face = &mut state.faces[index];
            log::debug!(
                "Typeface cache miss for {}/{}: slot {} (was {:?}/{:?}) now holds {} {}",
                family,
                style,
                index,
                face.family_key,
                face.style_key,
                typeface.name(),
                typeface.style()
            );
            face.family_key = family.to_owned();
            face.style_key = style.to_owned();
            face.last_used = state.counter;
            face.typeface = Some(Arc::clone(&typeface));
        } else {
            log::debug!(
                "Typeface cache has no slots; {}/{} resolved uncached",
                family,
                style
            );
        }

        if state.default_face.is_none() && *font == Font::default() {
            state.default_face = Some(Arc::clone(&typeface));
        }

        typeface
    }
}

/// Slot with the smallest usage stamp; the lowest index wins ties
fn least_recently_used(faces: &[CachedFace]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (index, face) in faces.iter().enumerate().rev() {
        if best.map_or(true, |(_, last_used)| face.last_used <= last_used) {
            best = Some((index, face.last_used));
        }
    }
    best.map(|(index, _)| index)
}

#[allow(clippy::panic)]
fn unresolvable(font: &Font) -> ! {
    log::error!("Typeface resolver returned nothing for {}", font);
    panic!("typeface resolver must return a typeface (request: {font})");
}
