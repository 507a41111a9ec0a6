//! System fonts for fontres: discovery, matching and loading
//!
//! [`SystemFonts`] wraps a `fontdb::Database`. It lists what is installed
//! ([`FontEnumerator`]) and turns a [`Font`] request into a
//! [`SystemTypeface`] ([`TypefaceResolver`]), so it can sit directly behind a
//! [`fontres_core::TypefaceCache`].
//!
//! Matching goes: requested family with the exact subfamily name, then the
//! requested family by weight and slant, then the configured fallback font,
//! then whatever face the database holds first.

pub mod typeface;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use fontdb::{Database, Family, FaceInfo, Query, Style, Weight, ID};
use fontres_core::error::{FontLoadError, Result};
use fontres_core::style::{flags_for_style_name, style_name_for_flags};
use fontres_core::{
    Font, FontConfig, FontEnumerator, StyleFlags, Typeface, TypefaceResolver,
    DEFAULT_MONOSPACED_FONT_NAME, DEFAULT_SANS_SERIF_FONT_NAME, DEFAULT_SERIF_FONT_NAME,
    DEFAULT_STYLE,
};
use parking_lot::Mutex;
use read_fonts::FileRef;

pub use typeface::SystemTypeface;

/// Weights at or above this count as bold
const BOLD_WEIGHT_THRESHOLD: u16 = 600;

/// The installed fonts, plus anything loaded by hand
pub struct SystemFonts {
    db: Database,
    fallback: Option<(String, String)>,
    /// Subfamily names already read from face data
    style_names: Mutex<HashMap<ID, String>>,
}

impl SystemFonts {
    /// Scans the platform's font directories
    pub fn new() -> Self {
        let mut fonts = Self::empty();
        fonts.db.load_system_fonts();
        log::debug!("Loaded {} system font faces", fonts.db.len());
        fonts
    }

    /// A database with no faces at all
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            fallback: None,
            style_names: Mutex::new(HashMap::new()),
        }
    }

    /// Takes the fallback font from `config`, when it names one
    pub fn with_config(mut self, config: &FontConfig) -> Self {
        if config.has_fallback() {
            self.set_fallback_font(&config.fallback_font_name, &config.fallback_font_style);
        }
        self
    }

    /// Family and style tried when the requested family has no faces
    pub fn set_fallback_font(&mut self, family_name: &str, style_name: &str) {
        self.fallback = Some((family_name.to_owned(), style_name.to_owned()));
    }

    /// Adds font bytes, returning how many faces they held
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<usize> {
        let faces = count_faces(&data)?;
        self.db.load_font_data(data);
        log::debug!("Loaded {faces} font faces from memory");
        Ok(faces)
    }

    /// Adds a font file, returning how many faces it held
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let data = typeface::read_font_file(path)?;
        let faces = count_faces(&data)?;
        self.db.load_font_data(data);
        log::debug!("Loaded {faces} font faces from {}", path.display());
        Ok(faces)
    }

    /// Number of faces in the database
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Like [`TypefaceResolver::resolve`], with an error instead of `None`
    pub fn typeface_for(&self, font: &Font) -> Result<SystemTypeface> {
        self.candidates(font)
            .into_iter()
            .find_map(|id| self.load_typeface(id))
            .ok_or_else(|| FontLoadError::SystemFontNotFound(font.to_string()).into())
    }

    /// Faces worth trying for `font`, best match first
    fn candidates(&self, font: &Font) -> Vec<ID> {
        let requested = self.find_face(font.typeface_name(), font.typeface_style());
        let fallback = self
            .fallback
            .as_ref()
            .and_then(|(family, style)| self.find_face(family, style));
        let first = self.db.faces().next().map(|face| face.id);

        let mut ids = Vec::with_capacity(3);
        for id in [requested, fallback, first].into_iter().flatten() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    fn find_face(&self, family_name: &str, style_name: &str) -> Option<ID> {
        let family = generic_family(family_name).unwrap_or(Family::Name(family_name));

        if !style_name.is_empty() && style_name != DEFAULT_STYLE {
            let real_name = self.db.family_name(&family);
            let exact = self
                .db
                .faces()
                .filter(|face| is_in_family(face, real_name))
                .find(|face| self.style_name(face).eq_ignore_ascii_case(style_name));
            if let Some(face) = exact {
                return Some(face.id);
            }
        }

        let flags = flags_for_style_name(style_name);
        let families = [family];
        let query = Query {
            families: &families,
            weight: if flags.contains(StyleFlags::BOLD) {
                Weight::BOLD
            } else {
                Weight::NORMAL
            },
            style: if flags.contains(StyleFlags::ITALIC) {
                Style::Italic
            } else {
                Style::Normal
            },
            ..Query::default()
        };
        self.db.query(&query)
    }

    fn load_typeface(&self, id: ID) -> Option<SystemTypeface> {
        let face = self.db.face(id)?;
        let family = primary_family(face).unwrap_or_default().to_owned();
        let style = self.style_name(face);

        let loaded = self.db.with_face_data(id, |data, index| {
            SystemTypeface::from_data(family.as_str(), style.as_str(), data.to_vec(), index)
        })?;
        match loaded {
            Ok(typeface) => Some(typeface),
            Err(err) => {
                log::warn!("Skipping unreadable face {family} {style}: {err}");
                None
            }
        }
    }

    /// The face's subfamily name, or one made up from its weight and slant
    fn style_name(&self, face: &FaceInfo) -> String {
        if let Some(name) = self.style_names.lock().get(&face.id) {
            return name.clone();
        }

        let name = self
            .db
            .with_face_data(face.id, |data, index| {
                skrifa::FontRef::from_index(data, index)
                    .ok()
                    .and_then(|font| typeface::subfamily_name(&font))
            })
            .flatten()
            .unwrap_or_else(|| derived_style_name(face.weight, face.style).to_owned());

        self.style_names.lock().insert(face.id, name.clone());
        name
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl FontEnumerator for SystemFonts {
    fn family_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self.db.faces().filter_map(primary_family).collect();
        names.into_iter().map(str::to_owned).collect()
    }

    fn styles_for_family(&self, family_name: &str) -> Vec<String> {
        let styles: BTreeSet<String> = self
            .db
            .faces()
            .filter(|face| is_in_family(face, family_name))
            .map(|face| self.style_name(face))
            .collect();
        styles.into_iter().collect()
    }
}

impl TypefaceResolver for SystemFonts {
    fn resolve(&self, font: &Font) -> Option<Arc<dyn Typeface>> {
        match self.typeface_for(font) {
            Ok(typeface) => {
                log::debug!(
                    "Resolved {font} to {} {}",
                    typeface.name(),
                    typeface.style()
                );
                Some(Arc::new(typeface))
            }
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
}

/// The generic family a placeholder name stands for
pub fn generic_family(family_name: &str) -> Option<Family<'static>> {
    match family_name {
        DEFAULT_SANS_SERIF_FONT_NAME => Some(Family::SansSerif),
        DEFAULT_SERIF_FONT_NAME => Some(Family::Serif),
        DEFAULT_MONOSPACED_FONT_NAME => Some(Family::Monospace),
        _ => None,
    }
}

/// Style name for a face whose `name` table has none
pub fn derived_style_name(weight: Weight, style: Style) -> &'static str {
    let mut flags = StyleFlags::PLAIN;
    if weight.0 >= BOLD_WEIGHT_THRESHOLD {
        flags.insert(StyleFlags::BOLD);
    }
    if style != Style::Normal {
        flags.insert(StyleFlags::ITALIC);
    }
    style_name_for_flags(flags)
}

fn primary_family(face: &FaceInfo) -> Option<&str> {
    face.families.first().map(|(name, _)| name.as_str())
}

fn is_in_family(face: &FaceInfo, family_name: &str) -> bool {
    face.families
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(family_name))
}

fn count_faces(data: &[u8]) -> Result<usize> {
    match FileRef::new(data).map_err(|_| FontLoadError::InvalidData)? {
        FileRef::Font(_) => Ok(1),
        FileRef::Collection(collection) => Ok(collection.len() as usize),
    }
}
