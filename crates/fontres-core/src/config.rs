//! Font configuration context
//!
//! Holds the settings the toolkit would otherwise keep in process-wide
//! globals: how many typefaces to cache and which family/style to fall back
//! to when a request cannot be served. Pass it to whatever builds the
//! [`crate::TypefaceCache`] and to resolvers that do fallback substitution.
//!
//! # Environment Variables
//!
//! [`FontConfig::from_env`] starts from the defaults and applies:
//!
//! ```bash
//! FONTRES_TYPEFACE_CACHE_SIZE=16 FONTRES_FALLBACK_FONT="DejaVu Sans" ./my_app
//! ```

use crate::error::{FontError, Result};
use crate::typeface_cache::DEFAULT_TYPEFACE_CACHE_SIZE;

pub const TYPEFACE_CACHE_SIZE_VAR: &str = "FONTRES_TYPEFACE_CACHE_SIZE";
pub const FALLBACK_FONT_VAR: &str = "FONTRES_FALLBACK_FONT";
pub const FALLBACK_STYLE_VAR: &str = "FONTRES_FALLBACK_STYLE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Number of typeface cache slots; applied by a full cache reset
    pub typeface_cache_capacity: usize,
    /// Family tried when the requested one is unavailable (empty = none)
    pub fallback_font_name: String,
    /// Style used with the fallback family (empty = keep the request's)
    pub fallback_font_style: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            typeface_cache_capacity: DEFAULT_TYPEFACE_CACHE_SIZE,
            fallback_font_name: String::new(),
            fallback_font_style: String::new(),
        }
    }
}

impl FontConfig {
    /// Defaults overridden by the `FONTRES_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`FontConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(TYPEFACE_CACHE_SIZE_VAR) {
            config.typeface_cache_capacity =
                value
                    .trim()
                    .parse()
                    .map_err(|_| FontError::InvalidSetting {
                        var: TYPEFACE_CACHE_SIZE_VAR,
                        value: value.clone(),
                    })?;
            log::info!(
                "Typeface cache capacity set to {} via {}",
                config.typeface_cache_capacity,
                TYPEFACE_CACHE_SIZE_VAR
            );
        }

        if let Some(name) = lookup(FALLBACK_FONT_VAR) {
            log::info!("Fallback font set to {:?} via {}", name, FALLBACK_FONT_VAR);
            config.fallback_font_name = name;
        }

        if let Some(style) = lookup(FALLBACK_STYLE_VAR) {
            if config.fallback_font_name.is_empty() {
                log::warn!(
                    "{} is set but {} is not; the style has no effect",
                    FALLBACK_STYLE_VAR,
                    FALLBACK_FONT_VAR
                );
            }
            config.fallback_font_style = style;
        }

        Ok(config)
    }

    pub fn with_typeface_cache_capacity(mut self, capacity: usize) -> Self {
        self.typeface_cache_capacity = capacity;
        self
    }

    pub fn with_fallback_font(mut self, name: impl Into<String>, style: impl Into<String>) -> Self {
        self.fallback_font_name = name.into();
        self.fallback_font_style = style.into();
        self
    }

    /// Is a fallback family configured?
    pub fn has_fallback(&self) -> bool {
        !self.fallback_font_name.is_empty()
    }
}
