//! Subcommand implementations

pub mod list;
pub mod measure;
pub mod parse;

use anyhow::{Context, Result};
use fontres_core::FontConfig;
use fontres_fontdb::SystemFonts;

use crate::cli::FontOptions;

/// Environment settings with command-line overrides on top
pub fn font_config(options: &FontOptions) -> Result<FontConfig> {
    let mut config = FontConfig::from_env().context("Invalid font settings in environment")?;
    if let Some(capacity) = options.cache_size {
        config = config.with_typeface_cache_capacity(capacity);
    }
    if let Some(family) = &options.fallback_font {
        config = config.with_fallback_font(family.as_str(), options.fallback_style.as_str());
    }
    Ok(config)
}

/// System fonts (unless switched off) plus any font files given
pub fn load_fonts(options: &FontOptions, config: &FontConfig) -> Result<SystemFonts> {
    let mut fonts = if options.no_system_fonts {
        SystemFonts::empty()
    } else {
        SystemFonts::new()
    };

    for path in &options.font_files {
        let faces = fonts
            .load_font_file(path)
            .with_context(|| format!("Failed to load font file {}", path.display()))?;
        log::info!("Loaded {} faces from {}", faces, path.display());
    }

    Ok(fonts.with_config(config))
}
