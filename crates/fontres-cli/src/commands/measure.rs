//! Measure command: resolve a description and report text metrics

use std::sync::Arc;

use anyhow::{bail, Result};
use fontres_core::{Font, TypefaceCache};

use crate::cli::{FontOptions, MeasureArgs};

pub fn run(args: &MeasureArgs, options: &FontOptions) -> Result<()> {
    let config = super::font_config(options)?;
    let fonts = super::load_fonts(options, &config)?;
    if fonts.is_empty() {
        bail!("No fonts available (install some or pass --font-file)");
    }
    let cache = TypefaceCache::with_config(Arc::new(fonts), &config);

    let mut font = Font::from_description(&args.description);
    font.set_horizontal_scale(args.scale);
    font.set_extra_kerning_factor(args.kerning);

    let typeface = font.typeface(&cache);
    let width = font.string_width_float(&cache, &args.text);
    let positions = font.glyph_positions(&cache, &args.text);

    println!("font:     {font}");
    println!("typeface: {}; {}", typeface.name(), typeface.style());
    println!("width:    {width:.2} ({})", font.string_width(&cache, &args.text));
    println!("ascent:   {:.2}", font.ascent(&cache));
    println!("descent:  {:.2}", font.descent(&cache));
    println!("glyphs:   {:?}", positions.glyphs);
    let offsets: Vec<String> = positions
        .x_offsets
        .iter()
        .map(|x| format!("{x:.2}"))
        .collect();
    println!("offsets:  {}", offsets.join(" "));
    Ok(())
}
