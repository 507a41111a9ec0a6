//! List command: installed fonts as descriptions

use anyhow::Result;
use fontres_core::{Font, FontEnumerator, DEFAULT_FONT_HEIGHT};

use crate::cli::{FontOptions, ListArgs};

pub fn run(args: &ListArgs, options: &FontOptions) -> Result<()> {
    let config = super::font_config(options)?;
    let fonts = super::load_fonts(options, &config)?;

    let found: Vec<Font> = match &args.family {
        Some(family) => fonts
            .styles_for_family(family)
            .into_iter()
            .map(|style| Font::with_family_and_style(family.as_str(), style, DEFAULT_FONT_HEIGHT))
            .collect(),
        None => Font::find_fonts(&fonts),
    };

    for font in &found {
        println!("{font}");
    }
    log::info!("{} fonts listed", found.len());
    Ok(())
}
