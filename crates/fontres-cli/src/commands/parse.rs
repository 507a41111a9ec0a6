//! Parse command: show how a description is read

use anyhow::Result;
use fontres_core::Font;

use crate::cli::ParseArgs;

pub fn run(args: &ParseArgs) -> Result<()> {
    let font = Font::from_description(&args.description);

    println!("description: {font}");
    println!("family:      {}", font.typeface_name());
    println!("style:       {}", font.typeface_style());
    println!("height:      {:.1}", font.height());
    println!("flags:       {}", font.style_flags());
    Ok(())
}
