//! Command-line arguments

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// fontres - inspect font descriptions and the faces they resolve to
#[derive(Parser, Debug)]
#[command(name = "fontres")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fonts: FontOptions,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where fonts come from and how resolved faces are cached
#[derive(Args, Debug)]
pub struct FontOptions {
    /// Typeface cache capacity (overrides FONTRES_TYPEFACE_CACHE_SIZE)
    #[arg(long = "cache-size", global = true)]
    pub cache_size: Option<usize>,

    /// Family used when a requested family is not installed
    #[arg(long = "fallback-font", global = true)]
    pub fallback_font: Option<String>,

    /// Style used with --fallback-font
    #[arg(long = "fallback-style", global = true, default_value = "Regular")]
    pub fallback_style: String,

    /// Extra font files to load (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font-file", global = true)]
    pub font_files: Vec<PathBuf>,

    /// Only use fonts given with --font-file
    #[arg(long = "no-system-fonts", global = true)]
    pub no_system_fonts: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed fonts as descriptions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Resolve a description and measure text with it
    #[command(alias = "m")]
    Measure(MeasureArgs),

    /// Parse a description and show what it means
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only this family
    #[arg(long)]
    pub family: Option<String>,
}

#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Font description, e.g. "DejaVu Sans; Bold; 24"
    pub description: String,

    /// Text to measure
    pub text: String,

    /// Horizontal scale applied to the font
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Extra kerning per character, as a proportion of the height
    #[arg(long, default_value_t = 0.0)]
    pub kerning: f32,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Font description, e.g. "Serif; Italic; 12.5"
    pub description: String,
}
