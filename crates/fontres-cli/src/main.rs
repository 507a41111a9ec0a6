//! fontres: list, parse and measure fonts from the command line

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &cli.fonts),
        Commands::Measure(args) => commands::measure::run(args, &cli.fonts),
        Commands::Parse(args) => commands::parse::run(args),
    }
}

/// Initialize logging from the verbosity count
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
