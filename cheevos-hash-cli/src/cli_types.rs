//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cheevos-hash")]
#[command(about = "Compute achievement-database hashes for a ROM file", long_about = None)]
pub(crate) struct Cli {
    /// ROM file to hash
    pub file: Option<PathBuf>,

    /// Ignored; a warning is printed when present
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    pub extra: Vec<String>,

    /// Fail on read errors instead of hashing what was read so far
    #[arg(long)]
    pub strict_io: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub(crate) fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
