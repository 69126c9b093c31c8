//! cheevos-hash CLI
//!
//! Prints every applicable achievement-database hash for one ROM file.

mod cli_types;
mod error;

use std::fs::File;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cheevos_hash_lib::{HashContext, HashOptions, RecipeHash};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if e.shows_usage() {
                eprintln!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn usage() -> String {
    Cli::command().render_usage().to_string()
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let Some(path) = cli.file.as_deref() else {
        return Err(CliError::MissingArgument);
    };

    if !cli.extra.is_empty() {
        eprintln!("WARNING: ignoring extra arguments.");
        eprintln!("{}", usage());
    }

    // Recipes quietly skip files they cannot open, so check access up front
    File::open(path).map_err(|e| CliError::io(path, e))?;

    let ctx = HashContext::with_default_recipes()
        .with_options(HashOptions::new().strict_io(cli.strict_io));
    let results = ctx.hash_file(path)?;
    log::info!("{}: {} hash(es)", path.display(), results.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print_result(result);
        }
    }

    Ok(())
}

fn print_result(result: &RecipeHash) {
    println!(
        "{}: {}",
        result.label.if_supports_color(Stdout, |t| t.bold()),
        result.digest
    );
}
