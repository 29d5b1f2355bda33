//! Hanconv: Simplified/Traditional Chinese Conversion CLI Tool
//!
//! A command-line tool for converting Chinese text files between the
//! Simplified and Traditional character sets, with encoding auto-detection
//! and collision-safe output naming.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cli::{build_map, prompt_direction, prompt_input_path, prompt_output_path, Cli, Commands};
use pipeline::{ConversionRequest, Direction, RunMode};
use utils::{print_banner, print_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::BuildMap { input, output } => {
                build_map::run_build_map(input, output.as_deref())
            }
        };
    }

    let request = resolve_request(&cli)?;

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(
        &request.input,
        request.direction.describe(),
        &request.output,
        request.mode.label(),
    );

    pipeline::run(&request)
}

/// Determine the conversion request. No flags at all runs the fixed default
/// configuration non-interactively; otherwise every missing field is asked
/// for on standard input, and having prompted at all makes the run
/// interactive for downstream collision handling.
fn resolve_request(cli: &Cli) -> Result<ConversionRequest> {
    if cli.no_flags() {
        return Ok(ConversionRequest {
            input: PathBuf::from("./input"),
            direction: Direction::ToSimplified,
            output: PathBuf::from("./output"),
            mode: RunMode::Batch,
        });
    }

    let mode = if cli.missing_any() {
        RunMode::Interactive
    } else {
        RunMode::Batch
    };

    let input = match &cli.input {
        Some(path) => path.clone(),
        None => prompt_input_path()?,
    };
    let direction = match cli.direction {
        Some(direction) => direction,
        None => prompt_direction()?,
    };
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => prompt_output_path()?,
    };

    Ok(ConversionRequest {
        input,
        direction,
        output,
        mode,
    })
}
