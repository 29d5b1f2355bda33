//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::Direction;

/// Hanconv - Convert Chinese text between Simplified and Traditional scripts
#[derive(Parser, Debug)]
#[command(name = "hanconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input text file or directory. Directories are converted one `.txt`
    /// file at a time, non-recursively.
    /// If omitted while other flags are given, it is asked for interactively.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Conversion type: 1 = Simplified to Traditional, 2 = Traditional to Simplified
    #[arg(short = 't', long = "type", value_name = "1|2", value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// Output file path, or an existing directory to keep input base names in
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the character-map source file from a dictionary in PHP array form
    BuildMap {
        /// Dictionary file with `'<traditional>' => '<simple>',` lines
        input: PathBuf,

        /// Output Rust source file (optional, defaults to input with .rs extension)
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// True when no conversion flag was supplied at all; the run then uses
    /// the fixed default configuration and stays non-interactive.
    pub fn no_flags(&self) -> bool {
        self.input.is_none() && self.direction.is_none() && self.output.is_none()
    }

    /// Interactive mode triggers if and only if at least one of the three
    /// fields was not supplied on the command line.
    pub fn missing_any(&self) -> bool {
        self.input.is_none() || self.direction.is_none() || self.output.is_none()
    }
}

/// Validator for the --type flag
fn parse_direction(s: &str) -> Result<Direction, String> {
    match s {
        "1" => Ok(Direction::ToTraditional),
        "2" => Ok(Direction::ToSimplified),
        other => Err(format!(
            "conversion type must be 1 (Simplified to Traditional) or 2 (Traditional to Simplified), got '{}'",
            other
        )),
    }
}
