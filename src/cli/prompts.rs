//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use crate::pipeline::Direction;

/// Ask for the input path that was not supplied on the command line
pub fn prompt_input_path() -> Result<PathBuf> {
    let path: String = Input::new()
        .with_prompt("Path of the text file or directory to convert")
        .interact_text()?;
    Ok(PathBuf::from(path))
}

/// Ask for the output path that was not supplied on the command line
pub fn prompt_output_path() -> Result<PathBuf> {
    let path: String = Input::new()
        .with_prompt("Path to write the converted output to")
        .interact_text()?;
    Ok(PathBuf::from(path))
}

/// Ask for the conversion direction
pub fn prompt_direction() -> Result<Direction> {
    let items = [
        Direction::ToTraditional.describe(),
        Direction::ToSimplified.describe(),
    ];
    let selection = Select::new()
        .with_prompt("Conversion type")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Direction::ToTraditional,
        _ => Direction::ToSimplified,
    })
}

/// Prompt user to confirm replacing an existing output file
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("File {} already exists, replace it?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
