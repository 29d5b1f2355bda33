//! Dictionary-to-character-map build utility
//!
//! Offline companion of the conversion pipeline: turns a PHP-style mapping
//! dictionary into the generated Rust source that is checked in as
//! `src/pipeline/charmap_data.rs`. The conversion pipeline never runs this.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::pipeline::{parse_map_source, render_map_source};
use crate::utils::{create_spinner, finish_with_success, finish_with_warning};

/// Run the dictionary build, writing a Rust source file with the paired
/// `SIMPLIFIED`/`TRADITIONAL` constants.
///
/// # Arguments
/// * `input` - Path to the dictionary source file
/// * `output` - Optional output path. If not provided, uses the input path
///   with an `.rs` extension
pub fn run_build_map(input: &Path, output: Option<&Path>) -> Result<()> {
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("rs"),
    };

    println!("\n {} Building character map", style("◆").cyan().bold());
    println!("   Input:  {}", style(input.display()).dim());
    println!("   Output: {}", style(output_path.display()).dim());
    println!();

    let spinner = create_spinner("Reading dictionary source...");
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read dictionary source: {}", input.display()))?;
    let pairs = parse_map_source(&source)
        .with_context(|| format!("Failed to parse dictionary source: {}", input.display()))?;
    if pairs.skipped > 0 {
        finish_with_warning(
            &spinner,
            &format!(
                "Parsed {} pairs, skipped {} entries with mismatched sides",
                pairs.len(),
                pairs.skipped
            ),
        );
    } else {
        finish_with_success(&spinner, &format!("Parsed {} pairs", pairs.len()));
    }

    let spinner = create_spinner("Rendering character tables...");
    let rendered = render_map_source(&pairs);
    fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write map source: {}", output_path.display()))?;
    finish_with_success(&spinner, &format!("Wrote {}", output_path.display()));

    println!();
    println!(" {} Character map built!", style("✓").green().bold());

    Ok(())
}
