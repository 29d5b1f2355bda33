//! Pipeline module - decoding, conversion, and output stages

pub mod charmap;
pub mod charmap_data;
pub mod convert;
pub mod encoding;
pub mod mapfile;
pub mod output;

pub use charmap::CharMap;
pub use convert::{convert, Direction};
pub use encoding::{decode_text, decode_with_fallbacks, Decoded};
pub use mapfile::{parse_map_source, render_map_source, MapFileError, MapPairs};
pub use output::{next_free_path, resolve_output_path, write_converted};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use crate::report::ConversionSummary;
use crate::utils::{
    create_progress_bar, print_completion, print_info, print_success, print_warning,
};

/// Collision handling policy for the write step. Interactive runs confirm
/// before replacing an existing output file; batch runs always overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Batch,
    Interactive,
}

impl RunMode {
    pub fn label(&self) -> &'static str {
        match self {
            RunMode::Batch => "batch",
            RunMode::Interactive => "interactive",
        }
    }
}

/// One CLI invocation's worth of work: where to read, which way to convert,
/// where to write, and how to handle collisions.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub direction: Direction,
    pub output: PathBuf,
    pub mode: RunMode,
}

/// Run one conversion request: a directory input fans out over its `.txt`
/// entries, anything else is treated as a single file.
pub fn run(request: &ConversionRequest) -> Result<()> {
    let map = CharMap::shared();
    if request.input.is_dir() {
        run_directory(map, request)
    } else {
        run_file(map, request)
    }
}

fn run_file(map: &CharMap, request: &ConversionRequest) -> Result<()> {
    let (written, _, _) = process_file(map, &request.input, request)?;
    print_success(&format!("Saved to {}", written.display()));
    print_completion("Conversion complete");
    Ok(())
}

fn run_directory(map: &CharMap, request: &ConversionRequest) -> Result<()> {
    let files = txt_files(&request.input)?;
    if files.is_empty() {
        print_info("No .txt files found in the input directory");
        return Ok(());
    }

    // Batch runs materialize the output directory up front so per-file path
    // resolution lands inside it instead of treating it as a file name.
    if request.mode == RunMode::Batch {
        fs::create_dir_all(&request.output).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                request.output.display()
            )
        })?;
    }

    let mut summary = ConversionSummary::new(request.direction);
    // Interactive runs prompt per file, which does not mix with a live bar
    let bar = match request.mode {
        RunMode::Batch => Some(create_progress_bar(files.len() as u64, "Converting")),
        RunMode::Interactive => None,
    };

    for file in &files {
        match process_file(map, file, request) {
            Ok((written, encoding, _)) => {
                summary.add_converted(file, &written, encoding.name());
            }
            Err(err) => {
                print_warning(&format!("Skipping {}: {:#}", file.display(), err));
                summary.add_skipped(file, format!("{:#}", err));
            }
        }
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    summary.display();
    print_completion("All files in directory converted");
    Ok(())
}

/// Read, decode, convert, and write one file. Returns the path actually
/// written plus the encoding the input was decoded with.
fn process_file(
    map: &CharMap,
    input_file: &Path,
    request: &ConversionRequest,
) -> Result<(PathBuf, &'static Encoding, bool)> {
    let bytes = fs::read(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file.display()))?;

    let decoded = decode_text(&bytes);
    if decoded.lossy {
        print_warning(&format!(
            "{}: undecodable bytes were replaced with U+FFFD",
            input_file.display()
        ));
    }

    let converted = convert(map, &decoded.text, request.direction);
    let target = resolve_output_path(&request.output, input_file);
    let written = write_converted(&target, &converted, request.mode)?;

    Ok((written, decoded.encoding, decoded.lossy))
}

/// Non-recursive `.txt` listing in file-name order, so batch runs are
/// deterministic regardless of directory iteration order.
fn txt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    files.sort();
    Ok(files)
}
