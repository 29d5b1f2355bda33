//! Output path resolution and collision-safe writing

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::RunMode;
use crate::cli::prompts::confirm_overwrite;

/// Resolve the target file for one input file. An output path that names an
/// existing directory keeps the input file's base name inside it; anything
/// else is used verbatim.
pub fn resolve_output_path(output: &Path, input_file: &Path) -> PathBuf {
    if output.is_dir() {
        let base = input_file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output.txt"));
        output.join(base)
    } else {
        output.to_path_buf()
    }
}

/// First `name_1.ext`, `name_2.ext`, ... not already present on disk.
pub fn next_free_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = path.extension().and_then(|e| e.to_str());

    let mut counter = 1usize;
    loop {
        let name = match extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Write converted text as UTF-8, honoring the run mode's collision policy.
/// Returns the path actually written, which in interactive mode may carry a
/// numeric suffix when the user declines to replace an existing file.
pub fn write_converted(target: &Path, content: &str, mode: RunMode) -> Result<PathBuf> {
    let target = match mode {
        RunMode::Batch => target.to_path_buf(),
        RunMode::Interactive => {
            if target.exists() && !confirm_overwrite(target)? {
                next_free_path(target)
            } else {
                target.to_path_buf()
            }
        }
    };

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&target, content)
        .with_context(|| format!("Failed to write output file: {}", target.display()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_directory_keeps_input_base_name() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_output_path(dir.path(), Path::new("/somewhere/story.txt"));
        assert_eq!(resolved, dir.path().join("story.txt"));
    }

    #[test]
    fn test_non_directory_output_is_used_verbatim() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing/out.txt");
        let resolved = resolve_output_path(&target, Path::new("in.txt"));
        assert_eq!(resolved, target);
    }

    #[test]
    fn test_next_free_path_skips_taken_suffixes() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        fs::write(&target, "x").unwrap();
        fs::write(dir.path().join("out_1.txt"), "x").unwrap();

        assert_eq!(next_free_path(&target), dir.path().join("out_2.txt"));
    }

    #[test]
    fn test_next_free_path_without_extension() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        fs::write(&target, "x").unwrap();

        assert_eq!(next_free_path(&target), dir.path().join("out_1"));
    }

    #[test]
    fn test_batch_write_creates_parents_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/deep/out.txt");

        let written = write_converted(&target, "first", RunMode::Batch).unwrap();
        assert_eq!(written, target);
        let written = write_converted(&target, "second", RunMode::Batch).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn test_interactive_write_without_collision_does_not_prompt() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("fresh.txt");

        let written = write_converted(&target, "content", RunMode::Interactive).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "content");
    }
}
