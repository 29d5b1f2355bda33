//! Batch conversion summary report generation

use std::path::{Path, PathBuf};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::Direction;

/// What happened to one file of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Converted,
    Skipped(String),
}

/// Per-file record collected while a directory is processed.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub encoding: Option<&'static str>,
    pub status: FileStatus,
}

/// Summary of a directory conversion run.
#[derive(Debug)]
pub struct ConversionSummary {
    direction: Direction,
    outcomes: Vec<FileOutcome>,
}

impl ConversionSummary {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            outcomes: Vec::new(),
        }
    }

    pub fn add_converted(&mut self, input: &Path, output: &Path, encoding: &'static str) {
        self.outcomes.push(FileOutcome {
            input: input.to_path_buf(),
            output: Some(output.to_path_buf()),
            encoding: Some(encoding),
            status: FileStatus::Converted,
        });
    }

    pub fn add_skipped(&mut self, input: &Path, reason: String) {
        self.outcomes.push(FileOutcome {
            input: input.to_path_buf(),
            output: None,
            encoding: None,
            status: FileStatus::Skipped(reason),
        });
    }

    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Converted)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!(
            "    {}",
            style(format!("Direction: {}", self.direction.describe())).dim()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Encoding").add_attribute(Attribute::Bold),
            Cell::new("Output").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for outcome in &self.outcomes {
            let file = outcome
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| outcome.input.display().to_string());
            let output = outcome
                .output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            let (status, color) = match &outcome.status {
                FileStatus::Converted => ("converted".to_string(), Color::Green),
                FileStatus::Skipped(reason) => (format!("skipped: {}", reason), Color::Red),
            };

            table.add_row(vec![
                Cell::new(file),
                Cell::new(outcome.encoding.unwrap_or("-")),
                Cell::new(output),
                Cell::new(status).fg(color),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "      {} converted, {} skipped",
            style(self.converted()).green().bold(),
            if self.skipped() > 0 {
                style(self.skipped()).red().bold()
            } else {
                style(self.skipped()).dim()
            }
        );
    }
}
