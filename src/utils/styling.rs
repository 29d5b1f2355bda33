//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SWAP: Emoji<'_, '_> = Emoji("🔁 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██╗  ██╗ █████╗ ███╗   ██╗ ██████╗ ██████╗ ███╗   ██╗██╗   ██╗
    ██║  ██║██╔══██╗████╗  ██║██╔════╝██╔═══██╗████╗  ██║██║   ██║
    ███████║███████║██╔██╗ ██║██║     ██║   ██║██╔██╗ ██║██║   ██║
    ██╔══██║██╔══██║██║╚██╗██║██║     ██║   ██║██║╚██╗██║╚██╗ ██╔╝
    ██║  ██║██║  ██║██║ ╚████║╚██████╗╚██████╔╝██║ ╚████║ ╚████╔╝
    ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝  ╚═══╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("漢").magenta().bold(),
        style("Simplified and Traditional, one table apart").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, direction: &str, output: &Path, mode: &str) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:     {:<36}│",
        FOLDER,
        truncate_path(input, 35)
    );
    println!(
        "    │  {} Direction: {:<36}│",
        SWAP,
        truncate_string(direction, 35)
    );
    println!(
        "    │  {} Output:    {:<36}│",
        SAVE,
        truncate_path(output, 35)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  Mode: {:<45}│",
        style(mode).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion(message: &str) {
    println!();
    println!("    {} {}", ROCKET, style(message).green().bold());
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    // Truncate on character boundaries; paths here often hold CJK text
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - max_len + 3..].iter().collect();
        format!("...{}", tail)
    }
}
