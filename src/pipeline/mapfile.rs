//! Offline character-map builder for the PHP-style dictionary source
//!
//! The source dictionary holds one mapping per line in the literal form
//! `'<traditional>' => '<simple>',`; every other line is ignored. Pairs are
//! split per character and concatenated positionally into the two sequences
//! that become the generated `charmap_data` module. This runs offline via
//! the `build-map` subcommand and is never invoked by the conversion
//! pipeline at runtime.

use regex::Regex;
use thiserror::Error;

/// Errors from parsing a dictionary source file.
#[derive(Debug, Error)]
pub enum MapFileError {
    /// The source contained no line matching the mapping pattern.
    #[error("no mapping pairs found in dictionary source")]
    EmptyMap,
}

/// The two positionally paired character sequences extracted from a
/// dictionary source, plus the number of entries that had to be skipped.
#[derive(Debug)]
pub struct MapPairs {
    pub simplified: String,
    pub traditional: String,
    /// Entries whose two sides differ in character count. Splitting them
    /// per character would shift every later pair out of alignment.
    pub skipped: usize,
}

impl MapPairs {
    /// Number of character pairs extracted.
    pub fn len(&self) -> usize {
        self.simplified.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.simplified.is_empty()
    }
}

/// Extract all mapping pairs from a dictionary source.
pub fn parse_map_source(source: &str) -> Result<MapPairs, MapFileError> {
    let pattern = Regex::new(r"^\s*'([^']*)' => '([^']*)',").unwrap();

    let mut simplified = String::new();
    let mut traditional = String::new();
    let mut skipped = 0usize;

    for line in source.lines() {
        let Some(captures) = pattern.captures(line) else {
            continue;
        };
        let trad = captures.get(1).map_or("", |m| m.as_str());
        let simp = captures.get(2).map_or("", |m| m.as_str());
        if trad.chars().count() != simp.chars().count() {
            skipped += 1;
            continue;
        }
        traditional.push_str(trad);
        simplified.push_str(simp);
    }

    if simplified.is_empty() {
        return Err(MapFileError::EmptyMap);
    }

    Ok(MapPairs {
        simplified,
        traditional,
        skipped,
    })
}

/// Render the generated Rust source that is checked in as `charmap_data.rs`.
pub fn render_map_source(pairs: &MapPairs) -> String {
    let mut output = String::new();
    output.push_str("//! Character tables generated by `hanconv build-map`.\n");
    output.push_str("//!\n");
    output.push_str("//! Do not edit by hand: regenerate from the dictionary source instead.\n");
    output.push_str("//! `SIMPLIFIED[i]` and `TRADITIONAL[i]` form one mapping pair; both\n");
    output.push_str("//! constants hold the same number of characters.\n\n");
    output.push_str(&render_constant("SIMPLIFIED", &pairs.simplified));
    output.push('\n');
    output.push_str(&render_constant("TRADITIONAL", &pairs.traditional));
    output
}

const ROW_WIDTH: usize = 32;

fn render_constant(name: &str, chars: &str) -> String {
    let all: Vec<char> = chars.chars().collect();
    let mut output = format!("pub const {}: &str = \"\\\n", name);
    for (i, row) in all.chunks(ROW_WIDTH).enumerate() {
        if i > 0 {
            output.push_str("\\\n");
        }
        output.extend(row.iter());
    }
    output.push_str("\";\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
<?php
return [
    '漢' => '汉',
    '馬' => '马',
    // a comment line to ignore
    '書' => '书',
];
";

    #[test]
    fn test_pairs_are_extracted_in_source_order() {
        let pairs = parse_map_source(SOURCE).unwrap();
        assert_eq!(pairs.simplified, "汉马书");
        assert_eq!(pairs.traditional, "漢馬書");
        assert_eq!(pairs.skipped, 0);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_multi_character_entries_pair_positionally() {
        let source = "    '轉換' => '转换',\n";
        let pairs = parse_map_source(source).unwrap();
        assert_eq!(pairs.simplified, "转换");
        assert_eq!(pairs.traditional, "轉換");
    }

    #[test]
    fn test_mismatched_entry_lengths_are_skipped() {
        let source = "    '檯' => '台',\n    '乾燥' => '干',\n";
        let pairs = parse_map_source(source).unwrap();
        assert_eq!(pairs.simplified, "台");
        assert_eq!(pairs.traditional, "檯");
        assert_eq!(pairs.skipped, 1);
    }

    #[test]
    fn test_source_without_pairs_is_rejected() {
        let err = parse_map_source("nothing matches here\n").unwrap_err();
        assert!(matches!(err, MapFileError::EmptyMap));
    }

    #[test]
    fn test_empty_map_display() {
        let err = MapFileError::EmptyMap;
        assert_eq!(err.to_string(), "no mapping pairs found in dictionary source");
    }

    #[test]
    fn test_rendered_source_declares_both_constants() {
        let pairs = parse_map_source(SOURCE).unwrap();
        let rendered = render_map_source(&pairs);
        assert!(rendered.contains("pub const SIMPLIFIED: &str"));
        assert!(rendered.contains("pub const TRADITIONAL: &str"));
        assert!(rendered.contains("汉马书"));
        assert!(rendered.contains("漢馬書"));
    }

    #[test]
    fn test_rendered_rows_wrap_at_fixed_width() {
        let simplified: String = "汉".repeat(ROW_WIDTH + 1);
        let traditional: String = "漢".repeat(ROW_WIDTH + 1);
        let pairs = MapPairs {
            simplified,
            traditional,
            skipped: 0,
        };
        let rendered = render_map_source(&pairs);
        // One wrapped continuation per constant beyond the opening line
        assert_eq!(rendered.matches("\\\n").count(), 4);
    }
}
