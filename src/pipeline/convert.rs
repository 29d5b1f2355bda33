//! Character-level conversion between the Simplified and Traditional scripts

use super::charmap::CharMap;

/// Which alphabet is the lookup key for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Simplified to Traditional (CLI type `1`)
    ToTraditional,
    /// Traditional to Simplified (CLI type `2`)
    ToSimplified,
}

impl Direction {
    /// Human-readable label used in configuration cards and summaries.
    pub fn describe(&self) -> &'static str {
        match self {
            Direction::ToTraditional => "Simplified to Traditional",
            Direction::ToSimplified => "Traditional to Simplified",
        }
    }
}

/// Convert `text` one character at a time, leaving unmapped characters
/// untouched. The output always has the same character count as the input.
pub fn convert(map: &CharMap, text: &str, direction: Direction) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        output.push(map.lookup(c, direction).unwrap_or(c));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_simplified_to_traditional() {
        let map = CharMap::shared();
        assert_eq!(convert(map, "汉字转换", Direction::ToTraditional), "漢字轉換");
    }

    #[test]
    fn test_convert_traditional_to_simplified() {
        let map = CharMap::shared();
        assert_eq!(convert(map, "漢字轉換", Direction::ToSimplified), "汉字转换");
    }

    #[test]
    fn test_convert_empty_string() {
        let map = CharMap::shared();
        assert_eq!(convert(map, "", Direction::ToTraditional), "");
        assert_eq!(convert(map, "", Direction::ToSimplified), "");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let map = CharMap::shared();
        assert_eq!(
            convert(map, "Hello, world! 123", Direction::ToTraditional),
            "Hello, world! 123"
        );
    }
}
