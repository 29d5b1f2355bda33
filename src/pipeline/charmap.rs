//! Static character map pairing the Simplified and Traditional alphabets
//!
//! The generated tables in `charmap_data` are two equal-length character
//! sequences paired by position. At startup they are folded once into two
//! immutable hash maps, one per conversion direction, and shared process-wide.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::charmap_data::{SIMPLIFIED, TRADITIONAL};
use super::convert::Direction;

/// Bidirectional character lookup built from the generated tables.
#[derive(Debug)]
pub struct CharMap {
    to_traditional: HashMap<char, char>,
    to_simplified: HashMap<char, char>,
}

impl CharMap {
    /// Build the lookup maps from two positionally paired character sequences.
    ///
    /// When a character repeats on one side, the first occurrence wins.
    pub fn from_tables(simplified: &str, traditional: &str) -> Self {
        debug_assert_eq!(
            simplified.chars().count(),
            traditional.chars().count(),
            "character tables must pair up by position"
        );

        let mut to_traditional = HashMap::new();
        let mut to_simplified = HashMap::new();
        for (s, t) in simplified.chars().zip(traditional.chars()) {
            to_traditional.entry(s).or_insert(t);
            to_simplified.entry(t).or_insert(s);
        }

        Self {
            to_traditional,
            to_simplified,
        }
    }

    /// Process-wide map, built once on first use from the generated tables.
    pub fn shared() -> &'static CharMap {
        static MAP: OnceLock<CharMap> = OnceLock::new();
        MAP.get_or_init(|| CharMap::from_tables(SIMPLIFIED, TRADITIONAL))
    }

    /// Counterpart of `c` in the target alphabet, if `c` is mapped.
    pub fn lookup(&self, c: char, direction: Direction) -> Option<char> {
        match direction {
            Direction::ToTraditional => self.to_traditional.get(&c).copied(),
            Direction::ToSimplified => self.to_simplified.get(&c).copied(),
        }
    }

    /// Number of mapped character pairs.
    pub fn len(&self) -> usize {
        self.to_traditional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_traditional.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_map_pairs_both_ways() {
        let map = CharMap::shared();
        assert_eq!(map.lookup('汉', Direction::ToTraditional), Some('漢'));
        assert_eq!(map.lookup('漢', Direction::ToSimplified), Some('汉'));
    }

    #[test]
    fn test_unmapped_character_returns_none() {
        let map = CharMap::shared();
        assert_eq!(map.lookup('A', Direction::ToTraditional), None);
        assert_eq!(map.lookup('汉', Direction::ToSimplified), None);
    }

    #[test]
    fn test_first_occurrence_wins_on_duplicates() {
        let map = CharMap::from_tables("冲冲", "沖衝");
        assert_eq!(map.lookup('冲', Direction::ToTraditional), Some('沖'));
        assert_eq!(map.lookup('沖', Direction::ToSimplified), Some('冲'));
        assert_eq!(map.lookup('衝', Direction::ToSimplified), Some('冲'));
    }

    #[test]
    fn test_generated_tables_have_equal_lengths() {
        assert_eq!(SIMPLIFIED.chars().count(), TRADITIONAL.chars().count());
        assert_eq!(CharMap::shared().len(), SIMPLIFIED.chars().count());
    }
}
