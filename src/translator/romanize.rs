//! Readings of Chinese characters
//!
//! The classifier only needs the first (most common) toneless reading of a
//! character. [`PinyinRomanizer`] gets it from the `pinyin` crate; tests and
//! other callers can plug in their own [`Romanizer`].

use std::collections::HashMap;

use pinyin::ToPinyin;

/// Source for the romanized reading of a single character
pub trait Romanizer {
    /// The first toneless reading of `c`, if the character has one
    fn reading(&self, c: char) -> Option<String>;
}

/// Readings from the built-in pinyin dictionary
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn reading(&self, c: char) -> Option<String> {
        c.to_pinyin().map(|p| p.plain().to_string())
    }
}

/// Readings from a fixed map of characters
#[derive(Debug, Default, Clone)]
pub struct MapRomanizer(HashMap<char, String>);

impl MapRomanizer {
    pub fn new(readings: &[(char, &str)]) -> Self {
        MapRomanizer(
            readings
                .iter()
                .map(|(c, reading)| (*c, reading.to_string()))
                .collect(),
        )
    }
}

impl Romanizer for MapRomanizer {
    fn reading(&self, c: char) -> Option<String> {
        self.0.get(&c).cloned()
    }
}

impl<R: Romanizer + ?Sized> Romanizer for &R {
    fn reading(&self, c: char) -> Option<String> {
        (**self).reading(c)
    }
}

/// Bring a reading into the form the segmenter expects: lowercase, with
/// `ü` written as `v`. Returns `None` unless the result consists of one or
/// more lowercase ASCII letters.
pub fn normalize(reading: &str) -> Option<String> {
    let normalized = reading.to_lowercase().replace('ü', "v");
    if !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(normalized)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_readings() {
        assert_eq!(normalize("ni"), Some("ni".to_string()));
        assert_eq!(normalize("Zhong"), Some("zhong".to_string()));
        assert_eq!(normalize("lü"), Some("lv".to_string()));
        assert_eq!(normalize("nǐ"), None);
        assert_eq!(normalize("ni3"), None);
        assert_eq!(normalize("n i"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn pinyin_readings() {
        let romanizer = PinyinRomanizer;
        assert_eq!(romanizer.reading('你'), Some("ni".to_string()));
        assert_eq!(romanizer.reading('是'), Some("shi".to_string()));
        assert_eq!(romanizer.reading('好').as_deref(), Some("hao"));
        assert_eq!(romanizer.reading('a'), None);
    }

    #[test]
    fn map_readings() {
        let romanizer = MapRomanizer::new(&[('你', "ni")]);
        assert_eq!(romanizer.reading('你'), Some("ni".to_string()));
        assert_eq!(romanizer.reading('好'), None);
    }
}
