//! Translation of text into display groups
//!
//! A translation is a single pass over the input:
//!
//! 1. every character is classified and mapped to its symbols
//!    ([`classifier`]),
//! 2. the number indicators inside runs of digits are dropped
//!    ([`numeric`]),
//! 3. the symbols are grouped into display steps for the two cells
//!    ([`grouping`]).
//!
//! All steps are lazy iterators, so a caller that stops early does no
//! work for the rest of the text.

use crate::braille::Group;

pub mod classifier;
pub mod grouping;
pub mod numeric;
pub mod pinyin;
pub mod romanize;
pub mod tables;
mod trie;

pub use classifier::{Category, ClassifiedChar, Classifier};
pub use grouping::Groups;
pub use numeric::NumberRuns;
pub use romanize::{MapRomanizer, PinyinRomanizer, Romanizer};

/// Translates text into display groups
#[derive(Debug, Default, Clone)]
pub struct Translator<R = PinyinRomanizer> {
    classifier: Classifier<R>,
}

impl Translator<PinyinRomanizer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Romanizer> Translator<R> {
    pub fn with_romanizer(romanizer: R) -> Self {
        Translator {
            classifier: Classifier::new(romanizer),
        }
    }

    pub fn classify<'a>(&'a self, input: &'a str) -> impl Iterator<Item = ClassifiedChar> + 'a {
        input.chars().map(|c| self.classifier.classify(c))
    }

    /// The classified characters of `input` after the number indicators
    /// have been collapsed
    pub fn trace(&self, input: &str) -> Vec<ClassifiedChar> {
        NumberRuns::new(self.classify(input)).collect()
    }

    /// Lazily produce the display groups of `input`, in display order.
    /// Every call starts with a fresh state.
    pub fn groups<'a>(
        &'a self,
        input: &'a str,
    ) -> Groups<NumberRuns<impl Iterator<Item = ClassifiedChar> + 'a>> {
        Groups::new(NumberRuns::new(self.classify(input)))
    }

    pub fn translate(&self, input: &str) -> Vec<Group> {
        self.groups(input).collect()
    }
}
