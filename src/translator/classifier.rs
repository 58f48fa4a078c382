//! Character classification
//!
//! Every input character is put into a [`Category`] and mapped to the
//! symbols it is written with. The checks are done in a fixed order and the
//! first one that applies wins: punctuation, ASCII digits, ASCII letters,
//! Chinese characters and finally everything else.

use log::debug;

use crate::{
    braille::Symbol,
    translator::{
        pinyin,
        romanize::{self, Romanizer},
        tables::{self, Mark, DIGIT_TABLE, FINAL_TABLE, INITIAL_TABLE, LETTER_TABLE},
    },
};

/// Label of the number indicator symbol
pub const NUMBER_LABEL: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Chinese,
    English,
    Digit,
    Punctuation,
    Other,
}

impl Category {
    /// English letters and digits can share a display group with a
    /// neighbour
    pub fn is_pairable(&self) -> bool {
        matches!(self, Category::English | Category::Digit)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Chinese => write!(f, "chinese"),
            Category::English => write!(f, "english"),
            Category::Digit => write!(f, "digit"),
            Category::Punctuation => write!(f, "punctuation"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// An input character together with its category and symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedChar {
    pub category: Category,
    pub character: char,
    /// Between zero and two symbols
    pub symbols: Vec<Symbol>,
}

impl ClassifiedChar {
    pub fn new(category: Category, character: char, symbols: Vec<Symbol>) -> Self {
        ClassifiedChar {
            category,
            character,
            symbols,
        }
    }

    fn other(character: char) -> Self {
        ClassifiedChar::new(Category::Other, character, Vec::new())
    }
}

/// Maps single characters to [`ClassifiedChar`]s
#[derive(Debug, Default, Clone)]
pub struct Classifier<R> {
    romanizer: R,
}

/// Chinese characters covered by the classifier
pub fn is_chinese(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

impl<R: Romanizer> Classifier<R> {
    pub fn new(romanizer: R) -> Self {
        Classifier { romanizer }
    }

    pub fn classify(&self, c: char) -> ClassifiedChar {
        if let Some(mark) = tables::punctuation(c) {
            let symbols = match mark {
                Mark::Dots(dots) => vec![Symbol::new(dots, c)],
                Mark::Silent => Vec::new(),
            };
            ClassifiedChar::new(Category::Punctuation, c, symbols)
        } else if c.is_ascii_digit() {
            self.digit(c)
        } else if c.is_ascii_alphabetic() {
            self.letter(c)
        } else if is_chinese(c) {
            self.chinese(c)
        } else {
            ClassifiedChar::other(c)
        }
    }

    fn digit(&self, c: char) -> ClassifiedChar {
        let mut symbols = vec![Symbol::new(tables::number_indicator(), NUMBER_LABEL)];
        if let Some(dots) = DIGIT_TABLE.get(&c) {
            symbols.push(Symbol::new(dots, c));
        }
        ClassifiedChar::new(Category::Digit, c, symbols)
    }

    fn letter(&self, c: char) -> ClassifiedChar {
        match LETTER_TABLE.get(&c.to_ascii_lowercase()) {
            Some(dots) => ClassifiedChar::new(Category::English, c, vec![Symbol::new(dots, c)]),
            None => {
                debug!("no braille for letter {c:?}");
                ClassifiedChar::other(c)
            }
        }
    }

    fn chinese(&self, c: char) -> ClassifiedChar {
        let Some(reading) = self.romanizer.reading(c) else {
            debug!("no reading for {c:?}");
            return ClassifiedChar::other(c);
        };
        let Some(reading) = romanize::normalize(&reading) else {
            debug!("malformed reading {reading:?} for {c:?}");
            return ClassifiedChar::other(c);
        };

        let syllable = pinyin::split(&reading);
        let mut symbols = Vec::with_capacity(2);
        if let Some(initial) = &syllable.initial {
            match INITIAL_TABLE.get(initial.as_str()) {
                Some(dots) => symbols.push(Symbol::new(dots, format!("{c}-{initial}"))),
                None => debug!("no braille for initial {initial:?} of {c:?}"),
            }
        }
        if !syllable.r#final.is_empty() {
            let rhyme = &syllable.r#final;
            match FINAL_TABLE.get(rhyme.as_str()) {
                Some(dots) => symbols.push(Symbol::new(dots, format!("{c}-{rhyme}"))),
                None => debug!("no braille for final {rhyme:?} of {c:?}"),
            }
        }
        ClassifiedChar::new(Category::Chinese, c, symbols)
    }
}
