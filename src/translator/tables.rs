//! Symbol tables
//!
//! The tables of a simplified Mandarin braille scheme: initials and finals
//! of pinyin syllables, Chinese punctuation, digits and Latin letters. All
//! tables are built once on first use and never change afterwards, so they
//! can be shared freely.
//!
//! Some initials share a dot pattern (`h`/`x`/`j`, `k`/`q`) as do some
//! finals (`o`/`uo`, `ui`/`uei`). These collisions are part of the scheme.

use std::{collections::HashMap, sync::LazyLock};

use crate::braille::DotSet;

/// Dot pattern that introduces a run of digits
pub const NUMBER_INDICATOR: [u8; 4] = [3, 4, 5, 6];

const INITIALS: &[(&str, &[u8])] = &[
    ("b", &[1, 2]),
    ("m", &[1, 3, 4]),
    ("d", &[1, 4, 5]),
    ("n", &[1, 3, 4, 5]),
    ("g", &[1, 2, 4, 5]),
    ("h", &[1, 2, 5]),
    ("x", &[1, 2, 5]),
    ("j", &[1, 2, 5]),
    ("ch", &[1, 2, 3, 4, 5]),
    ("r", &[2, 4, 5]),
    ("c", &[1, 4]),
    ("p", &[1, 2, 3, 4]),
    ("f", &[1, 2, 4]),
    ("t", &[2, 3, 4, 5]),
    ("l", &[1, 2, 3]),
    ("k", &[1, 3]),
    ("q", &[1, 3]),
    ("zh", &[3, 4]),
    ("sh", &[1, 5, 6]),
    ("z", &[1, 3, 5, 6]),
    ("s", &[2, 3, 4]),
    ("y", &[3, 4, 5, 6]),
    ("w", &[2, 3, 5, 6]),
];

const FINALS: &[(&str, &[u8])] = &[
    ("a", &[3, 5]),
    ("i", &[2, 4]),
    ("ü", &[3, 4, 6]),
    ("v", &[3, 4, 6]),
    ("ai", &[2, 4, 6]),
    ("ei", &[2, 3, 4, 6]),
    ("ia", &[1, 2, 4, 6]),
    ("ie", &[1, 5]),
    ("e", &[2, 6]),
    ("u", &[1, 3, 6]),
    ("er", &[1, 2, 3, 5]),
    ("ao", &[2, 3, 5]),
    ("ou", &[1, 2, 3, 5, 6]),
    ("iao", &[3, 4, 5]),
    ("iu", &[1, 2, 5, 6]),
    ("o", &[1, 3, 5]),
    ("ui", &[2, 4, 5, 6]),
    ("an", &[1, 2, 3, 6]),
    ("en", &[3, 5, 6]),
    ("in", &[1, 2, 6]),
    ("un", &[4, 5, 6]),
    ("ün", &[4, 5, 6]),
    ("vn", &[4, 5, 6]),
    ("ang", &[2, 3, 6]),
    ("eng", &[3, 4, 5, 6]),
    ("ing", &[1, 6]),
    ("ong", &[2, 5, 6]),
    ("ua", &[1, 2, 3, 4, 5, 6]),
    ("uo", &[1, 3, 5]),
    ("uai", &[1, 3, 4, 5, 6]),
    ("uei", &[2, 4, 5, 6]),
    ("uan", &[1, 2, 4, 5, 6]),
    ("uen", &[2, 5]),
    ("uang", &[2, 3, 5, 6]),
    ("ueng", &[2, 5, 6]),
    ("ian", &[1, 4, 6]),
    ("iang", &[1, 3, 4, 6]),
    ("iong", &[1, 4, 5, 6]),
    ("üan", &[1, 2, 3, 4, 6]),
    ("van", &[1, 2, 3, 4, 6]),
    ("üe", &[2, 3, 4, 5, 6]),
    ("ve", &[2, 3, 4, 5, 6]),
    ("ue", &[2, 3, 4, 5, 6]),
];

/// Punctuation marks. Marks that are written with two characters (em dash
/// `——` and ellipsis `……`) map each half to `None`: they take up no cell.
const PUNCTUATION: &[(char, Option<&[u8]>)] = &[
    ('。', Some(&[2, 5, 6])),
    ('，', Some(&[2])),
    ('？', Some(&[2, 3, 6])),
    ('！', Some(&[2, 3, 5])),
    ('：', Some(&[2, 5])),
    ('；', Some(&[2, 3])),
    ('“', Some(&[2, 3, 6])),
    ('”', Some(&[2, 3, 5, 6])),
    ('（', Some(&[2, 3, 5, 6])),
    ('）', Some(&[2, 3, 5, 6])),
    ('—', None),
    ('…', None),
    ('、', Some(&[3, 4])),
];

const DIGITS: &[(char, &[u8])] = &[
    ('0', &[2, 4, 5]),
    ('1', &[1]),
    ('2', &[1, 2]),
    ('3', &[1, 4]),
    ('4', &[1, 4, 5]),
    ('5', &[1, 5]),
    ('6', &[1, 2, 4]),
    ('7', &[1, 2, 4, 5]),
    ('8', &[1, 2, 5]),
    ('9', &[2, 4]),
];

const LETTERS: &[(char, &[u8])] = &[
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
];

/// How a punctuation mark is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The mark is written with the given dots
    Dots(DotSet),
    /// The mark is known but takes up no cell
    Silent,
}

/// A read-only mapping from keys to dot patterns
#[derive(Debug)]
pub struct SymbolTable<K> {
    entries: HashMap<K, DotSet>,
}

impl<K: std::hash::Hash + Eq> SymbolTable<K> {
    fn compile<'a>(rules: impl IntoIterator<Item = (K, &'a [u8])>) -> Self {
        SymbolTable {
            entries: rules
                .into_iter()
                .map(|(key, dots)| (key, DotSet::from_positions(dots)))
                .collect(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<DotSet>
    where
        K: std::borrow::Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.entries.get(key).copied()
    }
}

pub static INITIAL_TABLE: LazyLock<SymbolTable<&'static str>> =
    LazyLock::new(|| SymbolTable::compile(INITIALS.iter().copied()));

pub static FINAL_TABLE: LazyLock<SymbolTable<&'static str>> =
    LazyLock::new(|| SymbolTable::compile(FINALS.iter().copied()));

pub static DIGIT_TABLE: LazyLock<SymbolTable<char>> =
    LazyLock::new(|| SymbolTable::compile(DIGITS.iter().copied()));

pub static LETTER_TABLE: LazyLock<SymbolTable<char>> =
    LazyLock::new(|| SymbolTable::compile(LETTERS.iter().copied()));

static PUNCTUATION_TABLE: LazyLock<HashMap<char, Mark>> = LazyLock::new(|| {
    PUNCTUATION
        .iter()
        .map(|(c, dots)| {
            let mark = match dots {
                Some(dots) => Mark::Dots(DotSet::from_positions(dots)),
                None => Mark::Silent,
            };
            (*c, mark)
        })
        .collect()
});

/// Look up a punctuation mark
pub fn punctuation(c: char) -> Option<Mark> {
    PUNCTUATION_TABLE.get(&c).copied()
}

pub fn number_indicator() -> DotSet {
    DotSet::from_positions(&NUMBER_INDICATOR)
}

/// The tables that can be searched with [`lookup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Initial,
    Final,
    Punctuation,
    Digit,
    Letter,
}

/// Look up `key` in `table`. Keys of the character tables must be a single
/// character. Silent punctuation marks have no dots.
pub fn lookup(table: Table, key: &str) -> Option<DotSet> {
    let single = || {
        let mut chars = key.chars();
        chars.next().filter(|_| chars.next().is_none())
    };
    match table {
        Table::Initial => INITIAL_TABLE.get(key),
        Table::Final => FINAL_TABLE.get(key),
        Table::Punctuation => match punctuation(single()?)? {
            Mark::Dots(dots) => Some(dots),
            Mark::Silent => None,
        },
        Table::Digit => DIGIT_TABLE.get(&single()?),
        Table::Letter => LETTER_TABLE.get(&single()?),
    }
}

/// All the initials, as used for prefix matching in the segmenter
pub fn initials() -> impl Iterator<Item = &'static str> {
    INITIALS.iter().map(|(initial, _)| *initial)
}
