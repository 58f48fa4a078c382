//! Grouping of symbols into display steps
//!
//! The display has two cells, so every step shows up to two symbols:
//!
//! * A Chinese character is shown on its own, the initial on the left cell
//!   and the final on the right cell.
//! * An English letter or a digit shares a step with the next character if
//!   that is also a letter or a digit. A digit that opens a number run is
//!   written with two symbols (number indicator and digit) and fills a step
//!   on its own.
//! * Punctuation and other characters get one step per symbol.
//!
//! Characters without symbols produce no step, but they still separate
//! their neighbours.

use std::{collections::VecDeque, iter::Peekable};

use crate::{
    braille::Group,
    translator::classifier::{Category, ClassifiedChar},
};

/// Iterator over the display [`Group`]s of a stream of classified
/// characters. The number indicators are expected to be collapsed already,
/// see [`NumberRuns`](crate::translator::numeric::NumberRuns).
#[derive(Debug)]
pub struct Groups<I: Iterator<Item = ClassifiedChar>> {
    chars: Peekable<I>,
    pending: VecDeque<Group>,
}

/// A character that can share a group with a neighbour
fn is_pairable(c: &ClassifiedChar) -> bool {
    c.category.is_pairable() && c.symbols.len() == 1
}

impl<I: Iterator<Item = ClassifiedChar>> Groups<I> {
    pub fn new(chars: I) -> Self {
        Groups {
            chars: chars.peekable(),
            pending: VecDeque::new(),
        }
    }

    fn two_cells(c: ClassifiedChar) -> Option<Group> {
        let mut symbols = c.symbols.into_iter();
        let primary = symbols.next()?;
        Some(Group {
            primary,
            secondary: symbols.next(),
        })
    }

    fn pair(&mut self, c: ClassifiedChar) -> Option<Group> {
        if !is_pairable(&c) {
            return Self::two_cells(c);
        }
        let mut symbols = c.symbols.into_iter();
        let primary = symbols.next()?;
        let next = self.chars.next_if(is_pairable);
        match next.and_then(|n| n.symbols.into_iter().next()) {
            Some(secondary) => Some(Group::pair(primary, secondary)),
            None => Some(Group::single(primary)),
        }
    }
}

impl<I: Iterator<Item = ClassifiedChar>> Iterator for Groups<I> {
    type Item = Group;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(group) = self.pending.pop_front() {
                return Some(group);
            }
            let c = self.chars.next()?;
            let group = match c.category {
                Category::Chinese => Self::two_cells(c),
                Category::English | Category::Digit => self.pair(c),
                Category::Punctuation | Category::Other => {
                    self.pending
                        .extend(c.symbols.into_iter().map(Group::single));
                    None
                }
            };
            if group.is_some() {
                return group;
            }
        }
    }
}
