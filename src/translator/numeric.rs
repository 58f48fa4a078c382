//! Numeric indication
//!
//! A run of digits is introduced by a single number indicator. Every digit
//! is classified with its own indicator, so the indicators of all but the
//! first digit of a run have to be dropped again.
//!
//! [`Indicator`] is a simple state machine that knows whether the
//! translation is currently inside a run of digits. [`NumberRuns`] applies
//! it to a stream of classified characters.

use crate::translator::classifier::{Category, ClassifiedChar};

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Default,
    Numeric,
}

/// Possible indication events of the [`Indicator`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Indication {
    NumericStart,
    NumericEnd,
}

/// Keeps track of whether a translation is inside a run of digits.
///
/// The state changes to `State::Numeric` as soon as a digit is
/// encountered and back to `State::Default` with the first character that
/// is not a digit.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transition method of the state machine. Returns an
    /// [`Indication`] when the state changes and `None` otherwise.
    pub fn next(&mut self, category: Category) -> Option<Indication> {
        match (self.state, category) {
            (State::Default, Category::Digit) => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, Category::Digit) => None,
            (State::Numeric, _) => {
                self.state = State::Default;
                Some(Indication::NumericEnd)
            }
            (State::Default, _) => None,
        }
    }
}

/// Iterator adapter that removes the number indicator from every digit
/// that continues a run, i.e. every digit for which the [`Indicator`] does
/// not report [`Indication::NumericStart`]
#[derive(Debug, Clone)]
pub struct NumberRuns<I> {
    chars: I,
    indicator: Indicator,
}

impl<I> NumberRuns<I> {
    pub fn new(chars: I) -> Self {
        NumberRuns {
            chars,
            indicator: Indicator::new(),
        }
    }
}

impl<I: Iterator<Item = ClassifiedChar>> Iterator for NumberRuns<I> {
    type Item = ClassifiedChar;

    fn next(&mut self) -> Option<Self::Item> {
        let mut c = self.chars.next()?;
        let indication = self.indicator.next(c.category);
        if c.category == Category::Digit
            && indication != Some(Indication::NumericStart)
            && !c.symbols.is_empty()
        {
            c.symbols.remove(0);
        }
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
