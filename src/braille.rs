//! Six-dot braille cells and the symbols shown on them

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
    #[error("Invalid braille group {0:?}")]
    InvalidGroup(String),
}

/// One pin of a six-dot cell.
#[derive(EnumSetType, Debug)]
pub enum Dot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

impl Dot {
    pub fn from_position(position: u8) -> Option<Dot> {
        match position {
            1 => Some(Dot::Dot1),
            2 => Some(Dot::Dot2),
            3 => Some(Dot::Dot3),
            4 => Some(Dot::Dot4),
            5 => Some(Dot::Dot5),
            6 => Some(Dot::Dot6),
            _ => None,
        }
    }

    pub fn position(&self) -> u8 {
        match self {
            Dot::Dot1 => 1,
            Dot::Dot2 => 2,
            Dot::Dot3 => 3,
            Dot::Dot4 => 4,
            Dot::Dot5 => 5,
            Dot::Dot6 => 6,
        }
    }

    fn to_hex(self) -> u32 {
        match self {
            Dot::Dot1 => 0x01,
            Dot::Dot2 => 0x02,
            Dot::Dot3 => 0x04,
            Dot::Dot4 => 0x08,
            Dot::Dot5 => 0x10,
            Dot::Dot6 => 0x20,
        }
    }
}

/// The raised pins of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotSet(EnumSet<Dot>);

impl From<EnumSet<Dot>> for DotSet {
    fn from(value: EnumSet<Dot>) -> Self {
        DotSet(value)
    }
}

impl FromIterator<Dot> for DotSet {
    fn from_iter<T: IntoIterator<Item = Dot>>(iter: T) -> Self {
        DotSet(EnumSet::from_iter(iter))
    }
}

impl DotSet {
    /// Build a dot set from pin positions. Positions outside `1..=6`
    /// are ignored.
    pub fn from_positions(positions: &[u8]) -> Self {
        positions
            .iter()
            .filter_map(|p| Dot::from_position(*p))
            .collect()
    }

    pub fn dots(&self) -> EnumSet<Dot> {
        self.0
    }

    /// Pin positions in ascending order, e.g. `[1, 3, 4, 5]`
    pub fn positions(&self) -> Vec<u8> {
        self.0.iter().map(|d| d.position()).collect()
    }

    /// Pins that are raised in `target` but not in `self`
    pub fn to_raise(&self, target: DotSet) -> EnumSet<Dot> {
        target.0.difference(self.0)
    }

    /// Pins that are raised in `self` but not in `target`
    pub fn to_lower(&self, target: DotSet) -> EnumSet<Dot> {
        self.0.difference(target.0)
    }

    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(Dot::to_hex)
            .fold(0x2800, |acc, x| acc | x);
        // every combination of six dots lies inside the braille patterns block
        char::from_u32(unicode).unwrap_or('\u{2800}')
    }

    /// Dot notation as used in braille tables, e.g. `"1345"`. The empty
    /// cell is written as `"0"`.
    pub fn to_dots(&self) -> String {
        if self.0.is_empty() {
            "0".to_string()
        } else {
            self.0.iter().map(|d| d.position().to_string()).collect()
        }
    }
}

impl std::fmt::Display for DotSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

/// A dot set together with a human readable label. The label is only used
/// for narration and diagnostics, e.g. `"你-n"` or `"#"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub dots: DotSet,
    pub label: String,
}

impl Symbol {
    pub fn new(dots: DotSet, label: impl Into<String>) -> Self {
        Symbol {
            dots,
            label: label.into(),
        }
    }
}

/// One display step: the `primary` symbol goes to the left cell, the
/// optional `secondary` symbol to the right cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub primary: Symbol,
    pub secondary: Option<Symbol>,
}

impl Group {
    pub fn single(primary: Symbol) -> Self {
        Group {
            primary,
            secondary: None,
        }
    }

    pub fn pair(primary: Symbol, secondary: Symbol) -> Self {
        Group {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Dot notation of the group, cells separated by `-`, e.g. `"1345-24"`
    pub fn to_dots(&self) -> String {
        match &self.secondary {
            Some(secondary) => format!("{}-{}", self.primary.dots.to_dots(), secondary.dots.to_dots()),
            None => self.primary.dots.to_dots(),
        }
    }

    pub fn to_unicode(&self) -> String {
        self.cells().map(|s| s.dots.to_unicode()).collect()
    }

    /// Labels of the group joined with `+`, e.g. `"你-n + 你-i"`
    pub fn describe(&self) -> String {
        match &self.secondary {
            Some(secondary) => format!("{} + {}", self.primary.label, secondary.label),
            None => self.primary.label.clone(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Symbol> {
        std::iter::once(&self.primary).chain(self.secondary.iter())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

/// Render a group sequence in dot notation, groups separated by a space
pub fn groups_to_dots(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|g| g.to_dots())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a group sequence as Unicode braille, groups separated by a space
pub fn groups_to_unicode(groups: &[Group]) -> String {
    groups
        .iter()
        .map(|g| g.to_unicode())
        .collect::<Vec<_>>()
        .join(" ")
}

fn char_to_dot(c: char) -> Result<Dot, ParseError> {
    c.to_digit(10)
        .and_then(|d| Dot::from_position(d as u8))
        .ok_or(ParseError::InvalidBraille { character: Some(c) })
}

/// Parse dot notation such as `"1345"` into a [`DotSet`]. `"0"` is the
/// empty cell.
pub fn chars_to_dots(chars: &str) -> Result<DotSet, ParseError> {
    match chars {
        "" => Err(ParseError::InvalidBraille { character: None }),
        "0" => Ok(DotSet::default()),
        _ => chars.chars().map(char_to_dot).collect(),
    }
}

/// Parse the dot notation of one group, e.g. `"1345-24"` or `"1"`, into
/// the dot sets of its cells.
pub fn group_dots(chars: &str) -> Result<Vec<DotSet>, ParseError> {
    let cells = chars
        .split('-')
        .map(chars_to_dots)
        .collect::<Result<Vec<_>, _>>()?;
    if cells.len() > 2 {
        return Err(ParseError::InvalidGroup(chars.to_string()));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumset::enum_set;

    #[test]
    fn test_chars_to_dots() {
        assert_eq!(
            chars_to_dots("123"),
            Ok(DotSet(enum_set!(Dot::Dot1 | Dot::Dot2 | Dot::Dot3)))
        );
        assert_eq!(chars_to_dots("0"), Ok(DotSet::default()));
        assert_eq!(
            chars_to_dots("17"),
            Err(ParseError::InvalidBraille {
                character: Some('7')
            })
        );
        assert_eq!(
            chars_to_dots("a"),
            Err(ParseError::InvalidBraille {
                character: Some('a')
            })
        );
        assert_eq!(
            chars_to_dots(""),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_group_dots() {
        assert_eq!(
            group_dots("1345-24"),
            Ok(vec![
                DotSet::from_positions(&[1, 3, 4, 5]),
                DotSet::from_positions(&[2, 4])
            ])
        );
        assert_eq!(group_dots("1"), Ok(vec![DotSet::from_positions(&[1])]));
        assert_eq!(
            group_dots("1-"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            group_dots("1-2-3"),
            Err(ParseError::InvalidGroup("1-2-3".to_string()))
        );
    }

    #[test]
    fn test_positions() {
        let dots = DotSet::from_positions(&[5, 1, 3, 3]);
        assert_eq!(dots.positions(), vec![1, 3, 5]);
        assert_eq!(dots.to_dots(), "135");
        assert_eq!(DotSet::from_positions(&[0, 7, 2]).positions(), vec![2]);
    }

    #[test]
    fn test_dots_to_unicode() {
        assert_eq!(DotSet::default().to_unicode(), '⠀');
        assert_eq!(DotSet::from_positions(&[1]).to_unicode(), '⠁');
        assert_eq!(DotSet::from_positions(&[1, 3, 4, 5]).to_unicode(), '⠝');
        assert_eq!(
            DotSet::from_positions(&[1, 2, 3, 4, 5, 6]).to_unicode(),
            '⠿'
        );
    }

    #[test]
    fn test_diff() {
        let current = DotSet::from_positions(&[1, 2]);
        let target = DotSet::from_positions(&[2, 3]);
        assert_eq!(current.to_raise(target), enum_set!(Dot::Dot3));
        assert_eq!(current.to_lower(target), enum_set!(Dot::Dot1));
        assert!(current.to_raise(current).is_empty());
        assert!(current.to_lower(current).is_empty());
    }

    #[test]
    fn test_group_rendering() {
        let group = Group::pair(
            Symbol::new(DotSet::from_positions(&[1, 3, 4, 5]), "你-n"),
            Symbol::new(DotSet::from_positions(&[2, 4]), "你-i"),
        );
        assert_eq!(group.to_dots(), "1345-24");
        assert_eq!(group.to_unicode(), "⠝⠊");
        assert_eq!(group.describe(), "你-n + 你-i");
        let single = Group::single(Symbol::new(DotSet::from_positions(&[1]), "a"));
        assert_eq!(single.to_dots(), "1");
        assert_eq!(single.to_string(), "⠁");
        assert_eq!(groups_to_dots(&[group.clone(), single.clone()]), "1345-24 1");
        assert_eq!(groups_to_unicode(&[group, single]), "⠝⠊ ⠁");
        assert_eq!(groups_to_dots(&[]), "");
    }
}
