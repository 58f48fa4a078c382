//! Translation of Chinese, English and digit text into six-dot braille for a
//! display with two cells.
//!
//! ```
//! use sentranslator::braille::groups_to_dots;
//!
//! let groups = sentranslator::translate("ab12");
//! assert_eq!(groups_to_dots(&groups), "1-12 3456-1 12");
//! ```

use braille::Group;
use translator::Translator;

pub mod braille;
pub mod config;
pub mod display;
pub mod source;
pub mod speech;
pub mod test;
pub mod translator;
pub mod yaml;

/// Translate `input` with the built-in pinyin dictionary
pub fn translate(input: &str) -> Vec<Group> {
    Translator::new().translate(input)
}
