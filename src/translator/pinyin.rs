//! Pinyin syllable segmentation
//!
//! A syllable is split into an optional initial consonant and a final. The
//! initial is the longest initial that is a prefix of the syllable, so that
//! `zh`, `ch` and `sh` win over `z`, `c` and `s`. Two rewrite rules are
//! applied afterwards:
//!
//! * `g`, `k` and `h` become `j`, `q` and `x` if the final starts with `i`,
//!   `u`, `ü` or `v`.
//! * a bare `i` after `z`, `c`, `s`, `zh`, `ch`, `sh` or `r` is inherent to
//!   the initial and is dropped.

use std::sync::LazyLock;

use crate::translator::{tables, trie::Trie};

static INITIALS: LazyLock<Trie<&'static str>> =
    LazyLock::new(|| tables::initials().map(|i| (i, i)).collect());

/// A syllable split into initial and final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Option<String>,
    /// The final, empty if it was elided or the syllable is a bare initial
    pub r#final: String,
}

impl Syllable {
    fn new(initial: Option<&str>, r#final: &str) -> Self {
        Syllable {
            initial: initial.map(str::to_string),
            r#final: r#final.to_string(),
        }
    }
}

fn palatalize(initial: &str, r#final: &str) -> Option<&'static str> {
    if !r#final.starts_with(['i', 'u', 'ü', 'v']) {
        return None;
    }
    match initial {
        "g" => Some("j"),
        "k" => Some("q"),
        "h" => Some("x"),
        _ => None,
    }
}

fn is_elided(initial: &str, r#final: &str) -> bool {
    r#final == "i" && matches!(initial, "z" | "c" | "s" | "zh" | "ch" | "sh" | "r")
}

/// Split a lowercase syllable into initial and final.
///
/// The caller is expected to pass lowercase letters only.
pub fn split(syllable: &str) -> Syllable {
    let Some((length, &initial)) = INITIALS.longest_prefix(syllable) else {
        return Syllable::new(None, syllable);
    };
    let r#final = &syllable[length..];

    let initial = palatalize(initial, r#final).unwrap_or(initial);
    if is_elided(initial, r#final) {
        Syllable::new(Some(initial), "")
    } else {
        Syllable::new(Some(initial), r#final)
    }
}
