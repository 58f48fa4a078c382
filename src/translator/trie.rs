use std::collections::HashMap;

#[derive(Debug)]
struct TrieNode<T> {
    value: Option<T>,
    transitions: HashMap<char, TrieNode<T>>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        TrieNode {
            value: None,
            transitions: HashMap::new(),
        }
    }
}

/// A prefix tree that finds all the keys that are a prefix of some input
#[derive(Debug)]
pub struct Trie<T> {
    root: TrieNode<T>,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Trie {
            root: TrieNode::default(),
        }
    }
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: T) {
        let mut current_node = &mut self.root;

        for c in key.chars() {
            current_node = current_node.transitions.entry(c).or_default();
        }

        current_node.value = Some(value);
    }

    /// Return the values of all keys that are a prefix of `input`
    /// together with the key length in bytes, shortest first.
    pub fn find_prefixes(&self, input: &str) -> Vec<(usize, &T)> {
        let mut current_node = &self.root;
        let mut matches = Vec::new();

        for (offset, c) in input.char_indices() {
            match current_node.transitions.get(&c) {
                Some(node) => {
                    current_node = node;
                    if let Some(ref value) = node.value {
                        matches.push((offset + c.len_utf8(), value));
                    }
                }
                None => break,
            }
        }
        matches
    }

    /// The value of the longest key that is a prefix of `input`
    pub fn longest_prefix(&self, input: &str) -> Option<(usize, &T)> {
        self.find_prefixes(input).pop()
    }
}

impl<'a, T> FromIterator<(&'a str, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (&'a str, T)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for (key, value) in iter {
            trie.insert(key, value);
        }
        trie
    }
}
