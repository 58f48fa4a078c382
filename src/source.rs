//! Sources of the text to translate
//!
//! A source always yields text. Failures are reported as text as well, so
//! they can be translated and shown like any other input.

use std::{
    fs,
    io::BufRead,
    path::{Path, PathBuf},
};

use log::{debug, warn};

/// Default limit for the number of characters taken from a source
pub const MAX_CHARS: usize = 300;

pub const UNSUPPORTED_FILE: &str = "Currently only supports .txt files";

pub trait TextSource {
    fn read_text(&mut self) -> String;
}

/// The first `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Reads a single line, e.g. from stdin
#[derive(Debug)]
pub struct Keyboard<R> {
    reader: R,
    max_chars: usize,
}

impl<R: BufRead> Keyboard<R> {
    pub fn new(reader: R) -> Self {
        Keyboard {
            reader,
            max_chars: MAX_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl<R: BufRead> TextSource for Keyboard<R> {
    fn read_text(&mut self) -> String {
        let mut line = String::new();
        if let Err(e) = self.reader.read_line(&mut line) {
            warn!("reading input failed: {e}");
            return format!("Input read failed: {e}");
        }
        let line = line.trim_end_matches(['\r', '\n']);
        truncate_chars(line, self.max_chars)
    }
}

/// Reads a UTF-8 text file. Only `.txt` files are supported.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
    max_chars: usize,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFile {
            path: path.into(),
            max_chars: MAX_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_supported(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "txt")
    }
}

impl TextSource for TextFile {
    fn read_text(&mut self) -> String {
        if !self.is_supported() {
            debug!("unsupported file {:?}", self.path);
            return UNSUPPORTED_FILE.to_string();
        }
        match fs::read_to_string(&self.path) {
            Ok(text) => truncate_chars(&text, self.max_chars),
            Err(e) => {
                warn!("reading {:?} failed: {e}", self.path);
                format!("File read failed: {e}")
            }
        }
    }
}
