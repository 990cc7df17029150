//! Whitespace word tokenizer used by the scorers

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("word pattern is a valid regex"));

/// A whitespace-delimited word of a query or candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Lowercased word text
    pub text: String,
    /// Character offset of the word in the original string
    pub start: usize,
    /// Length of the lowercased word in characters
    pub len: usize,
    /// Original character index behind each character of `text`
    origins: Vec<usize>,
    /// Length of the original word in characters
    original_len: usize,
}

impl Word {
    fn new(raw: &str, start: usize) -> Self {
        // lowercasing may expand a character (`İ` -> `i̇`)
        let mut origins = Vec::with_capacity(raw.len());
        let mut original_len = 0;
        for (idx, c) in raw.chars().enumerate() {
            origins.extend(std::iter::repeat_n(idx, c.to_lowercase().count()));
            original_len = idx + 1;
        }
        Self {
            text: raw.to_lowercase(),
            start,
            len: origins.len(),
            origins,
            original_len,
        }
    }

    /// Find `needle` inside this word, returning the character offset
    ///
    /// The offset counts characters of the lowercased text.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text
            .find(needle)
            .map(|byte_pos| self.text[..byte_pos].chars().count())
    }

    /// Map `len` lowercased characters at `offset` back onto the original word
    ///
    /// Returns the offset and length in original characters. A partially
    /// covered original character counts as covered.
    #[must_use]
    pub fn original_span(&self, offset: usize, len: usize) -> (usize, usize) {
        let first = self.origins.get(offset).copied().unwrap_or(self.original_len);
        let end = match len {
            0 => first,
            _ => self
                .origins
                .get(offset + len - 1)
                .map_or(self.original_len, |last| last + 1),
        };
        (first, end.saturating_sub(first))
    }
}

/// Split `text` into lowercase words tagged with their original offsets
///
/// Offsets count characters of the untouched input so they can be used
/// for highlighting the original-case string.
#[must_use]
pub fn words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in WORD.find_iter(text) {
        char_cursor += text[byte_cursor..m.start()].chars().count();
        byte_cursor = m.start();
        words.push(Word::new(m.as_str(), char_cursor));
    }

    words
}
