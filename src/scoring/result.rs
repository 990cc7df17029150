//! Scoring result types

use std::fmt;

/// A highlighted region of a candidate string
///
/// Offsets and lengths are counted in characters of the original
/// (untouched) candidate, so renderers can slice the display string directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    /// Character offset of the first matched character
    pub start: usize,
    /// Number of matched characters
    pub len: usize,
}

impl MatchSpan {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Character offset one past the last matched character
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check whether the character at `position` lies inside this span
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end()
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, len): (usize, usize)) -> Self {
        Self::new(start, len)
    }
}

/// Outcome of scoring one candidate against a query
///
/// Only `score` decides filtering and ordering: a score of 0 removes the
/// candidate from the filtered view, higher scores sort first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringResult {
    /// Accumulated fuzzy score
    pub score: u32,
    /// Highlight spans in the order they were recorded
    pub matches: Vec<MatchSpan>,
}

impl ScoringResult {
    /// Create an empty result (score 0, no matches)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            matches: Vec::new(),
        }
    }

    /// Create a result with a fixed score and no matches
    ///
    /// Handy for custom scorers that only rank and never highlight.
    #[must_use]
    pub const fn with_score(score: u32) -> Self {
        Self {
            score,
            matches: Vec::new(),
        }
    }

    /// Record a match: add `score` to the total and remember the span
    pub fn add_match(&mut self, position: usize, length: usize, score: u32) {
        self.score = self.score.saturating_add(score);
        self.matches.push(MatchSpan::new(position, length));
    }

    /// Whether the candidate survives filtering
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.score > 0
    }

    /// Whether the character at `position` is covered by any match
    #[must_use]
    pub fn is_highlighted(&self, position: usize) -> bool {
        self.matches.iter().any(|span| span.contains(position))
    }

    /// Whether the spans were recorded in strictly increasing start order
    #[must_use]
    pub fn in_query_order(&self) -> bool {
        self.matches.windows(2).all(|pair| pair[0].start < pair[1].start)
    }
}

impl fmt::Display for ScoringResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_match() {
        let mut result = ScoringResult::new();
        result.add_match(16, 3, 10);
        assert_eq!(result.score, 10);
        assert_eq!(result.matches, vec![MatchSpan::new(16, 3)]);

        result.add_match(27, 5, 15);
        assert_eq!(result.score, 25);
        assert_eq!(result.matches, vec![(16, 3).into(), (27, 5).into()]);
    }

    #[test]
    fn test_is_highlighted() {
        let mut result = ScoringResult::new();
        result.add_match(2, 3, 1);
        assert!(!result.is_highlighted(1));
        assert!(result.is_highlighted(2));
        assert!(result.is_highlighted(4));
        assert!(!result.is_highlighted(5));
    }

    #[test]
    fn test_in_query_order() {
        let mut result = ScoringResult::with_score(0);
        assert!(result.in_query_order());
        result.add_match(10, 3, 1);
        assert!(result.in_query_order());
        result.add_match(16, 3, 1);
        assert!(result.in_query_order());
        result.add_match(0, 2, 1);
        assert!(!result.in_query_order());
    }
}
