//! Query/candidate scoring
//!
//! A scorer maps a `(query, candidate)` pair to a [`ScoringResult`]: a
//! non-negative score (0 excludes the candidate) plus the character spans to
//! highlight. Scorers are pluggable through the [`Scorer`] trait; any
//! `Fn(&str, &str) -> ScoringResult` qualifies, so plain functions and
//! closures can be handed to the finder directly.
//!
//! # Example
//!
//! ```
//! use fzpick::scoring::{scoring_full_words, MatchSpan};
//!
//! let result = scoring_full_words(
//!     "fox bro",
//!     "The quick brown fox jumps over the lazy dog and lands elegantly on the meadow.",
//! );
//! assert_eq!(result.score, 120);
//! assert_eq!(result.matches, vec![MatchSpan::new(16, 3), MatchSpan::new(10, 3)]);
//! ```

mod full_words;
mod result;
mod words;

pub use full_words::{FullWords, NEUTRAL_SCORE, WordMatch, find_best_word_match, scoring_full_words};
pub use result::{MatchSpan, ScoringResult};
pub use words::{Word, words};

/// Strategy for scoring a candidate string against a query
pub trait Scorer {
    /// Score `candidate` against `query`
    fn score(&self, query: &str, candidate: &str) -> ScoringResult;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> ScoringResult,
{
    fn score(&self, query: &str, candidate: &str) -> ScoringResult {
        self(query, candidate)
    }
}
