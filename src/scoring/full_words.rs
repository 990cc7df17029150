//! Full-word fuzzy scoring
//!
//! Query and candidate are both split into whitespace-delimited words. Every
//! query word has to find its own candidate word containing it as a substring;
//! the closer the match is to covering the whole candidate word, the higher
//! the score. Matches at the start of a word and queries whose words appear in
//! the candidate in the same order earn a bonus.

use super::result::{MatchSpan, ScoringResult};
use super::words::{Word, words};
use super::Scorer;

/// Score awarded to every candidate while the query is empty
pub const NEUTRAL_SCORE: u32 = 100;

const PREFIX_BONUS: f64 = 1.5;
const ORDER_BONUS: f64 = 1.2;

/// The candidate word chosen for one query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Lowercased text of the matched candidate word
    pub word: String,
    /// Character offset of the candidate word in the candidate string
    pub word_start: usize,
    /// Character offset of the match inside the lowercased candidate word
    pub offset_in_word: usize,
    /// Share of the candidate word covered by the query word, in percent
    pub percent: u32,
    /// Matched region in characters of the original candidate string
    pub span: MatchSpan,
}

impl WordMatch {
    /// Absolute character offset of the match in the candidate string
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Whether the match starts at the beginning of the candidate word
    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        self.offset_in_word == 0
    }
}

/// Find the best not-yet-consumed candidate word containing `query_word`
///
/// Shorter candidate words win; among words of equal length the one where
/// the match starts earliest wins, and the first such word on a full tie.
/// The winner is marked in `consumed` so later query words cannot reuse it.
///
/// `consumed` must have one slot per entry of `candidate_words`.
pub fn find_best_word_match(
    query_word: &str,
    candidate_words: &[Word],
    consumed: &mut [bool],
) -> Option<WordMatch> {
    let mut best: Option<(usize, usize)> = None;

    for (idx, word) in candidate_words.iter().enumerate() {
        if consumed[idx] {
            continue;
        }
        let Some(pos) = word.find(query_word) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((best_idx, best_pos)) => {
                let best_len = candidate_words[best_idx].len;
                word.len < best_len || (word.len == best_len && pos < best_pos)
            }
        };
        if better {
            best = Some((idx, pos));
        }
    }

    let (idx, offset_in_word) = best?;
    consumed[idx] = true;
    let word = &candidate_words[idx];
    let query_len = query_word.chars().count();
    #[allow(clippy::cast_possible_truncation)]
    let percent = (100 * query_len / word.len) as u32;
    let (start, len) = word.original_span(offset_in_word, query_len);

    Some(WordMatch {
        word: word.text.clone(),
        word_start: word.start,
        offset_in_word,
        percent,
        span: MatchSpan::new(word.start + start, len),
    })
}

/// Score `candidate` against `query` with the full-word strategy
///
/// An empty query gives every candidate [`NEUTRAL_SCORE`] so the input
/// order is kept. Otherwise all query words must match (AND semantics) or
/// the score is 0.
#[must_use]
pub fn scoring_full_words(query: &str, candidate: &str) -> ScoringResult {
    let mut result = ScoringResult::new();
    if query.is_empty() {
        result.score = NEUTRAL_SCORE;
        return result;
    }

    let query_words = words(query);
    let candidate_words = words(candidate);
    let mut consumed = vec![false; candidate_words.len()];

    for query_word in &query_words {
        let Some(found) = find_best_word_match(&query_word.text, &candidate_words, &mut consumed)
        else {
            return ScoringResult::new();
        };

        let score = if found.is_prefix() {
            f64::from(found.percent) * PREFIX_BONUS
        } else {
            f64::from(found.percent)
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        result.add_match(found.span.start, found.span.len, score as u32);
    }

    if result.matches.is_empty() {
        // whitespace-only query: nothing to match against
        result.score = NEUTRAL_SCORE;
        return result;
    }

    if result.in_query_order() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            result.score = (f64::from(result.score) * ORDER_BONUS) as u32;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    {
        result.score /= result.matches.len() as u32;
    }
    result
}

/// Scorer implementing [`scoring_full_words`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullWords;

impl Scorer for FullWords {
    fn score(&self, query: &str, candidate: &str) -> ScoringResult {
        scoring_full_words(query, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str =
        "The quick brown fox jumps over the lazy dog and lands elegantly on the meadow.";
    const HENRY: &str = "Henry is at home and watches a snowman melt slowly.";

    fn spans(result: &ScoringResult) -> Vec<(usize, usize)> {
        result.matches.iter().map(|m| (m.start, m.len)).collect()
    }

    fn best(word: &str, candidate: &[Word], consumed: &mut [bool]) -> Option<(String, usize, usize, u32)> {
        find_best_word_match(word, candidate, consumed)
            .map(|m| (m.word, m.word_start, m.offset_in_word, m.percent))
    }

    #[test]
    fn test_find_best_word_match() {
        let fox = words(FOX);
        let mut consumed = vec![false; fox.len()];

        assert_eq!(
            best("bro", &fox, &mut consumed),
            Some(("brown".to_string(), 10, 0, 60))
        );
        // "brown" is already taken by "bro"
        assert_eq!(best("own", &fox, &mut consumed), None);
        assert_eq!(
            best("fox", &fox, &mut consumed),
            Some(("fox".to_string(), 16, 0, 100))
        );
        assert_eq!(
            best("tly", &fox, &mut consumed),
            Some(("elegantly".to_string(), 54, 6, 33))
        );
        assert_eq!(best("cat", &fox, &mut consumed), None);
    }

    #[test]
    fn test_find_prefers_earlier_match_on_equal_length() {
        let henry = words(HENRY);
        let mut consumed = vec![false; henry.len()];
        // "melt" beats "home": same length, match closer to the word start
        assert_eq!(
            best("me", &henry, &mut consumed),
            Some(("melt".to_string(), 39, 0, 50))
        );
    }

    #[test]
    fn test_find_prefers_shorter_word() {
        let candidate = words("watches watch");
        let mut consumed = vec![false; candidate.len()];
        assert_eq!(
            best("tch", &candidate, &mut consumed),
            Some(("watch".to_string(), 8, 2, 60))
        );
    }

    #[test]
    fn test_single_word_gets_order_bonus() {
        // 50% of "melt" * 1.5 prefix bonus * 1.2 order bonus
        let result = scoring_full_words("me", HENRY);
        assert_eq!(result.score, 90);
        assert_eq!(spans(&result), vec![(39, 2)]);
    }

    #[test]
    fn test_out_of_order_words() {
        let result = scoring_full_words("tch is he", HENRY);
        assert_eq!(result.score, 84);
        assert_eq!(spans(&result), vec![(23, 3), (6, 2), (0, 2)]);
    }

    #[test]
    fn test_fox_reference_case() {
        let result = scoring_full_words("fox bro", FOX);
        assert_eq!(result.score, 120);
        assert_eq!(result.matches, vec![MatchSpan::new(16, 3), MatchSpan::new(10, 3)]);
    }

    #[test]
    fn test_in_order_bonus() {
        // (90 + 150) * 1.2 / 2
        let result = scoring_full_words("bro fox", FOX);
        assert_eq!(result.score, 144);
        assert_eq!(spans(&result), vec![(10, 3), (16, 3)]);
    }

    #[test]
    fn test_empty_query_is_neutral() {
        for candidate in [FOX, "foo", "bar baz", ""] {
            let result = scoring_full_words("", candidate);
            assert_eq!(result.score, 100);
            assert!(result.matches.is_empty());
        }
    }

    #[test]
    fn test_no_match() {
        let result = scoring_full_words("app", "BaNaNa");
        assert_eq!(result.score, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_all_words_must_match() {
        // "fox" matches but "cat" doesn't
        let result = scoring_full_words("fox cat", FOX);
        assert_eq!(result.score, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_words_are_not_reused() {
        assert_eq!(scoring_full_words("fox fox", FOX).score, 0);
        assert!(scoring_full_words("the the the", FOX).score > 0);
        assert_eq!(scoring_full_words("the the the the", FOX).score, 0);
    }

    #[test]
    fn test_case_insensitive_with_original_offsets() {
        let result = scoring_full_words("QUICK", FOX);
        assert_eq!(spans(&result), vec![(4, 5)]);
        // 100 * 1.5 * 1.2
        assert_eq!(result.score, 180);
    }

    #[test]
    fn test_empty_candidate() {
        assert_eq!(scoring_full_words("a", "").score, 0);
    }

    #[test]
    fn test_matches_within_bounds_and_disjoint() {
        let cases = [
            ("the the", FOX),
            ("o e a", FOX),
            ("lazy dog meadow", FOX),
            ("an", FOX),
            // "İ" lowercases to two characters
            ("i\u{307}i\u{307}", "\u{130}\u{130} x"),
            ("i\u{307} x", "a\u{130}b x"),
        ];
        for (query, candidate) in cases {
            let len = candidate.chars().count();
            let result = scoring_full_words(query, candidate);
            assert!(result.is_match(), "{query}");
            for (i, a) in result.matches.iter().enumerate() {
                assert!(a.end() <= len, "{query}: {a:?}");
                for b in &result.matches[i + 1..] {
                    assert!(a.end() <= b.start || b.end() <= a.start, "{query}");
                }
            }
        }
    }

    #[test]
    fn test_expanding_lowercase_keeps_original_offsets() {
        let result = scoring_full_words("i\u{307}i\u{307}", "\u{130}\u{130} x");
        assert_eq!(result.score, 180);
        assert_eq!(spans(&result), vec![(0, 2)]);

        let result = scoring_full_words("x b", "\u{130}\u{130} x a\u{130}b");
        assert_eq!(spans(&result), vec![(3, 1), (7, 1)]);
    }

    #[test]
    fn test_scorer_trait() {
        assert_eq!(FullWords.score("fox bro", FOX), scoring_full_words("fox bro", FOX));
    }
}
