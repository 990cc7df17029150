//! Injected item capabilities: display projection, scorer, preselection

use crate::scoring::{FullWords, Scorer, ScoringResult};
use std::fmt;

type DisplayFn<'a, T> = Box<dyn Fn(&T) -> String + 'a>;
type PreselectFn<'a, T> = Box<dyn Fn(&T, &ScoringResult) -> bool + 'a>;

/// The capability set the engine uses to look at items
///
/// The engine never inspects items itself: `display` projects an item to the
/// single-line string that is scored and rendered, `scorer` ranks it against
/// the query and `preselect` decides which items start out selected in
/// multi-select mode. Each member can be replaced on its own.
pub struct Callbacks<'a, T> {
    display: DisplayFn<'a, T>,
    scorer: Box<dyn Scorer + 'a>,
    preselect: PreselectFn<'a, T>,
}

impl<'a, T> Callbacks<'a, T> {
    /// Create callbacks with the given display projection
    ///
    /// Scoring defaults to [`FullWords`] and nothing is preselected.
    #[must_use]
    pub fn new(display: impl Fn(&T) -> String + 'a) -> Self {
        Self {
            display: Box::new(display),
            scorer: Box::new(FullWords),
            preselect: Box::new(|_, _| false),
        }
    }

    /// Replace the display projection
    #[must_use]
    pub fn with_display(mut self, display: impl Fn(&T) -> String + 'a) -> Self {
        self.display = Box::new(display);
        self
    }

    /// Replace the scorer
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl Scorer + 'a) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replace the preselection predicate
    #[must_use]
    pub fn with_preselect(mut self, preselect: impl Fn(&T, &ScoringResult) -> bool + 'a) -> Self {
        self.preselect = Box::new(preselect);
        self
    }

    /// Project an item to its display string
    #[must_use]
    pub fn display(&self, item: &T) -> String {
        (self.display)(item)
    }

    /// Score a display string against the query
    #[must_use]
    pub fn score(&self, query: &str, candidate: &str) -> ScoringResult {
        self.scorer.score(query, candidate)
    }

    /// Ask whether an item should start out selected
    #[must_use]
    pub fn preselect(&self, item: &T, result: &ScoringResult) -> bool {
        (self.preselect)(item, result)
    }
}

impl<'a, T: fmt::Display + 'a> Default for Callbacks<'a, T> {
    fn default() -> Self {
        Self::new(T::to_string)
    }
}

impl<T> fmt::Debug for Callbacks<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let callbacks: Callbacks<'_, i32> = Callbacks::default();
        assert_eq!(callbacks.display(&42), "42");
        assert_eq!(callbacks.score("", "42").score, 100);
        assert!(!callbacks.preselect(&42, &ScoringResult::with_score(100)));
    }

    #[test]
    fn test_replace_members() {
        let callbacks = Callbacks::new(|n: &i32| format!("item {n}"))
            .with_scorer(|_: &str, _: &str| ScoringResult::with_score(7))
            .with_preselect(|n: &i32, _: &ScoringResult| n % 2 == 0);

        assert_eq!(callbacks.display(&3), "item 3");
        assert_eq!(callbacks.score("anything", "item 3").score, 7);
        assert!(callbacks.preselect(&4, &ScoringResult::new()));
        assert!(!callbacks.preselect(&5, &ScoringResult::new()));
    }
}
