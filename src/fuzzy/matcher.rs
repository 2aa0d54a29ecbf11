// File: src/fuzzy/matcher.rs
use crate::core::index::SymptomIndex;
use crate::core::normalizer::{normalize, tokenize};
use crate::fuzzy::similarity::similarity;

pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Maps free text onto known symptoms by per-token fuzzy lookup.
#[derive(Debug, Clone, Copy)]
pub struct SymptomMatcher {
    threshold: f64,
}

impl Default for SymptomMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl SymptomMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the known symptoms mentioned in `input`, in first-seen order and
    /// without duplicates.
    ///
    /// The whole normalized phrase is tried first as an exact vocabulary entry,
    /// which is how multi-word symptoms such as "chest pain" are picked up. Then
    /// every token contributes its best vocabulary match at or above the
    /// threshold; tokens with no such match are dropped.
    /// Complexity: O(t * v * k^2) for t tokens, v vocabulary entries of length k.
    pub fn find_matches(&self, input: &str, index: &SymptomIndex) -> Vec<String> {
        let mut matched: Vec<String> = Vec::new();

        if input.trim().is_empty() || index.is_empty() {
            return matched;
        }

        let normalized = normalize(input);
        if index.contains_symptom(&normalized) {
            matched.push(normalized.clone());
        }

        for token in tokenize(&normalized) {
            if let Some(best) = self.best_match(token, index) {
                tracing::debug!(token, symptom = best, "fuzzy match");
                if !matched.iter().any(|m| m == best) {
                    matched.push(best.to_string());
                }
            }
        }

        matched
    }

    /// Best vocabulary entry for one token. Ties keep the entry that comes first
    /// in sorted vocabulary order.
    pub fn best_match<'a>(&self, token: &str, index: &'a SymptomIndex) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;

        for symptom in index.vocabulary() {
            let score = similarity(token, symptom);
            if score < self.threshold {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((symptom.as_str(), score)),
            }
        }

        best.map(|(symptom, _)| symptom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SymptomRecord;
    use proptest::prelude::*;

    fn index() -> SymptomIndex {
        SymptomIndex::build(&[
            SymptomRecord::new("Migraine", ["headache", "blurred vision", "nausea"]),
            SymptomRecord::new("Heart attack", ["chest pain", "sweating", "vomiting"]),
            SymptomRecord::new("Common Cold", ["fever", "cough"]),
        ])
    }

    #[test]
    fn matches_tokens_in_input_order() {
        let matched = SymptomMatcher::default().find_matches("I have a bad HEADACHE and nausea!!", &index());
        assert_eq!(matched, vec!["headache", "nausea"]);
    }

    #[test]
    fn tolerates_a_typo() {
        let matched = SymptomMatcher::default().find_matches("feverr", &index());
        assert_eq!(matched, vec!["fever"]);
    }

    #[test]
    fn whole_phrase_is_emitted_first() {
        let matched = SymptomMatcher::default().find_matches("Chest pain", &index());
        assert_eq!(matched.first().map(String::as_str), Some("chest pain"));
    }

    #[test]
    fn duplicates_are_suppressed() {
        let matched = SymptomMatcher::default().find_matches("cough cough coughh", &index());
        assert_eq!(matched, vec!["cough"]);
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let matched = SymptomMatcher::default().find_matches("zzz qqq", &index());
        assert!(matched.is_empty());
    }

    #[test]
    fn blank_input_or_empty_index_yields_nothing() {
        let matcher = SymptomMatcher::default();
        assert!(matcher.find_matches("   ", &index()).is_empty());
        assert!(matcher.find_matches("fever", &SymptomIndex::new()).is_empty());
    }

    #[test]
    fn ties_keep_first_vocabulary_entry() {
        let index = SymptomIndex::build(&[SymptomRecord::new("X", ["abcd", "abce"])]);
        // "abcf" is one substitution away from both entries.
        assert_eq!(SymptomMatcher::new(0.5).best_match("abcf", &index), Some("abcd"));
    }

    #[test]
    fn score_equal_to_threshold_is_kept() {
        let index = SymptomIndex::build(&[SymptomRecord::new("X", ["abcd"])]);
        // One substitution in four chars scores exactly 0.75.
        assert_eq!(SymptomMatcher::new(0.75).best_match("abcf", &index), Some("abcd"));
        assert_eq!(SymptomMatcher::new(0.75).find_matches("abcf", &index), vec!["abcd"]);
    }

    #[test]
    fn score_just_below_threshold_is_dropped() {
        let index = SymptomIndex::build(&[SymptomRecord::new("X", ["abcd"])]);
        assert_eq!(SymptomMatcher::new(0.76).best_match("abcf", &index), None);
        assert!(SymptomMatcher::new(0.76).find_matches("abcf", &index).is_empty());
    }

    #[test]
    fn results_are_always_vocabulary_entries() {
        let index = index();
        let matched = SymptomMatcher::new(0.3).find_matches("head ache sweat vomit chest", &index);
        assert!(!matched.is_empty());
        for symptom in &matched {
            assert!(index.contains_symptom(symptom));
        }
    }

    proptest! {
        #[test]
        fn matches_are_unique_vocabulary_entries(input in "[a-z ,.!]{0,48}", threshold in 0.0f64..=1.0) {
            let index = index();
            let matched = SymptomMatcher::new(threshold).find_matches(&input, &index);
            for (i, symptom) in matched.iter().enumerate() {
                prop_assert!(index.contains_symptom(symptom));
                prop_assert!(!matched[i + 1..].contains(symptom));
            }
        }
    }
}
