// File: src/transcript.rs
use crate::core::normalizer::normalize;

/// Text accumulated from successive speech results.
///
/// Final results are cleaned and appended; partial results are only shown
/// after the accumulated text and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a final recognition result. Returns `false` when nothing was
    /// added because the input was blank or cleaned down to nothing.
    pub fn append(&mut self, raw: &str) -> bool {
        if raw.trim().is_empty() {
            return false;
        }
        let cleaned = normalize(raw);
        if cleaned.is_empty() {
            return false;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&cleaned);
        true
    }

    /// What the display should show while a partial result is pending.
    pub fn display_with_partial(&self, partial: &str) -> String {
        if self.text.is_empty() {
            return partial.to_string();
        }
        if partial.is_empty() {
            return self.text.clone();
        }
        format!("{} {}", self.text, partial)
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
