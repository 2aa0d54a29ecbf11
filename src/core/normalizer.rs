// src/core/normalizer.rs

/// Whitespace as the capture layer sees it: space, tab, LF, VT, FF, CR.
fn is_break(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Cleans free text (typically a speech transcript) for display and matching.
///
/// Lowercases, drops every character that is not an ASCII letter, digit or
/// whitespace, collapses whitespace runs to one space and trims. Blank input
/// gives an empty string. Accumulated transcripts and fresh input both go
/// through here so they tokenize the same way.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_break(c))
        .collect();

    kept.split(is_break)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a dataset symptom name: trim + lowercase only.
/// Punctuation such as `_` in `skin_rash` is kept.
pub fn normalize_symptom(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// Splits already-normalized text into match tokens.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(is_break).filter(|token| !token.is_empty())
}
