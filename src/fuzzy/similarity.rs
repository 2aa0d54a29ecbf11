// File: src/fuzzy/similarity.rs

/// Levenshtein distance with unit costs, computed over `char`s with two rolling rows.
/// Complexity: O(n*m) time, O(m) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &a_ch) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b_ch) in b.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Case-insensitive similarity ratio in [0, 1]:
/// `1 - distance / max(len(a), len(b))`, with identical strings (including two
/// empty ones) scoring exactly 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein(&a, &b);
    1.0 - distance as f64 / max_len as f64
}
