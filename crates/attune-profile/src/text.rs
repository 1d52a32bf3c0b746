//! Word and sentence counting.
//!
//! Both are heuristics: words are whitespace-delimited tokens and sentences
//! are the non-blank fragments between `.`, `!` and `?`.

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Lowercase the first character, for splicing a phrase mid-sentence
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
