//! Field validators. Every function returns `Option<normalized>`: `None`
//! means the value is rejected and the caller keeps its previous state.

pub mod isbn;
pub mod url;

/// Trim whitespace and hard-truncate to `max_chars` characters. Rejects
/// values that are empty after trimming. Truncation counts characters, not
/// bytes, so multi-byte text is never split mid-character.
pub fn clean_text(value: &str, max_chars: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}

/// Positive-integer fields (width, height, duration) reject zero.
pub fn positive(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}
