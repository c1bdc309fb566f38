use crate::TextRef;

/// Position of the first `unit` in `text`.
pub fn index_of_unit<'a>(text: impl TextRef<'a>, unit: u8) -> Option<usize> {
    text.text_ref()?.iter().position(|&candidate| candidate == unit)
}

/// Position of the first occurrence of `pattern` in `text`.
///
/// Brute force: every start position is compared against the whole pattern,
/// so the worst case is `O(text.len() * pattern.len())`. An empty pattern
/// matches at 0, even in empty text. Absent text or pattern never matches.
pub fn index_of_sequence<'a, 'b>(
    text: impl TextRef<'a>,
    pattern: impl TextRef<'b>,
) -> Option<usize> {
    let text = text.text_ref()?;
    let pattern = pattern.text_ref()?;
    if pattern.is_empty() {
        return Some(0);
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// Whether `pattern` occurs in `text`.
pub fn contains<'a, 'b>(text: impl TextRef<'a>, pattern: impl TextRef<'b>) -> bool {
    index_of_sequence(text, pattern).is_some()
}
