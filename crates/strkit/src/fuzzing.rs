//! Cross-operation invariants, shared by the property tests and the fuzz
//! target.

use crate::{
    contains, index_of_sequence, index_of_unit, is_palindrome, join, length, lowercase_copy,
    reverse, reverse_copy, split, title_case_copy, trim_both, trim_both_copy, uppercase_copy,
};

/// Panic if any invariant relating the operations to one another fails for
/// the given input.
///
/// # Panics
///
/// On the first violated invariant, or if an allocation fails.
pub fn check_invariants(text: &[u8], pattern: &[u8], delimiter: u8) {
    let reversed = reverse_copy(text).unwrap().unwrap();
    assert_eq!(reversed.len(), text.len());
    assert_eq!(reverse_copy(&reversed).unwrap().unwrap(), text);

    let mut in_place = reversed.clone().into_vec();
    reverse(&mut in_place);
    assert_eq!(in_place, text);

    if !text.is_empty() {
        assert_eq!(is_palindrome(text), is_palindrome(&reversed));
    }

    let trimmed = trim_both_copy(text).unwrap().unwrap();
    assert!(!trimmed.first().copied().is_some_and(crate::is_whitespace));
    assert!(!trimmed.last().copied().is_some_and(crate::is_whitespace));
    assert_eq!(trim_both_copy(&trimmed).unwrap().unwrap(), trimmed);

    let mut buf = text.to_vec();
    let view = trim_both(&mut buf).unwrap();
    assert_eq!(&*view, trimmed.as_bytes());

    assert_eq!(
        contains(text, pattern),
        index_of_sequence(text, pattern).is_some()
    );
    if let Some(at) = index_of_sequence(text, pattern) {
        assert_eq!(&text[at..at + pattern.len()], pattern);
        if !pattern.is_empty() {
            // Leftmost match.
            assert!(text.windows(pattern.len()).take(at).all(|w| w != pattern));
        }
    }

    let tokens = split(text, delimiter).unwrap().unwrap();
    let delimiters = text.iter().filter(|&&unit| unit == delimiter).count();
    assert_eq!(tokens.len(), delimiters + 1);
    assert_eq!(join(tokens.as_slice(), delimiter).unwrap(), text);
    let first_delimiter = (tokens.len() > 1).then(|| tokens[0].len());
    assert_eq!(index_of_unit(text, delimiter), first_delimiter);

    let upper = uppercase_copy(text).unwrap().unwrap();
    let lower = lowercase_copy(text).unwrap().unwrap();
    let title = title_case_copy(text).unwrap().unwrap();
    assert_eq!(length(&upper), text.len());
    assert_eq!(length(&lower), text.len());
    assert_eq!(length(&title), text.len());
    assert_eq!(uppercase_copy(&lower).unwrap().unwrap(), upper);
    assert_eq!(title_case_copy(&upper).unwrap().unwrap(), title);
}
