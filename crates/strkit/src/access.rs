use crate::TextRef;

/// The unit returned by [`first`] and [`last`] when there is nothing to
/// return.
pub const EMPTY_UNIT: u8 = 0;

/// Number of code units in `text`; an absent buffer has length zero.
pub fn length<'a>(text: impl TextRef<'a>) -> usize {
    text.text_ref().map_or(0, <[u8]>::len)
}

/// The unit at `index`, or `None` when the buffer is absent or the index is
/// negative or past the end.
pub fn char_at<'a>(text: impl TextRef<'a>, index: isize) -> Option<u8> {
    let text = text.text_ref()?;
    let index = usize::try_from(index).ok()?;
    text.get(index).copied()
}

/// First unit, or [`EMPTY_UNIT`] for an absent or empty buffer.
pub fn first<'a>(text: impl TextRef<'a>) -> u8 {
    char_at(text, 0).unwrap_or(EMPTY_UNIT)
}

/// Last unit, or [`EMPTY_UNIT`] for an absent or empty buffer.
pub fn last<'a>(text: impl TextRef<'a>) -> u8 {
    text.text_ref()
        .and_then(|units| units.last().copied())
        .unwrap_or(EMPTY_UNIT)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::ABSENT;

    #[rstest]
    #[case("Hello, World!", 13)]
    #[case("", 0)]
    #[case(" ", 1)]
    fn lengths(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(length(text), expected);
    }

    #[test]
    fn absent_has_no_length() {
        assert_eq!(length(ABSENT), 0);
    }

    #[rstest]
    #[case(0, Some(b'a'))]
    #[case(2, Some(b'c'))]
    #[case(3, None)]
    #[case(-1, None)]
    #[case(isize::MIN, None)]
    #[case(isize::MAX, None)]
    fn indexing(#[case] index: isize, #[case] expected: Option<u8>) {
        assert_eq!(char_at("abc", index), expected);
    }

    #[test]
    fn char_at_absent() {
        assert_eq!(char_at(ABSENT, 0), None);
    }

    #[test]
    fn first_and_last() {
        assert_eq!(first("xyz"), b'x');
        assert_eq!(last("xyz"), b'z');
        assert_eq!(first("q"), last("q"));
        assert_eq!(first(""), EMPTY_UNIT);
        assert_eq!(last(""), EMPTY_UNIT);
        assert_eq!(first(ABSENT), EMPTY_UNIT);
        assert_eq!(last(ABSENT), EMPTY_UNIT);
    }
}
