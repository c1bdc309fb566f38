//! Splitting into owned tokens, and joining them back.

use alloc::vec::{self, Vec};
use core::{fmt, ops::Deref, slice};

use crate::{Result, Text, TextError, TextRef, error::try_reserve};

/// Options for [`split_with`].
///
/// # Default
///
/// Empty tokens are kept and the number of tokens is unlimited, which is the
/// behavior of [`split`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Drop zero-length tokens, such as those produced by adjacent, leading
    /// or trailing delimiters.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_empty: bool,

    /// Stop splitting after this many tokens; the last token keeps the rest of
    /// the input, delimiters included. A limit of zero produces no tokens.
    ///
    /// The limit counts raw tokens, before `skip_empty` is applied.
    ///
    /// # Default
    ///
    /// `None` (no limit)
    pub limit: Option<usize>,
}

/// An owned, ordered list of tokens produced by [`split`].
///
/// Dropping the list releases every token and then the list itself.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Text>,
}

impl TokenList {
    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Text> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> slice::Iter<'_, Text> {
        self.tokens.iter()
    }

    /// The tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Text] {
        &self.tokens
    }

    /// Join the tokens with `separator`; see [`join`].
    ///
    /// # Errors
    ///
    /// Fails only if the result cannot be allocated.
    pub fn join(&self, separator: u8) -> Result<Text> {
        join(self.as_slice(), separator)
    }

    /// Give up ownership of the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Text> {
        self.tokens
    }
}

impl Deref for TokenList {
    type Target = [Text];

    fn deref(&self) -> &[Text] {
        &self.tokens
    }
}

impl IntoIterator for TokenList {
    type Item = Text;
    type IntoIter = vec::IntoIter<Text>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Text;
    type IntoIter = slice::Iter<'a, Text>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Text>> for TokenList {
    fn from(tokens: Vec<Text>) -> Self {
        Self { tokens }
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<T: AsRef<[u8]>> PartialEq<[T]> for TokenList {
    fn eq(&self, other: &[T]) -> bool {
        self.tokens.len() == other.len()
            && self
                .tokens
                .iter()
                .zip(other)
                .all(|(token, other)| token.as_bytes() == other.as_ref())
    }
}

impl<T: AsRef<[u8]>, const N: usize> PartialEq<[T; N]> for TokenList {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: AsRef<[u8]>> PartialEq<Vec<T>> for TokenList {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::vec::Vec;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::TokenList;
    use crate::Text;

    impl Serialize for TokenList {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(&self.tokens)
        }
    }

    impl<'de> Deserialize<'de> for TokenList {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<Text>::deserialize(deserializer).map(|tokens| TokenList { tokens })
        }
    }
}

fn raw_tokens(text: &[u8], delimiter: u8, options: SplitOptions) -> impl Iterator<Item = &[u8]> {
    text.splitn(options.limit.unwrap_or(usize::MAX), move |&unit| unit == delimiter)
        .filter(move |token| !(options.skip_empty && token.is_empty()))
}

/// Split `text` at every `delimiter` into owned tokens.
///
/// A buffer with `n` delimiters always yields `n + 1` tokens: no delimiter
/// gives one token equal to the input (even when the input is empty), and
/// leading, trailing or adjacent delimiters give empty tokens.
///
/// ```rust
/// let tokens = strkit::split(",a,,b", b',').unwrap().unwrap();
/// assert_eq!(tokens, ["", "a", "", "b"]);
/// ```
///
/// # Errors
///
/// Fails if the list or any token cannot be allocated. Tokens built before the
/// failure are released with the list; no partial result escapes.
pub fn split<'a>(text: impl TextRef<'a>, delimiter: u8) -> Result<Option<TokenList>> {
    split_with(text, delimiter, SplitOptions::default())
}

/// [`split`] with explicit [`SplitOptions`].
///
/// # Errors
///
/// As for [`split`].
pub fn split_with<'a>(
    text: impl TextRef<'a>,
    delimiter: u8,
    options: SplitOptions,
) -> Result<Option<TokenList>> {
    let Some(units) = text.text_ref() else {
        return Ok(None);
    };

    // Size the list before building any token.
    let count = raw_tokens(units, delimiter, options).count();
    let mut tokens = Vec::new();
    try_reserve(&mut tokens, count)?;

    for token in raw_tokens(units, delimiter, options) {
        // On failure `tokens` drops here, releasing what was built so far.
        tokens.push(Text::try_from_bytes(token)?);
    }
    debug_assert_eq!(tokens.len(), count);

    tracing::trace!(tokens = count, delimiter, "split text");
    Ok(Some(TokenList { tokens }))
}

/// Join `tokens` with `separator` between each pair. No tokens gives an empty
/// buffer.
///
/// ```rust
/// let joined = strkit::join(&["a", "b", "c"], b'/').unwrap();
/// assert_eq!(joined, "a/b/c");
/// ```
///
/// # Errors
///
/// [`TextError::CapacityOverflow`] when the joined length is more than any
/// buffer can hold; [`TextError::Alloc`] when it cannot be allocated.
pub fn join<T: AsRef<[u8]>>(tokens: &[T], separator: u8) -> Result<Text> {
    let Some(separators) = tokens.len().checked_sub(1) else {
        return Ok(Text::new());
    };
    let len = tokens
        .iter()
        .try_fold(separators, |len, token| len.checked_add(token.as_ref().len()))
        .ok_or(TextError::CapacityOverflow)?;

    let mut out = Text::try_with_capacity(len)?;
    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            out.bytes.push(separator);
        }
        out.bytes.extend_from_slice(token.as_ref());
    }

    tracing::trace!(tokens = tokens.len(), len, "joined tokens");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rstest::rstest;

    use super::*;
    use crate::ABSENT;

    #[rstest]
    #[case("Hello, World!", b',', &["Hello", " World!"])]
    #[case("a,b,c", b',', &["a", "b", "c"])]
    #[case("abc", b',', &["abc"])]
    #[case("", b',', &[""])]
    #[case(",", b',', &["", ""])]
    #[case(",a,", b',', &["", "a", ""])]
    #[case("a,,b", b',', &["a", "", "b"])]
    #[case("a b\tc", b' ', &["a", "b\tc"])]
    fn splits(#[case] text: &str, #[case] delimiter: u8, #[case] expected: &[&str]) {
        let tokens = split(text, delimiter).unwrap().unwrap();
        assert_eq!(tokens, *expected);
        assert_eq!(tokens.len(), text.bytes().filter(|&u| u == delimiter).count() + 1);
        assert_eq!(tokens.join(delimiter).unwrap(), text);
    }

    #[test]
    fn tokens_are_exactly_sized() {
        let tokens = split("alpha,be", b',').unwrap().unwrap();
        let capacities: Vec<usize> = tokens.into_iter().map(|t| t.into_vec().capacity()).collect();
        assert_eq!(capacities, [5, 2]);
    }

    #[rstest]
    #[case(SplitOptions { skip_empty: true, limit: None }, &["a", "b"])]
    #[case(SplitOptions { skip_empty: false, limit: Some(2) }, &["", "a,,b,"])]
    #[case(SplitOptions { skip_empty: true, limit: Some(3) }, &["a", ",b,"])]
    #[case(SplitOptions { skip_empty: false, limit: Some(0) }, &[])]
    #[case(SplitOptions { skip_empty: false, limit: Some(1) }, &[",a,,b,"])]
    fn split_options(#[case] options: SplitOptions, #[case] expected: &[&str]) {
        let tokens = split_with(",a,,b,", b',', options).unwrap().unwrap();
        assert_eq!(tokens, *expected);
    }

    #[rstest]
    #[case(&[], b',', "")]
    #[case(&["solo"], b',', "solo")]
    #[case(&["", ""], b',', ",")]
    #[case(&["a", "b", "c"], b'-', "a-b-c")]
    fn joins(#[case] tokens: &[&str], #[case] separator: u8, #[case] expected: &str) {
        let joined = join(tokens, separator).unwrap();
        assert_eq!(joined, expected);
        assert_eq!(joined.into_vec().capacity(), expected.len());
    }

    #[test]
    fn absent_input_splits_to_nothing() {
        assert_eq!(split(ABSENT, b','), Ok(None));
        // Releasing "no list" is a no-op.
        drop(split(ABSENT, b',').unwrap());
    }

    #[test]
    fn list_accessors() {
        let tokens = split("x:y", b':').unwrap().unwrap();
        assert!(!tokens.is_empty());
        assert_eq!(tokens.get(1).map(Text::as_bytes), Some(&b"y"[..]));
        assert_eq!(tokens.get(2), None);
        assert_eq!(tokens[0], "x");
        assert_eq!((&tokens).into_iter().count(), 2);
        assert_eq!(tokens, vec!["x", "y"]);
        assert_eq!(TokenList::from(tokens.clone().into_vec()), tokens);
    }
}
