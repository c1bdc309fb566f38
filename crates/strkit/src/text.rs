//! The owned text buffer handed out by every copy constructor.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Deref};

use bstr::BStr;

use crate::{Result, error::try_reserve};

/// An owned, length-bearing sequence of 8-bit code units.
///
/// Constructors in this crate reserve exactly the number of units they write,
/// so a freshly built `Text` carries no slack capacity. The buffer is
/// released when the value is dropped.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    pub(crate) bytes: Vec<u8>,
}

impl Text {
    /// An empty buffer. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Copy `units` into a new, exactly sized buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Alloc`](crate::TextError::Alloc) if the buffer
    /// cannot be reserved.
    pub fn try_from_bytes(units: &[u8]) -> Result<Self> {
        let mut text = Self::try_with_capacity(units.len())?;
        text.bytes.extend_from_slice(units);
        Ok(text)
    }

    pub(crate) fn try_with_capacity(len: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        try_reserve(&mut bytes, len)?;
        Ok(Self { bytes })
    }

    /// Fill a buffer of exactly `len` units from `units`.
    pub(crate) fn try_from_exact(len: usize, units: impl Iterator<Item = u8>) -> Result<Self> {
        let mut text = Self::try_with_capacity(len)?;
        text.bytes.extend(units.take(len));
        debug_assert_eq!(text.bytes.len(), len);
        Ok(text)
    }

    /// Copy `units`, then let `transform` rewrite the copy in place.
    pub(crate) fn try_transformed(units: &[u8], transform: impl FnOnce(&mut [u8])) -> Result<Self> {
        let mut text = Self::try_from_bytes(units)?;
        transform(&mut text.bytes);
        Ok(text)
    }

    /// Number of code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The code units as a slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The code units as a mutable slice. The length cannot change through
    /// this view.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The code units as a [`BStr`], for display and byte-string helpers.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(&self.bytes)
    }

    /// Give up ownership of the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for Text {
    type Target = BStr;

    fn deref(&self) -> &BStr {
        self.as_bstr()
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

/// Aborts if the copy cannot be allocated, like `<[u8]>::to_vec`; use
/// [`Text::try_from_bytes`] to handle that case.
impl From<&[u8]> for Text {
    fn from(units: &[u8]) -> Self {
        Self {
            bytes: units.to_vec(),
        }
    }
}

/// Adopts the vector's allocation as is.
impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<Text> for Vec<u8> {
    fn from(text: Text) -> Self {
        text.bytes
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

// `Text` compares by content against the usual byte and string types so tests
// and callers can write `assert_eq!(text, "abc")`.
macro_rules! impl_partial_eq_for_text {
    ($($t:ty),+ $(,)?) => {
        $(
            impl PartialEq<$t> for Text {
                fn eq(&self, other: &$t) -> bool {
                    self.bytes.as_slice() == AsRef::<[u8]>::as_ref(other)
                }
            }

            impl PartialEq<Text> for $t {
                fn eq(&self, other: &Text) -> bool {
                    other == self
                }
            }
        )+
    };
}

impl_partial_eq_for_text!(str, &str, [u8], &[u8], String, Vec<u8>);

impl<const N: usize> PartialEq<[u8; N]> for Text {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Text {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.bytes.as_slice() == other.as_slice()
    }
}

// Text is written as a string when it is valid UTF-8 and as raw bytes
// otherwise; both shapes (plus integer sequences) are accepted back.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::{string::String, vec::Vec};
    use core::fmt;

    use bstr::ByteSlice;
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error as _, SeqAccess, Visitor},
    };

    use super::Text;
    use crate::error::try_reserve;

    impl Serialize for Text {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self.bytes.to_str() {
                Ok(s) => serializer.serialize_str(s),
                Err(_) => serializer.serialize_bytes(&self.bytes),
            }
        }
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Text;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a sequence of bytes")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Text::try_from_bytes(value.as_bytes()).map_err(E::custom)
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Text::from(value))
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Text::try_from_bytes(value).map_err(E::custom)
        }

        fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Text::from(value))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut bytes = Vec::new();
            try_reserve(&mut bytes, seq.size_hint().unwrap_or(0).min(4096))
                .map_err(A::Error::custom)?;
            while let Some(unit) = seq.next_element::<u8>()? {
                if bytes.len() == bytes.capacity() {
                    let additional = bytes.len().max(8);
                    try_reserve(&mut bytes, additional).map_err(A::Error::custom)?;
                }
                bytes.push(unit);
            }
            Ok(Text::from(bytes))
        }
    }

    impl<'de> Deserialize<'de> for Text {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_byte_buf(TextVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString, vec};

    use super::*;

    #[test]
    fn constructors_reserve_exactly() {
        let text = Text::try_from_bytes(b"hello").unwrap();
        assert_eq!(text, "hello");
        assert_eq!(text.into_vec().capacity(), 5);

        let empty = Text::try_from_bytes(b"").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.into_vec().capacity(), 0);
    }

    #[test]
    fn exact_fill_stops_at_len() {
        let text = Text::try_from_exact(3, b"abcdef".iter().copied()).unwrap();
        assert_eq!(text, b"abc");
    }

    #[test]
    fn transformed_copy_leaves_source_alone() {
        let source = *b"abc";
        let text = Text::try_transformed(&source, <[u8]>::reverse).unwrap();
        assert_eq!(text, "cba");
        assert_eq!(&source, b"abc");
    }

    #[test]
    fn debug_and_display_escape_like_bstr() {
        let text = Text::from(vec![b'a', b'\n', 0xFF]);
        assert_eq!(format!("{text:?}"), r#""a\n\xff""#);
        assert_eq!(text.to_string(), "a\n\u{FFFD}");
    }

    #[test]
    fn compares_against_common_byte_types() {
        let text = Text::from("abc");
        assert_eq!(text, "abc");
        assert_eq!("abc", text);
        assert_eq!(text, b"abc");
        assert_eq!(text, &b"abc"[..]);
        assert_eq!(text, vec![b'a', b'b', b'c']);
        assert_ne!(text, "abcd");
    }
}
