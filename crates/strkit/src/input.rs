//! Conversions from caller buffers into the borrowed views the operations
//! work on.
//!
//! Absence is modeled with `Option`: `None` (or [`ABSENT`]) is "no buffer",
//! while `Some(b"")` is an empty buffer. The two are never conflated.

use alloc::{string::String, vec::Vec};

use bstr::BStr;

use crate::Text;

/// An absent read-only input, for call sites that need a typed `None`.
pub const ABSENT: Option<&'static [u8]> = None;

/// A possibly absent, read-only text buffer.
pub trait TextRef<'a> {
    /// Borrow the code units, or `None` when no buffer was supplied.
    fn text_ref(self) -> Option<&'a [u8]>;
}

/// A possibly absent, caller-owned buffer that may be rewritten in place.
///
/// In-place operations never grow the buffer; they return a view over the
/// same storage whose length is at most the original length.
pub trait TextMut<'a> {
    /// Borrow the code units mutably, or `None` when no buffer was supplied.
    fn text_mut(self) -> Option<&'a mut [u8]>;
}

macro_rules! impl_text_ref {
    ($($t:ty => |$v:ident| $body:expr),+ $(,)?) => {
        $(
            impl<'a> TextRef<'a> for &'a $t {
                fn text_ref(self) -> Option<&'a [u8]> {
                    let $v = self;
                    Some($body)
                }
            }
        )+
    };
}

impl_text_ref!(
    [u8] => |units| units,
    str => |s| s.as_bytes(),
    String => |s| s.as_bytes(),
    BStr => |b| &**b,
    Vec<u8> => |units| units.as_slice(),
    Text => |text| text.as_bytes(),
);

impl<'a, const N: usize> TextRef<'a> for &'a [u8; N] {
    fn text_ref(self) -> Option<&'a [u8]> {
        Some(self.as_slice())
    }
}

impl<'a, T: TextRef<'a>> TextRef<'a> for Option<T> {
    fn text_ref(self) -> Option<&'a [u8]> {
        self.and_then(TextRef::text_ref)
    }
}

impl<'a> TextMut<'a> for &'a mut [u8] {
    fn text_mut(self) -> Option<&'a mut [u8]> {
        Some(self)
    }
}

impl<'a, const N: usize> TextMut<'a> for &'a mut [u8; N] {
    fn text_mut(self) -> Option<&'a mut [u8]> {
        Some(self.as_mut_slice())
    }
}

impl<'a> TextMut<'a> for &'a mut Vec<u8> {
    fn text_mut(self) -> Option<&'a mut [u8]> {
        Some(self.as_mut_slice())
    }
}

impl<'a> TextMut<'a> for &'a mut Text {
    fn text_mut(self) -> Option<&'a mut [u8]> {
        Some(self.as_mut_bytes())
    }
}

impl<'a, T: TextMut<'a>> TextMut<'a> for Option<T> {
    fn text_mut(self) -> Option<&'a mut [u8]> {
        self.and_then(TextMut::text_mut)
    }
}
