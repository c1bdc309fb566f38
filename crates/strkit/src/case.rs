//! Case transforms.
//!
//! Each transform has an in-place form, which rewrites the caller's buffer and
//! returns it, and a `_copy` form, which leaves the input untouched and returns
//! a new [`Text`]. An absent input yields an absent output from both forms.

use crate::{
    Result, Text, TextMut, TextRef,
    ascii::{is_whitespace, to_lower_unit, to_upper_unit},
};

fn capitalize_units(units: &mut [u8]) {
    if let Some(first) = units.first_mut() {
        *first = to_upper_unit(*first);
    }
}

fn uppercase_units(units: &mut [u8]) {
    for unit in units {
        *unit = to_upper_unit(*unit);
    }
}

fn lowercase_units(units: &mut [u8]) {
    for unit in units {
        *unit = to_lower_unit(*unit);
    }
}

/// Upper-case the first unit of every word and lower-case the rest. A word
/// starts at the beginning of the buffer and after any whitespace unit.
fn title_case_units(units: &mut [u8]) {
    let mut at_word_start = true;
    for unit in units {
        if is_whitespace(*unit) {
            at_word_start = true;
        } else if at_word_start {
            *unit = to_upper_unit(*unit);
            at_word_start = false;
        } else {
            *unit = to_lower_unit(*unit);
        }
    }
}

fn in_place<'a>(text: impl TextMut<'a>, transform: fn(&mut [u8])) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    transform(units);
    Some(units)
}

fn copied<'a>(text: impl TextRef<'a>, transform: fn(&mut [u8])) -> Result<Option<Text>> {
    text.text_ref()
        .map(|units| Text::try_transformed(units, transform))
        .transpose()
}

/// Upper-case the first unit in place.
pub fn capitalize<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    in_place(text, capitalize_units)
}

/// Copy `text` with its first unit upper-cased.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn capitalize_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copied(text, capitalize_units)
}

/// Upper-case every unit in place.
pub fn uppercase<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    in_place(text, uppercase_units)
}

/// Copy `text` with every unit upper-cased.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn uppercase_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copied(text, uppercase_units)
}

/// Lower-case every unit in place.
pub fn lowercase<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    in_place(text, lowercase_units)
}

/// Copy `text` with every unit lower-cased.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn lowercase_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copied(text, lowercase_units)
}

/// Title-case in place.
///
/// Whitespace (see [`is_whitespace`](crate::is_whitespace)) passes through and
/// marks the next unit as a word start. A word's first unit is upper-cased and
/// every following unit of the same word is lower-cased, so `"QUICK"` becomes
/// `"Quick"` rather than staying as is.
///
/// ```rust
/// let mut buf = *b"the QUICK\tfox";
/// strkit::title_case(&mut buf);
/// assert_eq!(&buf, b"The Quick\tFox");
/// ```
pub fn title_case<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    in_place(text, title_case_units)
}

/// Copy `text` in title case; see [`title_case`].
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn title_case_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copied(text, title_case_units)
}
