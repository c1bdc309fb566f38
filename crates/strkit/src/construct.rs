//! Builders: reversal, repetition, concatenation, substrings and unit
//! replacement.
//!
//! Out-of-range arguments never fail. Negative counts, starts and lengths
//! clamp to the nearest meaningful value; the only error is running out of
//! memory.

use crate::{Result, Text, TextError, TextMut, TextRef};

/// Reverse the units of `text` in place.
pub fn reverse<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    units.reverse();
    Some(units)
}

/// Copy `text` back to front.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn reverse_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    text.text_ref()
        .map(|units| Text::try_from_exact(units.len(), units.iter().rev().copied()))
        .transpose()
}

/// `text` repeated `times` times.
///
/// A non-positive `times` or an empty `text` gives an empty buffer. The result
/// length is computed up front and filled into a single allocation.
///
/// # Errors
///
/// [`TextError::CapacityOverflow`] when the result is longer than any buffer
/// can be; [`TextError::Alloc`] when it cannot be allocated.
pub fn repeat_copy<'a>(text: impl TextRef<'a>, times: isize) -> Result<Option<Text>> {
    let Some(units) = text.text_ref() else {
        return Ok(None);
    };
    let times = usize::try_from(times).unwrap_or(0);
    if times == 0 || units.is_empty() {
        return Ok(Some(Text::new()));
    }

    let len = units
        .len()
        .checked_mul(times)
        .ok_or(TextError::CapacityOverflow)?;
    let mut out = Text::try_with_capacity(len)?;
    for _ in 0..times {
        out.bytes.extend_from_slice(units);
    }
    Ok(Some(out))
}

/// `a` followed by `b`. Absent operands count as empty, so the result is
/// always present.
///
/// # Errors
///
/// Fails only if the result cannot be allocated.
pub fn concat_copy<'a, 'b>(a: impl TextRef<'a>, b: impl TextRef<'b>) -> Result<Text> {
    let a = a.text_ref().unwrap_or_default();
    let b = b.text_ref().unwrap_or_default();

    let len = a.len().checked_add(b.len()).ok_or(TextError::CapacityOverflow)?;
    let mut out = Text::try_with_capacity(len)?;
    out.bytes.extend_from_slice(a);
    out.bytes.extend_from_slice(b);
    Ok(out)
}

/// Copy up to `length` units starting at `start`.
///
/// - A negative `start` is treated as 0.
/// - A `start` at or past the end gives an empty buffer.
/// - A negative `length`, or one running past the end, takes the remainder.
///
/// ```rust
/// use strkit::substring_copy;
///
/// assert_eq!(substring_copy("abcdef", -3, 4).unwrap().unwrap(), "abcd");
/// assert_eq!(substring_copy("abcdef", 10, 2).unwrap().unwrap(), "");
/// assert_eq!(substring_copy("abcdef", 2, -1).unwrap().unwrap(), "cdef");
/// ```
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn substring_copy<'a>(text: impl TextRef<'a>, start: isize, length: isize) -> Result<Option<Text>> {
    let Some(units) = text.text_ref() else {
        return Ok(None);
    };
    let start = usize::try_from(start).unwrap_or(0);
    let Some(rest) = units.get(start..).filter(|rest| !rest.is_empty()) else {
        return Ok(Some(Text::new()));
    };
    let length = usize::try_from(length).map_or(rest.len(), |length| length.min(rest.len()));
    Text::try_from_bytes(&rest[..length]).map(Some)
}

fn replace_units(units: &mut [u8], find: u8, replace: u8) {
    for unit in units.iter_mut().filter(|unit| **unit == find) {
        *unit = replace;
    }
}

/// Replace every `find` unit with `replace`, in place.
pub fn replace_unit<'a>(text: impl TextMut<'a>, find: u8, replace: u8) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    replace_units(units, find, replace);
    Some(units)
}

/// Copy `text` with every `find` unit replaced by `replace`.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn replace_unit_copy<'a>(text: impl TextRef<'a>, find: u8, replace: u8) -> Result<Option<Text>> {
    text.text_ref()
        .map(|units| Text::try_transformed(units, |copy| replace_units(copy, find, replace)))
        .transpose()
}
