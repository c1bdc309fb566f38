//! Whitespace trimming.
//!
//! The in-place forms never reallocate. Trimming a borrowed slice shifts the
//! retained units to the front of the caller's storage and returns a shorter
//! view of it; the storage itself keeps its length. [`Text`] additionally
//! offers `*_in_place` methods that truncate the owned buffer while keeping
//! its allocation.

use core::ops::Range;

use crate::{Result, Text, TextMut, TextRef, ascii::is_whitespace};

fn content_start(units: &[u8]) -> usize {
    units
        .iter()
        .position(|&unit| !is_whitespace(unit))
        .unwrap_or(units.len())
}

fn content_end(units: &[u8]) -> usize {
    units
        .iter()
        .rposition(|&unit| !is_whitespace(unit))
        .map_or(0, |last| last + 1)
}

/// Range of `units` left after trimming both ends. Empty when every unit is
/// whitespace.
fn content_range(units: &[u8]) -> Range<usize> {
    let start = content_start(units);
    if start == units.len() {
        return 0..0;
    }
    start..content_end(units)
}

/// Move `range` to the front of `units` and return the view over it.
fn shift_to_front(units: &mut [u8], range: Range<usize>) -> &mut [u8] {
    let len = range.len();
    if range.start > 0 {
        units.copy_within(range, 0);
    }
    &mut units[..len]
}

/// Trim leading and trailing whitespace in place.
///
/// ```rust
/// let mut buf = *b"  padded\t";
/// let view = strkit::trim_both(&mut buf).unwrap();
/// assert_eq!(view, b"padded");
/// ```
pub fn trim_both<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    let range = content_range(units);
    Some(shift_to_front(units, range))
}

/// Trim leading whitespace in place, shifting the rest to the front.
pub fn trim_left<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    let range = content_start(units)..units.len();
    Some(shift_to_front(units, range))
}

/// Trim trailing whitespace in place. Nothing moves; only the view shrinks.
pub fn trim_right<'a>(text: impl TextMut<'a>) -> Option<&'a mut [u8]> {
    let units = text.text_mut()?;
    let end = content_end(units);
    Some(&mut units[..end])
}

fn copy_range<'a>(
    text: impl TextRef<'a>,
    range: impl FnOnce(&[u8]) -> Range<usize>,
) -> Result<Option<Text>> {
    let Some(units) = text.text_ref() else {
        return Ok(None);
    };
    Text::try_from_bytes(&units[range(units)]).map(Some)
}

/// Copy `text` without leading and trailing whitespace.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn trim_both_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copy_range(text, content_range)
}

/// Copy `text` without leading whitespace.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn trim_left_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copy_range(text, |units| content_start(units)..units.len())
}

/// Copy `text` without trailing whitespace.
///
/// # Errors
///
/// Fails only if the copy cannot be allocated.
pub fn trim_right_copy<'a>(text: impl TextRef<'a>) -> Result<Option<Text>> {
    copy_range(text, |units| 0..content_end(units))
}

impl Text {
    /// Trim both ends, keeping the allocation.
    pub fn trim_in_place(&mut self) {
        let range = content_range(&self.bytes);
        let len = shift_to_front(&mut self.bytes, range).len();
        self.bytes.truncate(len);
    }

    /// Trim leading whitespace, keeping the allocation.
    pub fn trim_left_in_place(&mut self) {
        let start = content_start(&self.bytes);
        self.bytes.drain(..start);
    }

    /// Trim trailing whitespace, keeping the allocation.
    pub fn trim_right_in_place(&mut self) {
        let end = content_end(&self.bytes);
        self.bytes.truncate(end);
    }
}
