//! Predicates over whole buffers.
//!
//! The character-class checks treat an empty or absent buffer as failing:
//! emptiness is not vacuously numeric.

use crate::TextRef;

fn all_units<'a>(text: impl TextRef<'a>, class: fn(&u8) -> bool) -> bool {
    text.text_ref()
        .is_some_and(|units| !units.is_empty() && units.iter().all(class))
}

/// Non-empty and made only of `0`–`9`.
pub fn is_numeric<'a>(text: impl TextRef<'a>) -> bool {
    all_units(text, u8::is_ascii_digit)
}

/// Non-empty and made only of ASCII letters.
pub fn is_alpha<'a>(text: impl TextRef<'a>) -> bool {
    all_units(text, u8::is_ascii_alphabetic)
}

/// Non-empty and made only of ASCII letters and digits.
pub fn is_alphanumeric<'a>(text: impl TextRef<'a>) -> bool {
    all_units(text, u8::is_ascii_alphanumeric)
}

/// Unit-by-unit equality, lengths included.
///
/// Two absent buffers are equal; an absent buffer never equals a present one,
/// not even an empty one.
pub fn equals<'a, 'b>(a: impl TextRef<'a>, b: impl TextRef<'b>) -> bool {
    a.text_ref() == b.text_ref()
}

/// Whether `text` reads the same in both directions. Absent is `false`; empty
/// and single-unit buffers are palindromes.
pub fn is_palindrome<'a>(text: impl TextRef<'a>) -> bool {
    let Some(units) = text.text_ref() else {
        return false;
    };
    let half = units.len() / 2;
    units[..half]
        .iter()
        .zip(units.iter().rev())
        .all(|(front, back)| front == back)
}
