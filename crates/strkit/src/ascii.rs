//! Single code unit classification and case mapping.

/// Map `a`–`z` to `A`–`Z`; every other unit is returned unchanged.
#[inline]
#[must_use]
pub const fn to_upper_unit(unit: u8) -> u8 {
    unit.to_ascii_uppercase()
}

/// Map `A`–`Z` to `a`–`z`; every other unit is returned unchanged.
#[inline]
#[must_use]
pub const fn to_lower_unit(unit: u8) -> u8 {
    unit.to_ascii_lowercase()
}

/// Space, tab, line feed, carriage return, form feed and vertical tab.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab (`0x0B`) counts.
#[inline]
#[must_use]
pub const fn is_whitespace(unit: u8) -> bool {
    matches!(unit, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}
