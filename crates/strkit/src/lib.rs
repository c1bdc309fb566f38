//! ASCII byte-string operations.
//!
//! Every operation works on 8-bit code units and comes in up to two flavors:
//!
//! - an in-place mutator that rewrites a caller-owned buffer and hands back a
//!   view of it (`uppercase`, `trim_both`, `reverse`, ...), and
//! - a copy constructor that leaves its input alone and returns a freshly
//!   owned [`Text`] (`uppercase_copy`, `trim_both_copy`, `reverse_copy`, ...).
//!
//! Inputs may be absent. Any type implementing [`TextRef`] (or [`TextMut`] for
//! the in-place family) is accepted, including `Option<T>`, so "no buffer" is
//! an explicit `None` rather than a sentinel hidden in the data.
//!
//! ```rust
//! use strkit::{split, title_case_copy, ABSENT};
//!
//! let title = title_case_copy("the QUICK fox").unwrap().unwrap();
//! assert_eq!(title, "The Quick Fox");
//!
//! let tokens = split("Hello, World!", b',').unwrap().unwrap();
//! assert_eq!(tokens, ["Hello", " World!"]);
//!
//! assert_eq!(title_case_copy(ABSENT), Ok(None));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod access;
mod ascii;
mod case;
mod construct;
mod error;
mod input;
mod search;
mod split;
mod text;
mod trim;
mod validate;

#[cfg(any(test, feature = "fuzzing"))]
pub mod fuzzing;

#[cfg(test)]
mod tests;

pub use access::{EMPTY_UNIT, char_at, first, last, length};
pub use ascii::{is_whitespace, to_lower_unit, to_upper_unit};
pub use case::{
    capitalize, capitalize_copy, lowercase, lowercase_copy, title_case, title_case_copy,
    uppercase, uppercase_copy,
};
pub use construct::{
    concat_copy, repeat_copy, replace_unit, replace_unit_copy, reverse, reverse_copy,
    substring_copy,
};
pub use error::{Result, TextError};
pub use input::{ABSENT, TextMut, TextRef};
pub use search::{contains, index_of_sequence, index_of_unit};
pub use split::{SplitOptions, TokenList, join, split, split_with};
pub use text::Text;
pub use trim::{trim_both, trim_both_copy, trim_left, trim_left_copy, trim_right, trim_right_copy};
pub use validate::{equals, is_alpha, is_alphanumeric, is_numeric, is_palindrome};
