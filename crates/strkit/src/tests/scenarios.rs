//! The reference scenarios, written against the crate root the way a caller
//! would use it.

use alloc::vec::Vec;

use crate::{
    Result, Text, is_numeric, is_palindrome, length, reverse_copy, split, substring_copy,
    title_case_copy, trim_both, trim_both_copy, uppercase_copy,
};

#[track_caller]
fn owned(result: Result<Option<Text>>) -> Text {
    result
        .expect("allocation should succeed")
        .expect("input was present")
}

const GREETING: &str = "Hello, World!";

#[test]
fn greeting_length() {
    assert_eq!(length(GREETING), 13);
}

#[test]
fn greeting_reversed() {
    assert_eq!(owned(reverse_copy(GREETING)), "!dlroW ,olleH");
}

#[test]
fn greeting_uppercased() {
    assert_eq!(owned(uppercase_copy(GREETING)), "HELLO, WORLD!");
}

#[test]
fn greeting_split_on_comma() {
    let tokens = split(GREETING, b',').unwrap().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens, ["Hello", " World!"]);
}

#[test]
fn palindromes() {
    assert!(is_palindrome("radar"));
    assert!(!is_palindrome(GREETING));
}

#[test]
fn title_case_forces_word_tails_lower() {
    assert_eq!(owned(title_case_copy("the QUICK fox")), "The Quick Fox");
}

#[test]
fn substring_clamps() {
    assert_eq!(owned(substring_copy("abcdef", -3, 4)), "abcd");
    assert_eq!(owned(substring_copy("abcdef", 10, 2)), "");
}

#[test]
fn all_whitespace_trims_to_empty() {
    assert_eq!(owned(trim_both_copy("   ")), "");

    let mut buf = Vec::from("   ");
    assert!(trim_both(&mut buf).unwrap().is_empty());
}

#[test]
fn empty_is_not_numeric() {
    assert!(!is_numeric(""));
}
