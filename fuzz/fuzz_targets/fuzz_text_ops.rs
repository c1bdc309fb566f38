#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strkit::{
    SplitOptions, char_at, fuzzing::check_invariants, join, length, repeat_copy, split_with,
    substring_copy,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    delimiter: u8,
    skip_empty: bool,
    limit: Option<u8>,
    start: i16,
    len: i16,
    times: i8,
}

fuzz_target!(|input: Input| {
    check_invariants(&input.text, &input.pattern, input.delimiter);

    // Range arguments clamp; none of these may panic.
    let sub = substring_copy(&input.text, isize::from(input.start), isize::from(input.len))
        .unwrap()
        .unwrap();
    assert!(sub.len() <= length(&input.text));
    let _ = char_at(&input.text, isize::from(input.start));

    let repeated = repeat_copy(&input.pattern, isize::from(input.times)).unwrap().unwrap();
    let times = usize::try_from(input.times).unwrap_or(0);
    assert_eq!(repeated.len(), input.pattern.len() * times);

    let options = SplitOptions {
        skip_empty: input.skip_empty,
        limit: input.limit.map(usize::from),
    };
    let tokens = split_with(&input.text, input.delimiter, options).unwrap().unwrap();
    if !input.skip_empty && input.limit != Some(0) {
        assert_eq!(join(tokens.as_slice(), input.delimiter).unwrap(), input.text);
    }
});
