#![no_main]

use apilint::Position;
use apilint::placeholders::{check_placeholders, extract_placeholders};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let names = extract_placeholders(&s);
    let declared: HashSet<&str> = names.iter().copied().collect();
    assert!(check_placeholders(&s, &declared, &Position::default()).is_empty());
});
