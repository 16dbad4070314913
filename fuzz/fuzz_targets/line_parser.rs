#![no_main]

use gccount::ingest::{parse_line, FieldLayout};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string
    if let Ok(input) = std::str::from_utf8(data) {
        // Any line either parses to a well-formed interval or errors, never panics
        if let Ok(Some(interval)) = parse_line(input, FieldLayout::default()) {
            assert!(interval.is_well_formed());
        }
    }
});
