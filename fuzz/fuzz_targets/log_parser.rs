#![no_main]

use libfuzzer_sys::fuzz_target;
use proflog::{parse_reader, ProfileReport};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Parsing and rendering must never panic; errors are fine
    if let Ok(parsed) = parse_reader(data, Path::new("fuzz.log")) {
        let _ = ProfileReport::from_parsed(parsed).to_text();
    }
});
