#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(program) = jsyn::parse_source(source) {
            assert!(program.end.map_or(true, |end| end <= source.len()));
        }
    }
});
