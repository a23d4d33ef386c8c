#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mime = magicsniff::sniff(data);
    assert!(!mime.is_empty());
});
