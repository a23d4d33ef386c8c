#![no_main]
use libfuzzer_sys::fuzz_target;
use magicsniff::sniff::containers::detect_office_family;
use magicsniff::sniff::ContainerScanConfig;

fuzz_target!(|data: &[u8]| {
    let mut input = b"PK\x03\x04".to_vec();
    input.extend_from_slice(data);
    let _ = detect_office_family(&input, &ContainerScanConfig::default());
});
