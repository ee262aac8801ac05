#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw_data: &[u8]| {
    // Foreign bytes must come back as output or a typed error, never a panic.
    let _ = lzw16::decompress(raw_data);
});
