#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = lzw16::compress(data);
    let restored = lzw16::decompress(&compressed).expect("own output must decode");
    assert!(restored == data);
});
