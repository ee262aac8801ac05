use std::{env, fs};

fn assert_roundtrips(data: &[u8]) {
    let compressed = lzw16::compress(data);
    assert_eq!(compressed.len() % 2, 0);

    let restored = lzw16::decompress(&compressed).unwrap();
    assert!(restored == data, "mismatch on {} byte input", data.len());
}

#[test]
fn roundtrip_own_binary() {
    // The test binary itself doubles as a large corpus of mixed content.
    let file = env::args().next().unwrap();
    let data = fs::read(file).unwrap();
    assert_roundtrips(&data);
}

#[test]
fn roundtrip_empty() {
    assert_eq!(lzw16::compress(&[]), Vec::<u8>::new());
    assert_eq!(lzw16::decompress(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn roundtrip_single_bytes() {
    for byte in 0..=255u8 {
        let compressed = lzw16::compress(&[byte]);
        // Pre-seeded roots come out as themselves.
        assert_eq!(compressed, vec![0, byte]);
        assert_roundtrips(&[byte]);
    }
}

#[test]
fn roundtrip_text() {
    assert_roundtrips(b"TOBEORNOTTOBEORTOBEORNOT");
    assert_roundtrips(&b"ab".repeat(4096));
    assert_roundtrips(&b"A".repeat(100_000));
}

#[test]
fn roundtrip_many_successors() {
    // Grows one root's successor set past any inline representation.
    let mut data = Vec::new();
    for byte in 0..=255u8 {
        data.push(b'a');
        data.push(byte);
    }
    data.extend_from_slice(&data.clone());
    assert_roundtrips(&data);
}

#[test]
fn roundtrip_saturated_dictionary() {
    // Enough pseudo-random data to assign all 65536 codes; the frozen
    // table must keep round-tripping without growth.
    let data = lcg_bytes(1 << 20);
    assert_roundtrips(&data);
}

#[test]
fn known_code_sequence() {
    let compressed = lzw16::compress(b"AAAAAAAA");
    assert_eq!(compressed, pack(&[65, 256, 257, 256]));
    assert_eq!(lzw16::decompress(&compressed).unwrap(), b"AAAAAAAA");
}

#[test]
fn rejects_dangling_byte() {
    match lzw16::decompress(&[0, 65, 1]) {
        Err(lzw16::Error::Frame(err)) => assert_eq!(err.len, 3),
        other => panic!("dangling byte accepted: {:?}", other),
    }
}

#[test]
fn rejects_unassigned_code() {
    // After one code only the roots and the next free slot 256 are legal.
    match lzw16::decompress(&pack(&[65, 300])) {
        Err(lzw16::Error::Decode(lzw16::DecodeError::BadCode(300))) => {}
        other => panic!("unassigned code accepted: {:?}", other),
    }
}

fn pack(codes: &[u16]) -> Vec<u8> {
    codes.iter().flat_map(|code| code.to_be_bytes()).collect()
}

fn lcg_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 33) as u8
        })
        .collect()
}
