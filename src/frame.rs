//! Framing between code sequences and their persisted byte layout.
//!
//! Every code occupies exactly two bytes, big-endian, with no separators,
//! header or trailing padding. The fixed width is what caps the dictionary
//! at 65536 entries: no larger code is representable, so [`pack`] can never
//! fail by construction.
use crate::Code;
use std::fmt;

/// The persisted stream does not divide into whole codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameError {
    /// Byte length of the rejected stream.
    pub len: usize,
}

/// Serialize a code sequence into its persisted byte layout.
pub fn pack(codes: &[Code]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 2);
    for &code in codes {
        out.extend_from_slice(&code.to_be_bytes());
    }
    out
}

/// Read a code sequence back from its persisted byte layout.
///
/// A dangling trailing byte fails the whole stream before any code is
/// produced.
pub fn unpack(data: &[u8]) -> Result<Vec<Code>, FrameError> {
    if data.len() % 2 != 0 {
        return Err(FrameError { len: data.len() });
    }

    Ok(data
        .chunks_exact(2)
        .map(|pair| Code::from_be_bytes([pair[0], pair[1]]))
        .collect())
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stream of {} bytes is not a whole number of 16 bit codes",
            self.len
        )
    }
}

impl std::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::{pack, unpack, FrameError};

    #[test]
    fn codes_are_big_endian() {
        assert_eq!(pack(&[0x0102, 65]), vec![0x01, 0x02, 0x00, 65]);
        assert_eq!(unpack(&[0x01, 0x02, 0x00, 65]), Ok(vec![0x0102, 65]));
    }

    #[test]
    fn empty_stream_is_valid() {
        assert_eq!(pack(&[]), Vec::<u8>::new());
        assert_eq!(unpack(&[]), Ok(Vec::new()));
    }

    #[test]
    fn dangling_byte_is_rejected() {
        assert_eq!(unpack(&[0x00, 65, 0x01]), Err(FrameError { len: 3 }));
        assert_eq!(unpack(&[0xff]), Err(FrameError { len: 1 }));
    }
}
