//! # 16-bit LZW encoder and decoder
//!
//! This crate provides whole-buffer LZW compression with a fixed code width
//! of 16 bits. The dictionary starts out as the 256 single-byte sequences,
//! gains one entry per emitted code and freezes once all 65536 codes are
//! assigned; there are no clear codes, no end codes and no dictionary
//! resets. The persisted form is the bare code sequence, every code written
//! as an unsigned big-endian 16-bit integer with no header or padding.
//!
//! Exemplary use of the codec:
//!
//! ```
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = lzw16::compress(data);
//! let restored = lzw16::decompress(&compressed).unwrap();
//! assert_eq!(restored, data);
//! ```
//!
//! Both directions are pure, synchronous transformations over a full
//! in-memory buffer. Each call owns its dictionary exclusively and discards
//! it on return, so independent calls may run on separate threads without
//! any coordination.
use std::fmt;

/// The dictionary growth cap. Codes are 16 bits wide, so no larger table
/// could ever be addressed.
pub(crate) const MAX_ENTRIES: usize = 1 << 16;

/// Alias for a LZW code point.
pub type Code = u16;

pub mod decode;
pub mod encode;
pub mod frame;

pub use self::decode::DecodeError;
pub use self::frame::FrameError;

/// Compress `data` into a framed 16-bit code stream.
pub fn compress(data: &[u8]) -> Vec<u8> {
    frame::pack(&encode::Encoder::new().encode(data))
}

/// Reverse [`compress`], reconstructing the original bytes.
///
/// Fails on streams that do not divide into whole codes and on code
/// sequences no encoder could have produced. There is no partial output:
/// the first offending code aborts the whole call.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, Error> {
    let codes = frame::unpack(data)?;
    let bytes = decode::Decoder::new().decode(&codes)?;
    Ok(bytes)
}

/// Any failure of [`decompress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The byte stream could not be split into codes.
    Frame(FrameError),
    /// The code sequence itself was malformed.
    Decode(DecodeError),
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        Error::Frame(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Frame(err) => err.fmt(f),
            Error::Decode(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Frame(err) => Some(err),
            Error::Decode(err) => Some(err),
        }
    }
}
