//! A module for all decoding needs.
use crate::{Code, MAX_ENTRIES};
use std::fmt;

/// The decoding half of the codec.
///
/// The table is reseeded for every call to [`decode`], mirroring the
/// encoder's growth while the code sequence is consumed.
///
/// [`decode`]: #method.decode
pub struct Decoder {
    table: Table,
}

/// Decoding hit a code stream no encoder could have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A code that is neither an assigned entry nor the next free one.
    BadCode(Code),
}

/// The table of decoded codes.
///
/// Every entry links back to the entry one byte shorter, so recording a new
/// entry costs constant space and a code expands back-to-front in a single
/// pass over its length. `depths` keeps the expansion length per code.
struct Table {
    inner: Vec<Link>,
    depths: Vec<u16>,
}

#[derive(Clone, Copy)]
struct Link {
    prev: Code,
    byte: u8,
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            table: Table::new(),
        }
    }

    /// Rebuild the bytes a correspondingly-run encoder consumed.
    ///
    /// Every code must name an assigned entry, with one exception: a code
    /// equal to the next free one refers to the entry this very step
    /// defines, the previous entry extended by its own first byte. Anything
    /// past that aborts with [`DecodeError::BadCode`] and no output escapes
    /// the call. An empty sequence yields empty bytes.
    pub fn decode(&mut self, codes: &[Code]) -> Result<Vec<u8>, DecodeError> {
        self.table.reset();

        let mut codes = codes.iter();
        let first = match codes.next() {
            Some(&code) => code,
            None => return Ok(Vec::new()),
        };

        // Only the single-byte roots exist at this point.
        if usize::from(first) >= self.table.len() {
            return Err(DecodeError::BadCode(first));
        }

        let mut out = Vec::with_capacity(codes.len() * 2 + 1);
        self.table.expand(&mut out, first);

        let mut prev = first;
        let mut prev_start = 0;
        for &code in codes {
            let start = out.len();
            let byte;
            if usize::from(code) < self.table.len() {
                byte = self.table.expand(&mut out, code);
            } else if usize::from(code) == self.table.len() {
                // The just-defined entry: previous entry plus its own
                // first byte. Unreachable once the table is frozen, every
                // 16 bit code is assigned then.
                byte = out[prev_start];
                out.extend_from_within(prev_start..start);
                out.push(byte);
            } else {
                return Err(DecodeError::BadCode(code));
            }

            if !self.table.is_full() {
                self.table.derive(prev, byte);
            }

            prev = code;
            prev_start = start;
        }

        Ok(out)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

impl Table {
    fn new() -> Self {
        Table {
            inner: Vec::with_capacity(MAX_ENTRIES),
            depths: Vec::with_capacity(MAX_ENTRIES),
        }
    }

    fn reset(&mut self) {
        self.inner.clear();
        self.depths.clear();
        for byte in 0..=255u8 {
            self.inner.push(Link { prev: 0, byte });
            self.depths.push(1);
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_full(&self) -> bool {
        self.inner.len() >= MAX_ENTRIES
    }

    /// Record the next entry: `prev`'s sequence extended by `byte`.
    fn derive(&mut self, prev: Code, byte: u8) {
        let depth = self.depths[usize::from(prev)] + 1;
        self.inner.push(Link { prev, byte });
        self.depths.push(depth);
    }

    /// Append the expansion of `code` to `out`, returning its first byte.
    fn expand(&self, out: &mut Vec<u8>, code: Code) -> u8 {
        let depth = usize::from(self.depths[usize::from(code)]);
        let start = out.len();
        out.resize(start + depth, 0);

        let mut link = self.inner[usize::from(code)];
        for slot in out[start..].iter_mut().rev() {
            *slot = link.byte;
            link = self.inner[usize::from(link.prev)];
        }
        out[start]
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BadCode(code) => {
                write!(f, "code {} names no dictionary entry", code)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
