use crate::consts::PNG_MIN_LEN;

/// The possible errors when reading a PNG header or building an ICO container.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FaviconError {
    /// The input does not start with the PNG signature ([`137`, `80`, `78`, `71`, `13`, `10`, `26`, `10`]).
    /// Shows the first `8` bytes encountered (zero padded if the input is shorter).
    NotPng([u8; 8]),
    /// The input is shorter than the `33` bytes needed for the signature and the IHDR chunk. Shows the input size.
    TooSmall(usize),
    /// The first chunk is not an IHDR chunk of length `13`. Shows the declared length and the chunk type.
    MissingIhdr(u32, [u8; 4]),
    /// The PNG data does not fit the 32bit size field of an ICO directory entry. Shows the size in bytes.
    PayloadTooLarge(usize),
    /// The output buffer cannot hold the ICO data. Shows required and available size in bytes.
    BufferTooSmall(usize, usize),
}

impl core::fmt::Display for FaviconError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPng(sig) => write!(f, "Input is not a PNG file: detected signature {sig:?}"),
            Self::TooSmall(size) => write!(f, "PNG too small: need at least {PNG_MIN_LEN} bytes, detected {size} bytes"),
            Self::MissingIhdr(len, kind) => write!(
                f,
                "PNG missing IHDR in expected position: detected chunk {:?} with length {len}",
                core::str::from_utf8(kind).unwrap_or("<non-ascii>"),
            ),
            Self::PayloadTooLarge(size) => write!(f, "PNG of {size} bytes is too large for an ICO directory entry"),
            Self::BufferTooSmall(needed, got) => write!(f, "Output buffer must be at least {needed} bytes, detected {got} bytes"),
        }
    }
}

impl core::error::Error for FaviconError {}
