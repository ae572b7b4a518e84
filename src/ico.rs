use crate::{
    consts::{ICO_BITS_PER_PIXEL, ICO_PREFIX_LEN, ICO_TYPE_ICON},
    error::FaviconError,
    png::PngDimensions,
    utils::copy_into,
};

/// The file header and single directory entry of an ICO file that embeds PNG data.
///
/// Together they form the `22` bytes that precede the PNG data in the ICO file.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct IcoHeader {
    width: u8,
    height: u8,
    payload_size: u32,
}

impl IcoHeader {
    /// Generates an [`IcoHeader`] for PNG data of `payload_len` bytes with the given dimensions.
    ///
    /// A directory entry stores width and height in a single byte where `0` means `256`.
    /// Any value of `256` or greater is stored as `0`, smaller values are stored unchanged.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `payload_len` does not fit in a [`u32`].
    pub const fn new(width: u32, height: u32, payload_len: usize) -> Result<Self, FaviconError> {
        if payload_len as u64 > u32::MAX as u64 {return Err(FaviconError::PayloadTooLarge(payload_len));}
        Ok(Self {width: dimension_byte(width), height: dimension_byte(height), payload_size: payload_len as u32})
    }
    /// Generates an [`IcoHeader`] for a complete PNG image.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the dimensions cannot be read (see [`PngDimensions::read`]) or the PNG data is too large.
    pub const fn for_png(png: &[u8]) -> Result<Self, FaviconError> {
        match PngDimensions::read(png) {
            Ok(dimensions) => Self::new(dimensions.width(), dimensions.height(), png.len()),
            Err(e) => Err(e),
        }
    }
    /// The width byte of the directory entry. `0` stands for `256` or more pixels.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }
    /// The height byte of the directory entry. `0` stands for `256` or more pixels.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }
    /// The size of the embedded PNG data in bytes.
    #[must_use]
    pub const fn payload_size(&self) -> u32 {
        self.payload_size
    }
    /// The position of the PNG data in the ICO file. Always `22` as there is exactly one entry.
    #[must_use]
    pub const fn payload_offset(&self) -> u32 {
        ICO_PREFIX_LEN as u32
    }
    /// Convert the header and directory entry to an array of bytes.
    ///
    /// All multi-byte fields are little-endian.
    #[must_use]
    pub const fn to_u8(self) -> [u8; ICO_PREFIX_LEN] {
        let output = [0; ICO_PREFIX_LEN];                                      // reserved
        let output = copy_into(output, &ICO_TYPE_ICON.to_le_bytes(), 2);       // type
        let mut output = copy_into(output, &1u16.to_le_bytes(), 4);            // image count
        output[6] = self.width;
        output[7] = self.height;
        // 8: palette colours, 9: reserved, 10..12: colour planes, all 0
        let output = copy_into(output, &ICO_BITS_PER_PIXEL.to_le_bytes(), 12);
        let output = copy_into(output, &self.payload_size.to_le_bytes(), 14);
        copy_into(output, &self.payload_offset().to_le_bytes(), 18)
    }
}

#[allow(clippy::cast_possible_truncation)] // only casts values below 256
const fn dimension_byte(value: u32) -> u8 {
    if value >= 256 {0} else {value as u8}
}

/// Writes an ICO file wrapping `png` into `output` and returns the amount of bytes written.
///
/// The PNG data is copied unmodified after the `22` byte prefix, so `22 + png.len()` bytes are written.
/// Bytes of `output` beyond that are left untouched.
///
/// # Errors
///
/// Will return `Err` if the following is true:
///
/// 1: The PNG dimensions cannot be read (see [`PngDimensions::read`]).\
/// 2: The PNG data is larger than [`u32::MAX`] bytes.\
/// 3: `output` is shorter than `22 + png.len()` bytes.
pub fn write_ico(png: &[u8], output: &mut [u8]) -> Result<usize, FaviconError> {
    let header = IcoHeader::for_png(png)?;
    let total = ICO_PREFIX_LEN + png.len();
    if output.len() < total {return Err(FaviconError::BufferTooSmall(total, output.len()));}
    output[..ICO_PREFIX_LEN].copy_from_slice(&header.to_u8());
    output[ICO_PREFIX_LEN..total].copy_from_slice(png);
    Ok(total)
}

/// Builds a complete ICO file wrapping `png`.
///
/// The returned bytes are the `22` byte prefix followed by the unmodified PNG data.
///
/// # Errors
///
/// Will return `Err` if the PNG dimensions cannot be read (see [`PngDimensions::read`]) or the PNG data is larger
/// than [`u32::MAX`] bytes.
#[cfg(feature = "alloc")]
pub fn build_ico(png: &[u8]) -> Result<alloc::vec::Vec<u8>, FaviconError> {
    let header = IcoHeader::for_png(png)?;
    let mut output = alloc::vec::Vec::with_capacity(ICO_PREFIX_LEN + png.len());
    output.extend_from_slice(&header.to_u8());
    output.extend_from_slice(png);
    Ok(output)
}
