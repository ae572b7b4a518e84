use crate::{
    consts::{IHDR_DATA_LEN, IHDR_TYPE, PNG_MIN_LEN, PNG_SIGNATURE},
    error::FaviconError,
    utils::{array_from_input, is_identical},
};

/// The pixel dimensions of a PNG image as stored in its IHDR chunk.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PngDimensions {
    width: u32,
    height: u32,
}

impl PngDimensions {
    /// The width of the PNG image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }
    /// The height of the PNG image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
    /// Reads the width and height from the IHDR chunk of a PNG image.
    ///
    /// Only the signature and the first chunk are inspected. The IHDR chunk must be the first chunk of a PNG
    /// so no other chunks are searched. The values are taken as they are, a width or height of `0` is not rejected.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the following is true:
    ///
    /// 1: The input does not start with the PNG signature.\
    /// 2: The input is shorter than `33` bytes.\
    /// 3: The first chunk is not `IHDR` or its declared length is not `13`.
    pub const fn read(input: &[u8]) -> Result<Self, FaviconError> {
        if input.len() < PNG_SIGNATURE.len() {return Err(FaviconError::NotPng(padded_signature(input)));}
        let signature: [u8; 8] = array_from_input(input, 0);
        if !is_identical(&signature, &PNG_SIGNATURE) {return Err(FaviconError::NotPng(signature));}
        if input.len() < PNG_MIN_LEN {return Err(FaviconError::TooSmall(input.len()));}
        let length = u32::from_be_bytes(array_from_input(input, 8));
        let chunk_type: [u8; 4] = array_from_input(input, 12);
        if !is_identical(&chunk_type, &IHDR_TYPE) || length != IHDR_DATA_LEN {
            return Err(FaviconError::MissingIhdr(length, chunk_type));
        }
        let width = u32::from_be_bytes(array_from_input(input, 16));
        let height = u32::from_be_bytes(array_from_input(input, 20));
        Ok(Self {width, height})
    }
}

/// Reads the `(width, height)` of a PNG image from its IHDR chunk.
///
/// A tuple returning shorthand for [`PngDimensions::read`].
///
/// # Errors
///
/// Same as [`PngDimensions::read`].
pub const fn read_dimensions(input: &[u8]) -> Result<(u32, u32), FaviconError> {
    match PngDimensions::read(input) {
        Ok(dimensions) => Ok((dimensions.width, dimensions.height)),
        Err(e) => Err(e),
    }
}

const fn padded_signature(input: &[u8]) -> [u8; 8] {
    let mut output = [0; 8];
    let mut index = 0;
    while index < input.len() && index < output.len() {
        output[index] = input[index];
        index += 1;
    }
    output
}
