pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
pub const IHDR_TYPE: [u8; 4] = [b'I', b'H', b'D', b'R'];
pub const IHDR_DATA_LEN: u32 = 13;
// signature + chunk length + chunk type + IHDR data + IHDR crc
pub const PNG_MIN_LEN: usize = 8 + 4 + 4 + IHDR_DATA_LEN as usize + 4;

pub const ICO_HEADER_LEN: usize = 6;
pub const ICO_ENTRY_LEN: usize = 16;
pub const ICO_PREFIX_LEN: usize = ICO_HEADER_LEN + ICO_ENTRY_LEN;
pub const ICO_TYPE_ICON: u16 = 1;
pub const ICO_BITS_PER_PIXEL: u16 = 32;
