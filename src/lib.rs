//! # A const favicon (ICO) building library
//!
//! This crate wraps an existing PNG image in a single-entry ICO (Windows icon) container.
//! The PNG data is embedded as is, nothing is decoded or re-encoded.
//!
//! This is a safe `#![no_std]` crate. Only [`build_ico`] requires [alloc] (enabled by the default `alloc` feature).
//!
//! ## Format
//!
//! Only the PNG signature and the IHDR chunk are read from the input. The IHDR chunk must be the first chunk of a PNG
//! so it is expected at a fixed position and never searched for. Everything after it is treated as opaque bytes.
//!
//! The produced ICO file consists of:
//!
//! | Offset | Size | Content                                                      |
//! |--------|------|--------------------------------------------------------------|
//! | 0      | 6    | reserved (`0`), type (`1` = icon), image count (`1`)         |
//! | 6      | 16   | directory entry pointing at the PNG data                     |
//! | 22     | N    | the unmodified PNG data                                      |
//!
//! Width and height of a directory entry are single bytes where `0` means `256`.
//! Images of `256` pixels or more in either dimension are therefore stored as `0`.
//!
//! ## Usage
//!
//! ```ignore
//! let png = std::fs::read("favicon.png")?;
//! let (width, height) = const_ico::read_dimensions(&png)?;
//! let ico = const_ico::build_ico(&png)?;
//! assert_eq!(ico.len(), 22 + png.len());
//! ```
//!
//! Without [alloc] you can provide your own buffer:
//!
//! ```ignore
//! let mut output = [0; 4096];
//! let written = const_ico::write_ico(&png, &mut output)?;
//! let ico = &output[..written];
//! ```
//!
//! [alloc]: <https://doc.rust-lang.org/alloc/index.html>
#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod consts;
mod error;
mod ico;
mod png;
mod utils;

#[cfg(feature = "alloc")]
pub use crate::ico::build_ico;
pub use crate::ico::{write_ico, IcoHeader};
pub use crate::error::FaviconError;
pub use crate::png::{read_dimensions, PngDimensions};
