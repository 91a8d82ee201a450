#![forbid(unsafe_code)]

//! Module for working with PNG chunk streams.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Each chunk
//! is framed the same way:
//!
//! | field  | size     | notes                                  |
//! |--------|----------|----------------------------------------|
//! | length | 4        | big-endian, counts only the data       |
//! | type   | 4        | ascii letters, the case of each matters|
//! | data   | `length` |                                        |
//! | crc    | 4        | big-endian CRC-32 of type and data     |
//!
//! The last chunk is `IEND`. Plenty of files in the wild have extra bytes
//! stuck on after that (archives, signatures, or just junk), and this module
//! keeps those bytes around as a [`PngRecord::Tail`] so that a parsed file
//! writes back out byte for byte the same.
//!
//! ## Library Design Assumptions
//!
//! * The whole PNG is parsed into memory at once as a [`Png`].
//! * Chunk data is owned, and is never shared between chunks.
//! * Every [`PngChunk`] always holds the correct CRC for its type and data.
//!   Parsing rejects chunks with a wrong CRC, and all methods that edit chunk
//!   data recompute the CRC.
//!
//! Only a few chunk types are interpreted (see [`REGISTRY`]). Everything else
//! is kept as opaque bytes, which is enough to edit a file without disturbing
//! chunks this crate knows nothing about.
//!
//! ## Example
//!
//! ```
//! use pngchunk::png::*;
//!
//! let mut png = Png::new();
//! png.records.push(PngChunk::from(IHDR::new(1, 1, 8, 2, 0, 0, 0)).into());
//! png.records.push(PngChunk::iend().into());
//! png.ensure_gamma(0.45455);
//!
//! let bytes = png.to_png_bytes();
//! let again = Png::from_png_bytes(&bytes).unwrap();
//! assert_eq!(again.gamma(), Some(0.45455));
//! assert_eq!(again.records[1].ty(), Some(ChunkTy::gAMA));
//! ```

use alloc::{format, string::String, vec, vec::Vec};
use core::fmt::Debug;

use log::{debug, trace};

use crate::{int_endian::U32BE, ChunkField, CrcError, FormatError, PngError, PngResult};

mod crc32;
pub use crc32::*;

mod chunk_ty;
pub use chunk_ty::*;

mod registry;
pub use registry::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod gama;
pub use gama::*;

mod source;
pub use source::*;

mod image;
pub use image::*;

mod summary;
pub use summary::*;
