#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

//! A crate for taking PNG files apart at the chunk level and putting them
//! back together.
//!
//! Parsing gives you a [`Png`](png::Png): the list of chunks in file order,
//! plus any bytes that were stuck on after the end of the image. You can view
//! and edit chunks, add and remove them, and write the whole thing back out.
//! Untouched input comes back out byte for byte the same.
//!
//! This crate does *not* decode pixels. The most it does with image data is
//! inflate the joined `IDAT` chunks, handing back the filtered scanlines.
//!
//! ## Features
//! * `std` (default): parse from any `std::io::Read`, write to any
//!   `std::io::Write`, and `std::error::Error` impls. Without it the crate is
//!   `no_std` (it always needs `alloc`).
//! * `cli` (default): the `pngchunk` binary, which prints a chunk table.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod int_endian;

pub mod png;
