//! Where parsing gets its bytes from.
//!
//! The parser only ever asks for bytes front to back, so anything that can
//! hand out bytes in order can be parsed. A byte slice works everywhere, and
//! with the `std` feature any [`Read`](std::io::Read) can be wrapped in an
//! [`IoSource`].

use alloc::vec::Vec;

use crate::PngResult;

#[cfg(feature = "std")]
use std::io::Read;

/// A sequential supply of bytes.
pub trait ByteSource {
  /// Fills as much of `buf` as possible.
  ///
  /// Returns how many bytes were written. Less than `buf.len()` means the data
  /// has run out.
  fn read_up_to(&mut self, buf: &mut [u8]) -> PngResult<usize>;

  /// Appends up to `len` bytes onto `out`, returning how many were appended.
  ///
  /// Less than `len` means the data has run out.
  fn read_into(&mut self, len: usize, out: &mut Vec<u8>) -> PngResult<usize>;

  /// Appends every remaining byte onto `out`.
  fn read_rest(&mut self, out: &mut Vec<u8>) -> PngResult<()>;
}

impl ByteSource for &[u8] {
  #[inline]
  fn read_up_to(&mut self, buf: &mut [u8]) -> PngResult<usize> {
    let bytes: &[u8] = *self;
    let count = buf.len().min(bytes.len());
    let (head, rest) = bytes.split_at(count);
    buf[..count].copy_from_slice(head);
    *self = rest;
    Ok(count)
  }

  #[inline]
  fn read_into(&mut self, len: usize, out: &mut Vec<u8>) -> PngResult<usize> {
    let bytes: &[u8] = *self;
    let count = len.min(bytes.len());
    let (head, rest) = bytes.split_at(count);
    out.extend_from_slice(head);
    *self = rest;
    Ok(count)
  }

  #[inline]
  fn read_rest(&mut self, out: &mut Vec<u8>) -> PngResult<()> {
    out.extend_from_slice(*self);
    *self = &[];
    Ok(())
  }
}

/// Adapts a [`Read`](std::io::Read) into a [`ByteSource`].
///
/// The reader is borrowed or owned as you like (`&mut R` is also `Read`), and
/// it is never closed by the parser.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R>(pub R);

#[cfg(feature = "std")]
impl<R: Read> ByteSource for IoSource<R> {
  fn read_up_to(&mut self, buf: &mut [u8]) -> PngResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
      match self.0.read(&mut buf[filled..]) {
        Ok(0) => break,
        Ok(n) => filled += n,
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e.into()),
      }
    }
    Ok(filled)
  }

  fn read_into(&mut self, len: usize, out: &mut Vec<u8>) -> PngResult<usize> {
    // `take` keeps a bogus length field from making us allocate it up front.
    Ok((&mut self.0).take(len as u64).read_to_end(out)?)
  }

  fn read_rest(&mut self, out: &mut Vec<u8>) -> PngResult<()> {
    self.0.read_to_end(out)?;
    Ok(())
  }
}
