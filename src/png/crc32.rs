//! The CRC-32 used by PNG chunks.
//!
//! This is the same CRC that zip, gzip, and friends use: reflected polynomial
//! `0xEDB8_8320`, with the running value started at and finally xored with
//! `u32::MAX`. The chunk CRC covers the chunk type bytes followed by the chunk
//! data bytes, but *not* the length field.

use super::ChunkTy;

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// A running CRC-32 computation.
///
/// Feed bytes with [`update`](Crc32::update) as many times as you like, then
/// call [`finish`](Crc32::finish) for the final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32(u32);
impl Default for Crc32 {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl Crc32 {
  /// A fresh computation with no bytes fed in.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(u32::MAX)
  }

  /// Feeds more bytes into the computation.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    let mut crc = self.0;
    for &byte in bytes {
      let i = (crc ^ u32::from(byte)) as u8 as usize;
      crc = CRC_TABLE[i] ^ (crc >> 8);
    }
    self.0 = crc;
  }

  /// The CRC value of all bytes fed in so far.
  #[inline]
  #[must_use]
  pub const fn finish(self) -> u32 {
    self.0 ^ u32::MAX
  }
}

/// CRC of an arbitrary byte iterator.
#[inline]
#[must_use]
pub fn png_crc(iter: impl Iterator<Item = u8>) -> u32 {
  let mut crc = u32::MAX;
  for byte in iter {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}

/// CRC of a chunk: the type tag followed by the data.
#[inline]
#[must_use]
pub fn chunk_crc(ty: ChunkTy, data: &[u8]) -> u32 {
  let mut crc = Crc32::new();
  crc.update(&ty.0);
  crc.update(data);
  crc.finish()
}
