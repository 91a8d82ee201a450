use core::fmt::Write;

/// The 4-byte type tag of a PNG chunk.
///
/// Tags are expected to be ascii letters, but nothing enforces that. The
/// `Debug` and `Display` impls just `as` cast each byte into a `char`, which
/// is safe for any byte, you just might get odd characters for odd tags.
///
/// The case of each letter carries meaning, see the `is_` methods.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkTy {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");
  /// Image Gamma
  pub const gAMA: Self = Self(*b"gAMA");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Transparency
  pub const tRNS: Self = Self(*b"tRNS");
  /// Standard RGB colour space
  pub const sRGB: Self = Self(*b"sRGB");

  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks must be understood to display the image (first letter
  /// uppercase).
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }

  /// Public chunks are defined by the PNG spec or registered (second letter
  /// uppercase).
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }

  /// The third letter should always be uppercase in current PNG.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 32) == 0
  }

  /// Editors that don't understand the chunk may still copy it into a modified
  /// file (fourth letter lowercase).
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}
impl core::fmt::Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')?;
    Ok(())
  }
}
impl core::fmt::Display for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // go through a str so that width and alignment flags get applied.
    let mut buf = [0_u8; 8];
    let mut len = 0;
    for ch in self.0.iter().copied().map(|u| u as char) {
      len += ch.encode_utf8(&mut buf[len..]).len();
    }
    f.pad(core::str::from_utf8(&buf[..len]).unwrap_or("????"))
  }
}
impl From<[u8; 4]> for ChunkTy {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}
impl From<ChunkTy> for [u8; 4] {
  #[inline]
  #[must_use]
  fn from(ty: ChunkTy) -> Self {
    ty.0
  }
}
