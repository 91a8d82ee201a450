use super::*;

/// The only compression method PNG defines: zlib, deflate with a 32k window.
pub const COMPRESSION_METHOD_ZLIB: u8 = 0;

/// Image Header
///
/// This is exactly the 13 bytes of `IHDR` chunk data, so it can be viewed
/// in place with [`PngChunk::to_ihdr`]. It's read-only: to change the header,
/// build a new one and replace the chunk.
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct IHDR {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}
impl IHDR {
  /// Length of `IHDR` chunk data.
  pub const DATA_LEN: usize = 13;

  #[inline]
  #[must_use]
  pub const fn new(
    width: u32, height: u32, bit_depth: u8, color_type: u8, compression_method: u8,
    filter_method: u8, interlace_method: u8,
  ) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth,
      color_type,
      compression_method,
      filter_method,
      interlace_method,
    }
  }
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width.to_u32()
  }
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height.to_u32()
  }
  #[inline]
  #[must_use]
  pub const fn bit_depth(&self) -> u8 {
    self.bit_depth
  }
  #[inline]
  #[must_use]
  pub const fn color_type(&self) -> u8 {
    self.color_type
  }
  #[inline]
  #[must_use]
  pub const fn compression_method(&self) -> u8 {
    self.compression_method
  }
  #[inline]
  #[must_use]
  pub const fn filter_method(&self) -> u8 {
    self.filter_method
  }
  /// 0 for no interlacing, 1 for Adam7.
  #[inline]
  #[must_use]
  pub const fn interlace_method(&self) -> u8 {
    self.interlace_method
  }
}
impl From<IHDR> for PngChunk {
  #[inline]
  #[must_use]
  fn from(ihdr: IHDR) -> Self {
    PngChunk::with_computed_crc(ChunkTy::IHDR, bytemuck::bytes_of(&ihdr).to_vec())
  }
}

impl PngChunk {
  /// Views the data of an `IHDR` chunk.
  ///
  /// `None` if this isn't an `IHDR`, or if the data isn't exactly 13 bytes.
  #[inline]
  #[must_use]
  pub fn to_ihdr(&self) -> Option<&IHDR> {
    if self.ty() != ChunkTy::IHDR {
      return None;
    }
    bytemuck::try_from_bytes(self.data()).ok()
  }
}

macro_rules! ihdr_attribute {
  ($name:ident, $variant:ident) => {
    Attribute {
      name: stringify!($name),
      get: {
        fn get(chunk: &PngChunk) -> Option<AttrValue> {
          chunk.to_ihdr().map(|ihdr| AttrValue::$variant(ihdr.$name()))
        }
        get
      },
    }
  };
}

pub(crate) const IHDR_ATTRIBUTES: &[Attribute] = &[
  ihdr_attribute!(width, U32),
  ihdr_attribute!(height, U32),
  ihdr_attribute!(bit_depth, U8),
  ihdr_attribute!(color_type, U8),
  ihdr_attribute!(compression_method, U8),
  ihdr_attribute!(filter_method, U8),
  ihdr_attribute!(interlace_method, U8),
];
