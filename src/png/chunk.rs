use super::*;

/// One PNG chunk: a type tag, the data, and the CRC of both.
///
/// The CRC always matches the type and data. Constructors check (or compute)
/// it, and every method that changes the data recomputes it before returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PngChunk {
  ty: ChunkTy,
  data: Vec<u8>,
  crc: u32,
}
impl Debug for PngChunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("crc", &self.crc)
      .finish()
  }
}
impl PngChunk {
  /// Makes a chunk, checking the declared CRC if there is one.
  ///
  /// Pass `None` to have the CRC computed for you.
  ///
  /// ## Failure
  /// * The declared CRC doesn't match the type and data.
  #[inline]
  pub fn new(ty: ChunkTy, data: Vec<u8>, declared_crc: Option<u32>) -> Result<Self, CrcError> {
    let computed = chunk_crc(ty, &data);
    match declared_crc {
      Some(declared) if declared != computed => {
        Err(CrcError { ty, index: None, computed, declared })
      }
      _ => Ok(Self { ty, data, crc: computed }),
    }
  }

  /// Makes a chunk with the CRC computed for you.
  #[inline]
  #[must_use]
  pub fn with_computed_crc(ty: ChunkTy, data: Vec<u8>) -> Self {
    let crc = chunk_crc(ty, &data);
    Self { ty, data, crc }
  }

  /// The image end marker.
  #[inline]
  #[must_use]
  pub fn iend() -> Self {
    Self::with_computed_crc(ChunkTy::IEND, Vec::new())
  }

  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  #[inline]
  #[must_use]
  pub const fn crc(&self) -> u32 {
    self.crc
  }
  #[inline]
  #[must_use]
  pub fn into_data(self) -> Vec<u8> {
    self.data
  }

  /// How this chunk's type is handled, see [`REGISTRY`].
  #[inline]
  #[must_use]
  pub fn kind(&self) -> ChunkKind {
    ChunkKind::of(self.ty)
  }

  /// The named attributes this chunk's kind exposes.
  #[inline]
  #[must_use]
  pub fn attributes(&self) -> &'static [Attribute] {
    self.kind().attributes()
  }

  /// Replaces the data, updating the CRC.
  #[inline]
  pub fn set_data(&mut self, data: Vec<u8>) {
    self.data = data;
    self.crc = chunk_crc(self.ty, &self.data);
  }

  /// Runs `op` on the data, then updates the CRC.
  #[inline]
  pub fn edit_data<T>(&mut self, op: impl FnOnce(&mut Vec<u8>) -> T) -> T {
    let out = op(&mut self.data);
    self.crc = chunk_crc(self.ty, &self.data);
    out
  }

  /// Number of bytes this chunk takes up once framed.
  #[inline]
  #[must_use]
  pub fn framed_len(&self) -> usize {
    4 + 4 + self.data.len() + 4
  }

  /// Appends the chunk as it appears in a PNG: length, type, data, CRC.
  ///
  /// PNG limits chunk data to `i32::MAX` bytes; anything longer can't be
  /// framed correctly.
  #[inline]
  pub fn write_framed(&self, out: &mut Vec<u8>) {
    debug_assert!(self.data.len() <= i32::MAX as usize);
    out.reserve(self.framed_len());
    out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
    out.extend_from_slice(self.ty.as_bytes());
    out.extend_from_slice(&self.data);
    out.extend_from_slice(&self.crc.to_be_bytes());
  }

  #[inline]
  #[must_use]
  pub fn framed_bytes(&self) -> Vec<u8> {
    let mut out = Vec::new();
    self.write_framed(&mut out);
    out
  }
}

/// An entry in a [`Png`]'s record list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PngRecord {
  /// A normal chunk.
  Chunk(PngChunk),
  /// Bytes found after `IEND`.
  ///
  /// These aren't a chunk at all, they have no length, type, or CRC. They're
  /// written back out exactly as they were read.
  Tail(Vec<u8>),
}
impl From<PngChunk> for PngRecord {
  #[inline]
  #[must_use]
  fn from(chunk: PngChunk) -> Self {
    Self::Chunk(chunk)
  }
}
impl PngRecord {
  #[inline]
  #[must_use]
  pub const fn as_chunk(&self) -> Option<&PngChunk> {
    match self {
      Self::Chunk(chunk) => Some(chunk),
      Self::Tail(_) => None,
    }
  }
  #[inline]
  #[must_use]
  pub fn as_chunk_mut(&mut self) -> Option<&mut PngChunk> {
    match self {
      Self::Chunk(chunk) => Some(chunk),
      Self::Tail(_) => None,
    }
  }
  #[inline]
  #[must_use]
  pub const fn is_tail(&self) -> bool {
    matches!(self, Self::Tail(_))
  }
  /// The chunk type, if this is a chunk.
  #[inline]
  #[must_use]
  pub fn ty(&self) -> Option<ChunkTy> {
    self.as_chunk().map(PngChunk::ty)
  }

  /// Appends the record's bytes as they appear in a PNG.
  #[inline]
  pub fn write_to_vec(&self, out: &mut Vec<u8>) {
    match self {
      Self::Chunk(chunk) => chunk.write_framed(out),
      Self::Tail(bytes) => out.extend_from_slice(bytes),
    }
  }
}
