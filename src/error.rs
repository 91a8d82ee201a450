use core::fmt;

use crate::png::ChunkTy;

/// Shorthand for results with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;

/// An error from the `pngchunk` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PngError {
  /// The bytes don't have the shape of a PNG.
  Format(FormatError),

  /// A chunk's declared CRC doesn't match its type and data.
  Crc(CrcError),

  /// The underlying reader or writer failed.
  #[cfg(feature = "std")]
  Io(std::io::ErrorKind),
}

/// The ways that PNG framing and layout can go wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
  /// The first 8 bytes are not the PNG signature.
  BadSignature,

  /// The data ended partway through a chunk.
  Truncated {
    /// Index (within the chunk list) of the chunk being read.
    chunk_index: usize,
    /// Which part of the chunk was cut short.
    field: ChunkField,
  },

  /// The first chunk is not `IHDR`.
  MissingHeader,

  /// The `IHDR` data is not exactly 13 bytes.
  MalformedHeader,

  /// Only compression method 0 (zlib) exists.
  UnsupportedCompression(u8),

  /// The concatenated `IDAT` data is not a valid zlib stream.
  Decompress,

  /// A chunk appears after `IEND`.
  ChunkAfterEnd {
    /// Index of the offending record.
    index: usize,
  },

  /// Trailing data that isn't the last record directly after `IEND`.
  MisplacedTail {
    /// Index of the offending record.
    index: usize,
  },
}

/// The four parts of a framed chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkField {
  Length,
  Type,
  Data,
  Crc,
}

/// A chunk's declared CRC didn't match the CRC computed from its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcError {
  /// The type of the chunk.
  pub ty: ChunkTy,
  /// Position in the chunk list, when the chunk came from parsing.
  pub index: Option<usize>,
  /// The CRC of the chunk's type and data.
  pub computed: u32,
  /// The CRC the chunk claimed to have.
  pub declared: u32,
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Format(e) => fmt::Display::fmt(e, f),
      Self::Crc(e) => fmt::Display::fmt(e, f),
      #[cfg(feature = "std")]
      Self::Io(kind) => write!(f, "i/o error: {kind}"),
    }
  }
}

impl fmt::Display for FormatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::BadSignature => write!(f, "data does not start with the PNG signature"),
      Self::Truncated { chunk_index, field } => {
        write!(f, "data ends inside the {field:?} field of chunk {chunk_index}")
      }
      Self::MissingHeader => write!(f, "expected the first chunk to be IHDR"),
      Self::MalformedHeader => write!(f, "IHDR data must be exactly 13 bytes"),
      Self::UnsupportedCompression(m) => write!(f, "unsupported compression method {m}"),
      Self::Decompress => write!(f, "IDAT data is not a valid zlib stream"),
      Self::ChunkAfterEnd { index } => write!(f, "record {index} comes after IEND"),
      Self::MisplacedTail { index } => {
        write!(f, "trailing data at record {index} does not directly follow IEND")
      }
    }
  }
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} chunk ", self.ty)?;
    if let Some(index) = self.index {
      write!(f, "(index {index}) ")?;
    }
    write!(f, "has CRC {:#010X}, computed {:#010X}", self.declared, self.computed)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PngError {}
#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
#[cfg(feature = "std")]
impl std::error::Error for CrcError {}

impl From<FormatError> for PngError {
  #[inline]
  fn from(e: FormatError) -> Self {
    Self::Format(e)
  }
}
impl From<CrcError> for PngError {
  #[inline]
  fn from(e: CrcError) -> Self {
    Self::Crc(e)
  }
}
#[cfg(feature = "std")]
impl From<std::io::Error> for PngError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e.kind())
  }
}
