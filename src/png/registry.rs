//! Which chunk types get special treatment.
//!
//! Every chunk type that this crate knows how to interpret has one entry in
//! [`REGISTRY`]. Any type not listed there is [`ChunkKind::Other`] and is
//! carried around as opaque bytes. Adding support for a new chunk type means
//! adding a variant and a table entry.

use super::*;

/// The closed set of chunk types this crate interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub enum ChunkKind {
  /// Image Header
  IHDR,
  /// Image Gamma
  gAMA,
  /// Image Data
  IDAT,
  /// Image End
  IEND,
  /// Anything else
  Other,
}

/// A value read out of a chunk by an [`Attribute`] getter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrValue {
  U8(u8),
  U32(u32),
  /// A fixed point value that's been scaled back to a float.
  Ratio(f64),
}
impl core::fmt::Display for AttrValue {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::U8(u) => core::fmt::Display::fmt(u, f),
      Self::U32(u) => core::fmt::Display::fmt(u, f),
      Self::Ratio(r) => core::fmt::Display::fmt(r, f),
    }
  }
}

/// A named, read-only field of a chunk.
///
/// The getter gives `None` when the chunk's data is the wrong size to hold the
/// field.
#[derive(Clone, Copy)]
pub struct Attribute {
  pub name: &'static str,
  pub get: fn(&PngChunk) -> Option<AttrValue>,
}
impl core::fmt::Debug for Attribute {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Attribute").field(&self.name).finish()
  }
}

/// One row of the [`REGISTRY`].
#[derive(Debug, Clone, Copy)]
pub struct ChunkKindEntry {
  pub ty: ChunkTy,
  pub kind: ChunkKind,
  pub attributes: &'static [Attribute],
}

/// All the specially handled chunk types.
pub static REGISTRY: &[ChunkKindEntry] = &[
  ChunkKindEntry { ty: ChunkTy::IHDR, kind: ChunkKind::IHDR, attributes: IHDR_ATTRIBUTES },
  ChunkKindEntry { ty: ChunkTy::gAMA, kind: ChunkKind::gAMA, attributes: GAMA_ATTRIBUTES },
  ChunkKindEntry { ty: ChunkTy::IDAT, kind: ChunkKind::IDAT, attributes: &[] },
  ChunkKindEntry { ty: ChunkTy::IEND, kind: ChunkKind::IEND, attributes: &[] },
];

impl ChunkKind {
  /// Looks up the kind for a chunk type, defaulting to `Other`.
  #[inline]
  #[must_use]
  pub fn of(ty: ChunkTy) -> Self {
    entry_for(ty).map_or(Self::Other, |entry| entry.kind)
  }

  /// The attributes that chunks of this kind expose.
  #[inline]
  #[must_use]
  pub fn attributes(self) -> &'static [Attribute] {
    match REGISTRY.iter().find(|entry| entry.kind == self) {
      Some(entry) => entry.attributes,
      None => &[],
    }
  }
}

#[inline]
fn entry_for(ty: ChunkTy) -> Option<&'static ChunkKindEntry> {
  REGISTRY.iter().find(|entry| entry.ty == ty)
}
