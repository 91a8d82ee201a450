use super::*;

/// `gAMA` stores gamma as an integer: the ratio times this much.
pub const GAMMA_SCALE: f64 = 100_000.0;

/// Image gamma, as a mutable view over a `gAMA` chunk.
///
/// Writing through the view recomputes the chunk's CRC.
///
/// Spec: [gAMA](https://www.w3.org/TR/png/#11gAMA)
#[derive(Debug)]
#[allow(nonstandard_style)]
pub struct gAMA<'c>(&'c mut PngChunk);
impl gAMA<'_> {
  /// Length of `gAMA` chunk data.
  pub const DATA_LEN: usize = 4;

  /// Builds a fresh `gAMA` chunk holding the given ratio.
  #[inline]
  #[must_use]
  pub fn new_chunk(ratio: f64) -> PngChunk {
    PngChunk::with_computed_crc(ChunkTy::gAMA, quantize(ratio).to_be_bytes().to_vec())
  }

  /// The stored integer, which is the gamma times 100,000.
  #[inline]
  #[must_use]
  pub fn raw(&self) -> u32 {
    let field: &U32BE = bytemuck::from_bytes(self.0.data());
    field.to_u32()
  }

  /// Replaces the stored integer.
  #[inline]
  pub fn set_raw(&mut self, raw: u32) {
    self.0.edit_data(|data| {
      let field: &mut U32BE = bytemuck::from_bytes_mut(data.as_mut_slice());
      *field = U32BE::from_u32(raw);
    });
  }

  #[inline]
  #[must_use]
  pub fn get_gamma(&self) -> f64 {
    f64::from(self.raw()) / GAMMA_SCALE
  }

  /// Stores `ratio` rounded to the nearest 1/100,000.
  ///
  /// Negative and NaN ratios store 0, and ratios too big for the field store
  /// `u32::MAX`.
  #[inline]
  pub fn set_gamma(&mut self, ratio: f64) {
    self.set_raw(quantize(ratio));
  }
}

/// Rounds half up; the `as` cast saturates at both ends and sends NaN to 0.
#[inline]
fn quantize(ratio: f64) -> u32 {
  (ratio * GAMMA_SCALE + 0.5) as u32
}

impl PngChunk {
  /// Gets a gamma view of this chunk.
  ///
  /// `None` if this isn't a `gAMA`, or if the data isn't exactly 4 bytes.
  #[inline]
  #[must_use]
  pub fn to_gama_mut(&mut self) -> Option<gAMA<'_>> {
    if self.ty() == ChunkTy::gAMA && self.data().len() == gAMA::DATA_LEN {
      Some(gAMA(self))
    } else {
      None
    }
  }

  /// The gamma of a `gAMA` chunk.
  #[inline]
  #[must_use]
  pub fn gamma(&self) -> Option<f64> {
    if self.ty() != ChunkTy::gAMA {
      return None;
    }
    let field: &U32BE = bytemuck::try_from_bytes(self.data()).ok()?;
    Some(f64::from(field.to_u32()) / GAMMA_SCALE)
  }
}

pub(crate) const GAMA_ATTRIBUTES: &[Attribute] = &[Attribute {
  name: "gamma",
  get: {
    fn get(chunk: &PngChunk) -> Option<AttrValue> {
      chunk.gamma().map(AttrValue::Ratio)
    }
    get
  },
}];
