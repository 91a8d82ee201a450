use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes start with the PNG signature.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// A whole PNG, held as its list of records.
///
/// The record list is public, you can insert, remove, and reorder records as
/// you like. The CRC of each chunk stays correct on its own, but nothing stops
/// you from making a nonsense layout; use [`check_structure`] if you care.
///
/// [`check_structure`]: Png::check_structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Png {
  pub records: Vec<PngRecord>,
}

impl Png {
  /// A PNG with no records at all.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { records: Vec::new() }
  }

  /// Parses a full PNG datastream.
  ///
  /// Reading stops after `IEND`; any bytes after that are kept as a single
  /// [`PngRecord::Tail`]. If the data runs out cleanly between two chunks
  /// parsing also stops, even without an `IEND`.
  ///
  /// ## Failure
  /// * The signature is wrong.
  /// * The data ends partway through a chunk.
  /// * A chunk's CRC is wrong.
  /// * The source itself fails.
  pub fn parse<S: ByteSource>(mut src: S) -> PngResult<Self> {
    let mut signature = [0_u8; 8];
    if src.read_up_to(&mut signature)? != signature.len() || signature != PNG_SIGNATURE {
      return Err(FormatError::BadSignature.into());
    }

    let mut records = Vec::new();
    loop {
      let chunk_index = records.len();
      let truncated =
        |field| PngError::Format(FormatError::Truncated { chunk_index, field });

      let mut len_bytes = [0_u8; 4];
      match src.read_up_to(&mut len_bytes)? {
        0 => break,
        4 => (),
        _ => return Err(truncated(ChunkField::Length)),
      }
      let len = u32::from_be_bytes(len_bytes) as usize;

      let mut ty_bytes = [0_u8; 4];
      if src.read_up_to(&mut ty_bytes)? != 4 {
        return Err(truncated(ChunkField::Type));
      }
      let ty = ChunkTy(ty_bytes);

      let mut data = Vec::new();
      if src.read_into(len, &mut data)? != len {
        return Err(truncated(ChunkField::Data));
      }

      let mut crc_bytes = [0_u8; 4];
      if src.read_up_to(&mut crc_bytes)? != 4 {
        return Err(truncated(ChunkField::Crc));
      }
      let declared = u32::from_be_bytes(crc_bytes);

      let chunk = PngChunk::new(ty, data, Some(declared))
        .map_err(|e| CrcError { index: Some(chunk_index), ..e })?;
      trace!("chunk {chunk_index}: {:?}", chunk);
      records.push(PngRecord::Chunk(chunk));

      if ty == ChunkTy::IEND {
        let mut tail = Vec::new();
        src.read_rest(&mut tail)?;
        if !tail.is_empty() {
          debug!("{} bytes of trailing data after IEND", tail.len());
          records.push(PngRecord::Tail(tail));
        }
        break;
      }
    }
    Ok(Self { records })
  }

  /// Parses a PNG held in memory.
  #[inline]
  pub fn from_png_bytes(bytes: &[u8]) -> PngResult<Self> {
    Self::parse(bytes)
  }

  /// Parses a PNG from a reader.
  ///
  /// The reader is read front to back and is not closed.
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  #[inline]
  pub fn read_from<R: std::io::Read>(reader: R) -> PngResult<Self> {
    Self::parse(IoSource(reader))
  }

  /// The full PNG datastream: signature followed by every record.
  #[must_use]
  pub fn to_png_bytes(&self) -> Vec<u8> {
    let total = PNG_SIGNATURE.len()
      + self
        .records
        .iter()
        .map(|record| match record {
          PngRecord::Chunk(chunk) => chunk.framed_len(),
          PngRecord::Tail(bytes) => bytes.len(),
        })
        .sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&PNG_SIGNATURE);
    for record in &self.records {
      record.write_to_vec(&mut out);
    }
    out
  }

  /// Writes the full PNG datastream to a writer.
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  pub fn write_to<W: std::io::Write>(&self, mut writer: W) -> PngResult<()> {
    writer.write_all(&PNG_SIGNATURE)?;
    let mut buf = Vec::new();
    for record in &self.records {
      buf.clear();
      record.write_to_vec(&mut buf);
      writer.write_all(&buf)?;
    }
    writer.flush()?;
    Ok(())
  }

  /// All the chunks, skipping any trailing data.
  #[inline]
  pub fn chunks(&self) -> impl Iterator<Item = &PngChunk> + '_ {
    self.records.iter().filter_map(PngRecord::as_chunk)
  }

  #[inline]
  pub fn chunks_mut(&mut self) -> impl Iterator<Item = &mut PngChunk> + '_ {
    self.records.iter_mut().filter_map(PngRecord::as_chunk_mut)
  }

  /// The header, if the first record is a well formed `IHDR`.
  #[inline]
  #[must_use]
  pub fn header(&self) -> Option<&IHDR> {
    self.records.first()?.as_chunk()?.to_ihdr()
  }

  /// The bytes found after `IEND`, if any.
  #[inline]
  #[must_use]
  pub fn tail(&self) -> Option<&[u8]> {
    self.records.iter().find_map(|record| match record {
      PngRecord::Tail(bytes) => Some(bytes.as_slice()),
      PngRecord::Chunk(_) => None,
    })
  }

  /// The gamma of the first `gAMA` chunk.
  #[inline]
  #[must_use]
  pub fn gamma(&self) -> Option<f64> {
    self.chunks().find_map(PngChunk::gamma)
  }

  /// Makes the image declare the given gamma.
  ///
  /// Every `gAMA` chunk is set to `ratio` (one with the wrong data length gets
  /// its data replaced). If there are none, a new `gAMA` chunk is inserted
  /// right after the header, at index 1.
  ///
  /// Returns how many chunks were set or inserted.
  pub fn ensure_gamma(&mut self, ratio: f64) -> usize {
    let mut count = 0;
    for chunk in self.chunks_mut().filter(|chunk| chunk.ty() == ChunkTy::gAMA) {
      if chunk.data().len() != gAMA::DATA_LEN {
        chunk.set_data(vec![0; gAMA::DATA_LEN]);
      }
      if let Some(mut gama) = chunk.to_gama_mut() {
        gama.set_gamma(ratio);
        count += 1;
      }
    }
    if count == 0 {
      let index = self.records.len().min(1);
      self.records.insert(index, gAMA::new_chunk(ratio).into());
      count = 1;
      debug!("inserted gAMA chunk at index {index}");
    }
    debug!("set gamma to {ratio} in {count} chunk(s)");
    count
  }

  /// Decompresses the image data.
  ///
  /// All `IDAT` chunks are joined in order and inflated as one zlib stream.
  /// The output is still filtered (and possibly interlaced) scanline data.
  ///
  /// ## Failure
  /// * The first record isn't a well formed `IHDR`.
  /// * The header names a compression method other than zlib.
  /// * The joined data isn't valid zlib.
  pub fn decode_raster_payload(&self) -> PngResult<Vec<u8>> {
    let header = match self.records.first() {
      Some(PngRecord::Chunk(chunk)) if chunk.ty() == ChunkTy::IHDR => chunk,
      _ => return Err(FormatError::MissingHeader.into()),
    };
    let ihdr = header.to_ihdr().ok_or(FormatError::MalformedHeader)?;
    if ihdr.compression_method() != COMPRESSION_METHOD_ZLIB {
      return Err(FormatError::UnsupportedCompression(ihdr.compression_method()).into());
    }
    let mut zlib = Vec::new();
    for idat in self.chunks().filter(|chunk| chunk.ty() == ChunkTy::IDAT) {
      zlib.extend_from_slice(idat.data());
    }
    debug!("inflating {} bytes of IDAT data", zlib.len());
    miniz_oxide::inflate::decompress_to_vec_zlib(&zlib)
      .map_err(|_| PngError::Format(FormatError::Decompress))
  }

  /// Checks the record layout.
  ///
  /// * The first record must be an `IHDR` chunk.
  /// * Nothing may follow `IEND` except one final block of trailing data.
  /// * Trailing data may only appear directly after `IEND`.
  pub fn check_structure(&self) -> PngResult<()> {
    match self.records.first() {
      Some(PngRecord::Chunk(chunk)) if chunk.ty() == ChunkTy::IHDR => (),
      _ => return Err(FormatError::MissingHeader.into()),
    }
    let mut seen_end = false;
    for (index, record) in self.records.iter().enumerate() {
      match record {
        PngRecord::Chunk(_) if seen_end => {
          return Err(FormatError::ChunkAfterEnd { index }.into());
        }
        PngRecord::Chunk(chunk) => seen_end = chunk.ty() == ChunkTy::IEND,
        PngRecord::Tail(_) => {
          let after_end = index > 0 && self.records[index - 1].ty() == Some(ChunkTy::IEND);
          if !after_end || index + 1 != self.records.len() {
            return Err(FormatError::MisplacedTail { index }.into());
          }
        }
      }
    }
    Ok(())
  }
}
