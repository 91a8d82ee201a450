use pngchunk::{png::*, ChunkField, FormatError, PngError};

/// Frames a chunk by hand, with whatever CRC we're told to use.
fn raw_chunk(ty: &[u8; 4], data: &[u8], crc: u32) -> Vec<u8> {
  let mut out = Vec::new();
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&crc.to_be_bytes());
  out
}

fn good_chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
  raw_chunk(ty, data, chunk_crc(ChunkTy(*ty), data))
}

const IHDR_1X1_RGB8: [u8; 13] = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];

/// One red pixel: a filter byte then RGB.
const PIXEL_ROW: [u8; 4] = [0, 255, 0, 0];

fn idat_data() -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(&PIXEL_ROW, 6)
}

/// Signature, IHDR, IDAT, IEND, all built by hand.
fn minimal_png_bytes() -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  out.extend(good_chunk(b"IHDR", &IHDR_1X1_RGB8));
  out.extend(good_chunk(b"IDAT", &idat_data()));
  out.extend(good_chunk(b"IEND", &[]));
  out
}

#[test]
fn test_minimal_png() {
  let png = Png::from_png_bytes(&minimal_png_bytes()).unwrap();
  assert_eq!(png.records.len(), 3);
  let ihdr = png.header().unwrap();
  assert_eq!(ihdr.width(), 1);
  assert_eq!(ihdr.height(), 1);
  assert_eq!(ihdr.bit_depth(), 8);
  assert_eq!(ihdr.color_type(), 2);
  assert_eq!(png.records[1].ty(), Some(ChunkTy::IDAT));
  assert_eq!(png.records[2].ty(), Some(ChunkTy::IEND));
  assert_eq!(png.tail(), None);
  assert_eq!(png.check_structure(), Ok(()));
  assert_eq!(png.to_png_bytes(), minimal_png_bytes());
}

#[test]
fn test_trailing_bytes_are_kept() {
  let mut bytes = minimal_png_bytes();
  bytes.extend_from_slice(&[1, 2, 3, 4, 5]);
  let png = Png::from_png_bytes(&bytes).unwrap();
  assert_eq!(png.records.len(), 4);
  assert_eq!(png.records[3], PngRecord::Tail(vec![1, 2, 3, 4, 5]));
  assert!(png.records[3].as_chunk().is_none());
  assert_eq!(png.tail(), Some(&[1, 2, 3, 4, 5][..]));
  assert_eq!(png.to_png_bytes(), bytes);
}

#[test]
fn test_random_trailing_bytes_are_kept() {
  for n in [1, 2, 7, 12, 100, 4096] {
    // trailing data that itself looks like chunks must not be parsed either
    let tail = if n == 12 { good_chunk(b"IEND", &[]) } else { super::rand_bytes(n) };
    let mut bytes = minimal_png_bytes();
    bytes.extend_from_slice(&tail);
    let png = Png::from_png_bytes(&bytes).unwrap();
    assert_eq!(png.tail(), Some(tail.as_slice()));
    let out = png.to_png_bytes();
    assert_eq!(out, bytes);
    assert!(out.ends_with(&tail));
  }
}

#[test]
fn test_flipped_idat_byte_is_crc_error() {
  let mut bytes = minimal_png_bytes();
  // signature, framed IHDR, then the IDAT length and type
  let first_idat_data_byte = 8 + 25 + 8;
  bytes[first_idat_data_byte] ^= 0x01;
  match Png::from_png_bytes(&bytes) {
    Err(PngError::Crc(e)) => {
      assert_eq!(e.ty, ChunkTy::IDAT);
      assert_eq!(e.index, Some(1));
      assert_ne!(e.computed, e.declared);
    }
    other => panic!("expected a CRC error, got {other:?}"),
  }
}

#[test]
fn test_gamma_inserted_after_header() {
  let mut png = Png::from_png_bytes(&minimal_png_bytes()).unwrap();
  assert_eq!(png.gamma(), None);
  assert_eq!(png.ensure_gamma(0.01515), 1);
  assert_eq!(png.records.len(), 4);
  assert_eq!(png.records[0].ty(), Some(ChunkTy::IHDR));
  let gama = png.records[1].as_chunk_mut().unwrap();
  assert_eq!(gama.kind(), ChunkKind::gAMA);
  let view = gama.to_gama_mut().unwrap();
  assert!((view.get_gamma() - 0.01515).abs() < 1e-5);

  // the edited image parses again, CRCs and all
  let again = Png::from_png_bytes(&png.to_png_bytes()).unwrap();
  assert_eq!(again, png);
  assert!((again.gamma().unwrap() - 0.01515).abs() < 1e-5);

  // a second call edits the chunk in place
  assert_eq!(png.ensure_gamma(2.2), 1);
  assert_eq!(png.records.len(), 4);
  assert!((png.gamma().unwrap() - 2.2).abs() < 1e-5);
}

#[test]
fn test_bad_signature() {
  let mut bytes = minimal_png_bytes();
  bytes[1] = b'X';
  assert_eq!(Png::from_png_bytes(&bytes), Err(PngError::Format(FormatError::BadSignature)));
  assert_eq!(Png::from_png_bytes(&[]), Err(PngError::Format(FormatError::BadSignature)));
}

#[test]
fn test_length_past_end_is_truncation() {
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(good_chunk(b"IHDR", &IHDR_1X1_RGB8));
  // claims 100 bytes of data, but only 10 follow
  bytes.extend_from_slice(&100_u32.to_be_bytes());
  bytes.extend_from_slice(b"IDAT");
  bytes.extend_from_slice(&[0; 10]);
  assert_eq!(
    Png::from_png_bytes(&bytes),
    Err(PngError::Format(FormatError::Truncated { chunk_index: 1, field: ChunkField::Data }))
  );
}

#[test]
fn test_huge_length_from_reader_is_truncation() {
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend_from_slice(&u32::MAX.to_be_bytes());
  bytes.extend_from_slice(b"IDAT");
  bytes.extend_from_slice(&[0; 3]);
  assert_eq!(
    Png::read_from(std::io::Cursor::new(bytes)),
    Err(PngError::Format(FormatError::Truncated { chunk_index: 0, field: ChunkField::Data }))
  );
}

#[test]
fn test_decode_raster_payload() {
  let png = Png::from_png_bytes(&minimal_png_bytes()).unwrap();
  assert_eq!(png.decode_raster_payload().unwrap(), PIXEL_ROW);
}

#[test]
fn test_decode_split_idat() {
  let raw: Vec<u8> = (0..3000_u32).map(|i| (i * 7 % 251) as u8).collect();
  let zlib = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 1);
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(good_chunk(b"IHDR", &[0, 0, 3, 231, 0, 0, 0, 1, 8, 0, 0, 0, 0]));
  bytes.extend(good_chunk(b"tEXt", b"Comment\0split across chunks"));
  for part in zlib.chunks(17) {
    bytes.extend(good_chunk(b"IDAT", part));
  }
  bytes.extend(good_chunk(b"IEND", &[]));
  let png = Png::from_png_bytes(&bytes).unwrap();
  assert!(png.chunks().filter(|c| c.ty() == ChunkTy::IDAT).count() > 1);
  assert_eq!(png.decode_raster_payload().unwrap(), raw);
}

#[test]
fn test_decode_unsupported_compression() {
  let mut ihdr = IHDR_1X1_RGB8;
  ihdr[10] = 1;
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(good_chunk(b"IHDR", &ihdr));
  bytes.extend(good_chunk(b"IDAT", &idat_data()));
  bytes.extend(good_chunk(b"IEND", &[]));
  let png = Png::from_png_bytes(&bytes).unwrap();
  assert_eq!(
    png.decode_raster_payload(),
    Err(PngError::Format(FormatError::UnsupportedCompression(1)))
  );
}

#[test]
fn test_unknown_chunks_survive_edits() {
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend(good_chunk(b"IHDR", &IHDR_1X1_RGB8));
  bytes.extend(good_chunk(b"prVt", &[0xDE, 0xAD, 0xBE, 0xEF]));
  bytes.extend(good_chunk(b"IDAT", &idat_data()));
  bytes.extend(good_chunk(b"IEND", &[]));
  let mut png = Png::from_png_bytes(&bytes).unwrap();
  assert_eq!(png.records[1].as_chunk().unwrap().kind(), ChunkKind::Other);
  png.ensure_gamma(1.0);
  let out = png.to_png_bytes();
  // everything but the new gAMA chunk is untouched
  let gama = gAMA::new_chunk(1.0).framed_bytes();
  let split = 8 + 25;
  assert_eq!(&out[..split], &bytes[..split]);
  assert_eq!(&out[split..split + gama.len()], gama.as_slice());
  assert_eq!(&out[split + gama.len()..], &bytes[split..]);
}

#[test]
fn test_reader_and_writer() {
  let mut bytes = minimal_png_bytes();
  bytes.extend_from_slice(b"trailing");
  let png = Png::read_from(std::io::Cursor::new(&bytes)).unwrap();
  assert_eq!(png, Png::from_png_bytes(&bytes).unwrap());
  let mut out = Vec::new();
  png.write_to(&mut out).unwrap();
  assert_eq!(out, bytes);
}

#[test]
fn test_random_data_never_panics() {
  for _ in 0..50 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(256));
    let _ = Png::from_png_bytes(&v);
    let _ = Png::from_png_bytes(&super::rand_bytes(64));
  }
  // every prefix of a good file either parses or errors, never panics
  let bytes = minimal_png_bytes();
  for cut in 0..bytes.len() {
    if let Ok(png) = Png::from_png_bytes(&bytes[..cut]) {
      assert_eq!(png.to_png_bytes(), &bytes[..cut]);
    }
  }
}

#[test]
fn test_summary_of_parsed_png() {
  let mut png = Png::from_png_bytes(&minimal_png_bytes()).unwrap();
  png.ensure_gamma(0.45455);
  png.records.push(PngRecord::Tail(vec![0; 3]));
  let text = png.to_string();
  assert!(text.starts_with("  type   data_len              crc\n  IHDR         13 "));
  assert!(text.contains("\n                  width:          1\n"));
  assert!(text.contains("\n                  gamma:    0.45455\n  IDAT "));
  assert!(text.ends_with("\n(tail)          3                -"));
}

#[cfg(feature = "cli")]
mod cli {
  use super::*;
  use std::process::Command;

  fn write_temp(name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("pngchunk-{}-{name}", std::process::id()));
    std::fs::write(&path, bytes).unwrap();
    path
  }

  #[test]
  fn test_cli_prints_summary() {
    let path = write_temp("good.png", &minimal_png_bytes());
    let out = Command::new(env!("CARGO_BIN_EXE_pngchunk")).arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("IHDR"));
    assert!(stdout.contains("IEND"));
  }

  #[test]
  fn test_cli_fails_on_bad_crc() {
    let mut bytes = minimal_png_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x55;
    let path = write_temp("bad.png", &bytes);
    let out = Command::new(env!("CARGO_BIN_EXE_pngchunk")).arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr).unwrap().contains("IEND chunk"));
  }
}
