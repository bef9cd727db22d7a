use super::*;

use alloc::{vec, vec::Vec};

use crate::PngEncodeError;

fn chunks(png: &[u8]) -> Vec<PngRawChunk<'_>> {
  PngRawChunkIter::new(png).collect()
}

#[test]
fn test_red_pixel_structure() {
  let png = encode_png(&[255, 0, 0, 255], 1, 1).unwrap();
  assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
  assert!(png_framing_is_valid(&png));

  let c = chunks(&png);
  assert_eq!(c.len(), 3);
  assert_eq!(c[0].type_bytes(), *b"IHDR");
  assert_eq!(c[0].data(), &[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]);
  assert_eq!(c[1].type_bytes(), *b"IDAT");
  assert_eq!(
    miniz_oxide::inflate::decompress_to_vec_zlib(c[1].data()).unwrap(),
    vec![0, 255, 0, 0, 255]
  );
  assert_eq!(c[2].type_bytes(), *b"IEND");
  assert!(c.iter().all(|chunk| chunk.crc_is_valid()));
  assert_eq!(&png[png.len() - 12..], &IEND_CHUNK);
}

#[test]
fn test_idat_is_filter_zero_rows() {
  let rgba: Vec<u8> = (0..3 * 2 * 4).map(|i| i as u8).collect();
  let png = encode_png(&rgba, 3, 2).unwrap();
  let idat = miniz_oxide::inflate::decompress_to_vec_zlib(chunks(&png)[1].data()).unwrap();
  assert_eq!(idat.len(), 2 * (3 * 4 + 1));
  assert_eq!(idat[0], 0);
  assert_eq!(&idat[1..13], &rgba[..12]);
  assert_eq!(idat[13], 0);
  assert_eq!(&idat[14..], &rgba[12..]);
}

#[test]
fn test_wrong_channel_count() {
  let rgb = vec![0_u8; 4 * 3 * 3];
  assert_eq!(
    encode_png(&rgb, 4, 3),
    Err(PngEncodeError::SizeMismatch { expected: 4 * 3 * 4, actual: 4 * 3 * 3 })
  );
}

#[test]
fn test_zero_dimensions() {
  assert_eq!(encode_png(&[], 0, 5), Err(PngEncodeError::WidthOrHeightZero));
  assert_eq!(encode_png(&[], 5, 0), Err(PngEncodeError::WidthOrHeightZero));
}

#[test]
fn test_oversized_dimensions() {
  assert_eq!(encode_png(&[], 1 << 31, 1), Err(PngEncodeError::DimensionsTooLarge));
  assert_eq!(encode_png(&[], 1, u32::MAX), Err(PngEncodeError::DimensionsTooLarge));
}

#[test]
fn test_deterministic_output() {
  let rgba: Vec<u8> = (0..16 * 16 * 4).map(|i| (i * 7 % 251) as u8).collect();
  assert_eq!(encode_png(&rgba, 16, 16).unwrap(), encode_png(&rgba, 16, 16).unwrap());
}

#[test]
fn test_compressor_failure_is_surfaced() {
  let failing = |_: &[u8], _: CompressionLevel| -> Result<Vec<u8>, CompressionError> {
    Err(CompressionError("out of budget"))
  };
  let encoder = PngEncoder::new(failing);
  assert_eq!(
    encoder.encode(&[1, 2, 3, 4], 1, 1),
    Err(PngEncodeError::Compression(CompressionError("out of budget")))
  );
}

#[test]
fn test_compressor_sees_level_and_filtered_rows() {
  let checking = |data: &[u8], level: CompressionLevel| -> Result<Vec<u8>, CompressionError> {
    assert_eq!(level.get(), 9);
    assert_eq!(data, &[0, 1, 2, 3, 4]);
    MinizOxide.compress_zlib(data, level)
  };
  let encoder = PngEncoder::new(checking).with_compression_level(CompressionLevel::BEST);
  let png = encoder.encode(&[1, 2, 3, 4], 1, 1).unwrap();
  assert!(png_framing_is_valid(&png));
}

#[test]
fn test_size_checked_before_compression() {
  let never = |_: &[u8], _: CompressionLevel| -> Result<Vec<u8>, CompressionError> {
    panic!("compressor should not run")
  };
  assert!(matches!(
    PngEncoder::new(never).encode(&[0; 7], 1, 2),
    Err(PngEncodeError::SizeMismatch { expected: 8, actual: 7 })
  ));
}

#[test]
fn test_level_zero_still_valid() {
  let rgba = vec![0x80_u8; 5 * 5 * 4];
  let png = PngEncoder::DEFAULT.with_compression_level(CompressionLevel::NONE).encode(&rgba, 5, 5);
  assert!(png_framing_is_valid(&png.unwrap()));
}

#[test]
fn test_framing_check_rejects_extras() {
  let mut png = encode_png(&[1, 2, 3, 4], 1, 1).unwrap();
  png.push(0);
  assert!(!png_framing_is_valid(&png));
  png.pop();
  png[20] ^= 0xFF; // inside the IHDR data
  assert!(!png_framing_is_valid(&png));
}
