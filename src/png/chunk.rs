use super::*;

use alloc::vec::Vec;

use crate::{PngEncodeError, U32BE};

/// The most data bytes a single chunk is allowed to hold (`2^31 - 1`).
pub const MAX_CHUNK_DATA_LEN: usize = i32::MAX as usize;

/// Appends one complete chunk to `out`.
///
/// The output is the data length (big-endian `u32`), the type bytes, the data
/// bytes, and then the [`chunk_crc`] (big-endian `u32`). The length and CRC
/// are always derived from the data given.
///
/// ## Failure
/// * `data` longer than [`MAX_CHUNK_DATA_LEN`].
/// * Allocation failure.
///
/// Nothing is written to `out` on failure.
#[inline]
pub fn write_chunk(
  out: &mut Vec<u8>, chunk_type: PngChunkType, data: &[u8],
) -> Result<(), PngEncodeError> {
  if data.len() > MAX_CHUNK_DATA_LEN {
    return Err(PngEncodeError::ChunkTooLong);
  }
  out.try_reserve(data.len() + 12)?;
  out.extend_from_slice(&U32BE::from_u32(data.len() as u32).to_bytes());
  out.extend_from_slice(chunk_type.as_bytes());
  out.extend_from_slice(data);
  out.extend_from_slice(&U32BE::from_u32(chunk_crc(chunk_type, data)).to_bytes());
  Ok(())
}

/// Like [`write_chunk`], but the chunk goes into a new `Vec`.
#[inline]
pub fn make_chunk(chunk_type: PngChunkType, data: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
  let mut out = Vec::new();
  write_chunk(&mut out, chunk_type, data)?;
  Ok(out)
}

#[test]
fn test_make_chunk_layout() {
  let chunk = make_chunk(PngChunkType::new(*b"teSt"), &[1, 2, 3]).unwrap();
  assert_eq!(chunk.len(), 3 + 12);
  assert_eq!(&chunk[0..4], &[0, 0, 0, 3]);
  assert_eq!(&chunk[4..8], b"teSt");
  assert_eq!(&chunk[8..11], &[1, 2, 3]);
  assert_eq!(&chunk[11..], &crc32(b"teSt\x01\x02\x03").to_be_bytes());
}

#[test]
fn test_empty_iend_chunk_is_twelve_bytes() {
  let chunk = make_chunk(PngChunkType::IEND, &[]).unwrap();
  assert_eq!(chunk.len(), 12);
  assert_eq!(&chunk[0..4], &[0, 0, 0, 0]);
  assert_eq!(&chunk[4..8], b"IEND");
  assert_eq!(&chunk[8..12], &crc32(b"IEND").to_be_bytes());
  assert_eq!(chunk, IEND_CHUNK);
}

#[test]
fn test_write_chunk_appends() {
  let mut out = alloc::vec![9_u8];
  write_chunk(&mut out, PngChunkType::IEND, &[]).unwrap();
  assert_eq!(out[0], 9);
  assert_eq!(&out[1..], &IEND_CHUNK);
}
