use super::*;

/// The bit-reversed form of the CRC-32 polynomial (ISO 3309, as used by zlib
/// and PNG).
pub const CRC_POLYNOMIAL: u32 = 0xEDB8_8320;

/// The CRC-32 lookup table.
///
/// Built at compile time, so it's never mutated and any number of threads can
/// read it without synchronization.
pub const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = CRC_POLYNOMIAL ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs more bytes through a CRC accumulator.
///
/// The accumulator starts at `u32::MAX`, and the final CRC is the accumulator
/// xor `u32::MAX`. Use this when the checksummed bytes aren't in one slice.
#[inline]
#[must_use]
pub const fn update_crc(mut crc: u32, bytes: &[u8]) -> u32 {
  let mut i = 0;
  while i < bytes.len() {
    crc = CRC_TABLE[((crc ^ bytes[i] as u32) & 0xFF) as usize] ^ (crc >> 8);
    i += 1;
  }
  crc
}

/// Computes the CRC-32 of some bytes.
///
/// ```
/// # use rawpng::png::crc32;
/// assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub const fn crc32(bytes: &[u8]) -> u32 {
  update_crc(u32::MAX, bytes) ^ u32::MAX
}

/// The CRC stored at the end of a chunk: it covers the type bytes and then
/// the data bytes, but not the length.
#[inline]
#[must_use]
pub const fn chunk_crc(chunk_type: PngChunkType, data: &[u8]) -> u32 {
  update_crc(update_crc(u32::MAX, chunk_type.as_bytes()), data) ^ u32::MAX
}
