use super::*;

/// The complete `IEND` chunk: zero length, the tag, and the tag's CRC.
///
/// It never varies, so it's built at compile time.
pub const IEND_CHUNK: [u8; 12] = {
  let crc = chunk_crc(PngChunkType::IEND, &[]).to_be_bytes();
  let tag = *PngChunkType::IEND.as_bytes();
  [0, 0, 0, 0, tag[0], tag[1], tag[2], tag[3], crc[0], crc[1], crc[2], crc[3]]
};

#[test]
fn test_iend_chunk_bytes() {
  assert_eq!(IEND_CHUNK, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
}
