use super::*;

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  type_: [u8; 4],
  data: &'b [u8],
  declared_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("type_", &self.chunk_type())
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl<'b> PngRawChunk<'b> {
  /// The chunk's type, or `None` if the tag isn't four ASCII letters.
  #[inline]
  #[must_use]
  pub fn chunk_type(&self) -> Option<PngChunkType> {
    PngChunkType::try_new(self.type_)
  }
  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn type_bytes(&self) -> [u8; 4] {
    self.type_
  }
  /// The chunk's data bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC stored in the stream.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC computed from the tag and data.
  #[inline]
  #[must_use]
  pub const fn actual_crc(&self) -> u32 {
    update_crc(update_crc(u32::MAX, &self.type_), self.data) ^ u32::MAX
  }
  /// If the declared and computed CRC values match.
  #[inline]
  #[must_use]
  pub const fn crc_is_valid(&self) -> bool {
    self.declared_crc == self.actual_crc()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Iteration stops at the first chunk that doesn't fit in the remaining
/// bytes. Any input is fine, garbage gives you garbage chunks (or none), but
/// never a panic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(&'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will remove the PNG signature automatically.
  ///
  /// The signature isn't checked, use [`is_png_header_correct`] for that.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let (len_bytes, rest) = split_array::<4>(self.0)?;
    let (type_, rest) = split_array::<4>(rest)?;
    let chunk_len = u32::from_be_bytes(len_bytes) as usize;
    if rest.len() < chunk_len {
      self.0 = &[];
      return None;
    }
    let (data, rest) = rest.split_at(chunk_len);
    let (crc_bytes, rest) = split_array::<4>(rest)?;
    self.0 = rest;
    Some(PngRawChunk { type_, data, declared_crc: u32::from_be_bytes(crc_bytes) })
  }
}

#[inline]
fn split_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    Some((head.try_into().ok()?, tail))
  } else {
    None
  }
}

/// Checks that `bytes` is framed the way this crate writes PNGs: the
/// signature, then `IHDR`, a single `IDAT`, and `IEND`, each with a correct
/// CRC, and nothing after `IEND`.
///
/// This doesn't decompress or otherwise look inside the image data.
#[must_use]
pub fn png_framing_is_valid(bytes: &[u8]) -> bool {
  if !is_png_header_correct(bytes) {
    return false;
  }
  let expected = [PngChunkType::IHDR, PngChunkType::IDAT, PngChunkType::IEND];
  let mut consumed = PNG_SIGNATURE.len();
  let mut count = 0;
  for (i, chunk) in PngRawChunkIter::new(bytes).enumerate() {
    if expected.get(i).copied() != chunk.chunk_type() || !chunk.crc_is_valid() {
      return false;
    }
    if i == 0 && IHDR::try_from_bytes(chunk.data()).is_none() {
      return false;
    }
    consumed += chunk.data().len() + 12;
    count += 1;
  }
  count == expected.len() && consumed == bytes.len()
}

#[test]
fn test_raw_chunk_iter_reads_iend() {
  let mut bytes = [0_u8; 20];
  bytes[..8].copy_from_slice(&PNG_SIGNATURE);
  bytes[8..].copy_from_slice(&IEND_CHUNK);
  let mut it = PngRawChunkIter::new(&bytes);
  let iend = it.next().unwrap();
  assert_eq!(iend.chunk_type(), Some(PngChunkType::IEND));
  assert!(iend.data().is_empty());
  assert!(iend.crc_is_valid());
  assert!(it.next().is_none());
}

#[test]
fn test_raw_chunk_iter_truncated() {
  // declares 100 bytes of data but has none
  let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, b'I', b'D', b'A', b'T', 1, 2];
  assert_eq!(PngRawChunkIter::new(&bytes).count(), 0);
  assert_eq!(PngRawChunkIter::new(&bytes[..3]).count(), 0);
}

#[test]
fn test_bad_crc_detected() {
  let mut chunk = IEND_CHUNK;
  chunk[11] ^= 1;
  let mut bytes = [0_u8; 20];
  bytes[8..].copy_from_slice(&chunk);
  assert!(!PngRawChunkIter::new(&bytes).next().unwrap().crc_is_valid());
}
