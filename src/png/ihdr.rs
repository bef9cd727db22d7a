use super::*;

use bytemuck::{Pod, Zeroable};

use crate::U32BE;

/// Image Header.
///
/// This is the 13 byte payload of the `IHDR` chunk, laid out exactly as it
/// appears in the file, so [`as_bytes`](Self::as_bytes) is just a view of the
/// struct.
///
/// Every image this crate writes is 8-bit RGBA, deflate compressed, using
/// filter method 0, with no interlacing. See [`IHDR::rgba8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct IHDR {
  /// Width in pixels.
  pub width: U32BE,
  /// Height in pixels.
  pub height: U32BE,
  /// Bits per channel (or per palette index).
  pub bit_depth: u8,
  /// See [`IHDR::COLOR_TYPE_RGBA`].
  pub color_type: u8,
  /// Only 0 (deflate) is defined.
  pub compression_method: u8,
  /// Only 0 (adaptive filtering with five basic filter types) is defined.
  pub filter_method: u8,
  /// 0 is no interlace, 1 is Adam7.
  pub interlace_method: u8,
}
impl IHDR {
  /// Truecolor with alpha.
  pub const COLOR_TYPE_RGBA: u8 = 6;

  /// The header for an 8-bit RGBA non-interlaced image.
  ///
  /// Zero or oversized dimensions aren't checked here, the
  /// [`PngEncoder`] validates them before it builds a header.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: 8,
      color_type: Self::COLOR_TYPE_RGBA,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// The chunk payload bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }

  /// Reads a header back out of chunk data.
  ///
  /// Returns `None` if the data isn't exactly 13 bytes.
  #[inline]
  #[must_use]
  pub fn try_from_bytes(data: &[u8]) -> Option<Self> {
    bytemuck::try_pod_read_unaligned(data).ok()
  }
}

#[test]
fn test_ihdr_rgba8_bytes() {
  let ihdr = IHDR::rgba8(0x0102_0304, 2);
  assert_eq!(core::mem::size_of::<IHDR>(), 13);
  assert_eq!(ihdr.as_bytes(), &[1, 2, 3, 4, 0, 0, 0, 2, 8, 6, 0, 0, 0]);
  assert_eq!(IHDR::try_from_bytes(ihdr.as_bytes()), Some(ihdr));
  assert_eq!(IHDR::try_from_bytes(&ihdr.as_bytes()[..12]), None);
}
