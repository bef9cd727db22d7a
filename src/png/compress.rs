#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A zlib compression level, `0..=9`.
///
/// `0` stores without compressing, `9` is slowest and smallest. The default
/// is `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CompressionLevel(u8);
impl CompressionLevel {
  /// No compression.
  pub const NONE: Self = Self(0);
  /// Fastest actual compression.
  pub const FAST: Self = Self(1);
  /// The default level.
  pub const DEFAULT: Self = Self(6);
  /// Best (and slowest) compression.
  pub const BEST: Self = Self(9);

  /// Returns `None` for values above 9.
  #[inline]
  #[must_use]
  pub const fn new(level: u8) -> Option<Self> {
    if level <= 9 {
      Some(Self(level))
    } else {
      None
    }
  }
  /// The level as a plain number.
  #[inline]
  #[must_use]
  pub const fn get(self) -> u8 {
    self.0
  }
}
impl Default for CompressionLevel {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// A zlib compressor reported failure.
///
/// The message comes from the compressor, this crate just passes it along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressionError(pub &'static str);
impl core::fmt::Display for CompressionError {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.0)
  }
}

/// Something that can produce a zlib stream (a DEFLATE stream with the zlib
/// header and Adler-32 trailer), which is what PNG's image data holds.
///
/// Any conformant compressor works. Closures of the right shape also
/// implement this, which is handy for plugging in another crate's deflate.
#[cfg(feature = "alloc")]
pub trait ZlibCompressor {
  /// Compress all of `data` into a new zlib stream.
  fn compress_zlib(&self, data: &[u8], level: CompressionLevel)
    -> Result<Vec<u8>, CompressionError>;
}
#[cfg(feature = "alloc")]
impl<F> ZlibCompressor for F
where
  F: Fn(&[u8], CompressionLevel) -> Result<Vec<u8>, CompressionError>,
{
  #[inline]
  fn compress_zlib(
    &self, data: &[u8], level: CompressionLevel,
  ) -> Result<Vec<u8>, CompressionError> {
    self(data, level)
  }
}

/// Compression using the `miniz_oxide` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub struct MinizOxide;
#[cfg(feature = "miniz_oxide")]
impl ZlibCompressor for MinizOxide {
  #[inline]
  fn compress_zlib(
    &self, data: &[u8], level: CompressionLevel,
  ) -> Result<Vec<u8>, CompressionError> {
    Ok(miniz_oxide::deflate::compress_to_vec_zlib(data, level.get()))
  }
}

#[test]
fn test_compression_level_range() {
  assert_eq!(CompressionLevel::new(9), Some(CompressionLevel::BEST));
  assert_eq!(CompressionLevel::new(10), None);
  assert_eq!(CompressionLevel::default().get(), 6);
}

#[test]
#[cfg(feature = "miniz_oxide")]
fn test_miniz_zlib_stream_inflates() {
  let data: Vec<u8> = (0..2000_u32).map(|i| (i % 7) as u8).collect();
  let z = MinizOxide.compress_zlib(&data, CompressionLevel::DEFAULT).unwrap();
  // zlib header: deflate method, 32K window
  assert_eq!(z[0], 0x78);
  assert_eq!(miniz_oxide::inflate::decompress_to_vec_zlib(&z).unwrap(), data);
}
