use core::fmt;

use crate::png::CompressionError;

/// An error from the `rawpng` crate.
///
/// Encoding either returns a complete PNG stream or one of these, never a
/// partial stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PngEncodeError {
  /// The pixel buffer isn't exactly `width * height * 4` bytes.
  ///
  /// Checked before any other encoding work happens.
  SizeMismatch {
    /// `width * height * 4`
    expected: usize,
    /// The length of the buffer that was actually given.
    actual: usize,
  },

  /// The declared width and/or height of this image is 0.
  WidthOrHeightZero,

  /// The image is too large.
  ///
  /// PNG limits width and height to `2^31 - 1`, and the byte size of the
  /// pixel data must also fit in a `usize`.
  DimensionsTooLarge,

  /// Chunk data can't be longer than `2^31 - 1` bytes.
  ChunkTooLong,

  /// The allocator couldn't give us enough space.
  Alloc,

  /// The zlib compressor reported a failure.
  Compression(CompressionError),

  /// The base64 input of a rendered frame could not be decoded.
  #[cfg(feature = "base64")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "base64")))]
  Base64,
}

#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for PngEncodeError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl From<CompressionError> for PngEncodeError {
  #[inline]
  fn from(e: CompressionError) -> Self {
    Self::Compression(e)
  }
}
#[cfg(feature = "base64")]
impl From<base64::DecodeError> for PngEncodeError {
  #[inline]
  fn from(_: base64::DecodeError) -> Self {
    Self::Base64
  }
}

impl fmt::Display for PngEncodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::SizeMismatch { expected, actual } => {
        write!(f, "buffer size mismatch: got {actual} bytes, expected {expected}")
      }
      Self::WidthOrHeightZero => f.write_str("image width and height must be non-zero"),
      Self::DimensionsTooLarge => f.write_str("image dimensions are too large"),
      Self::ChunkTooLong => f.write_str("chunk data exceeds the PNG chunk length limit"),
      Self::Alloc => f.write_str("allocation failed"),
      Self::Compression(e) => write!(f, "compression failed: {e}"),
      #[cfg(feature = "base64")]
      Self::Base64 => f.write_str("invalid base64 pixel data"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PngEncodeError {}
