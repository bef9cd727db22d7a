use super::*;

use alloc::vec::Vec;

use crate::PngEncodeError;

/// PNG limits width and height to `2^31 - 1`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Options for a [`PngEncoder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PngEncoderOptions {
  /// Passed to the zlib compressor. Defaults to 6.
  pub compression_level: CompressionLevel,
  /// Defaults to [`FilterStrategy::None`].
  pub filter_strategy: FilterStrategy,
}

/// Encodes RGBA8 pixel buffers into PNG streams.
///
/// An encoder holds no per-image state, so one encoder can be shared between
/// threads and used for any number of images at once (as long as the
/// compressor allows that).
#[derive(Debug, Clone, Default)]
pub struct PngEncoder<C> {
  options: PngEncoderOptions,
  compressor: C,
}
impl<C: ZlibCompressor> PngEncoder<C> {
  /// An encoder with the default options using the compressor given.
  #[inline]
  pub const fn new(compressor: C) -> Self {
    Self {
      options: PngEncoderOptions {
        compression_level: CompressionLevel::DEFAULT,
        filter_strategy: FilterStrategy::None,
      },
      compressor,
    }
  }
  /// Replaces all options.
  #[inline]
  #[must_use]
  pub fn with_options(mut self, options: PngEncoderOptions) -> Self {
    self.options = options;
    self
  }
  /// Sets the compression level.
  #[inline]
  #[must_use]
  pub fn with_compression_level(mut self, level: CompressionLevel) -> Self {
    self.options.compression_level = level;
    self
  }
  /// Sets the filter strategy.
  #[inline]
  #[must_use]
  pub fn with_filter_strategy(mut self, strategy: FilterStrategy) -> Self {
    self.options.filter_strategy = strategy;
    self
  }
  /// The current options.
  #[inline]
  #[must_use]
  pub const fn options(&self) -> PngEncoderOptions {
    self.options
  }

  /// Encodes the image as a complete PNG stream.
  ///
  /// * `rgba` is `R, G, B, A` bytes for each pixel, left to right, top row
  ///   first, with nothing between rows.
  ///
  /// ## Failure
  /// * [`WidthOrHeightZero`](PngEncodeError::WidthOrHeightZero)
  /// * [`DimensionsTooLarge`](PngEncodeError::DimensionsTooLarge) if either
  ///   dimension is over [`MAX_DIMENSION`].
  /// * [`SizeMismatch`](PngEncodeError::SizeMismatch) if `rgba` isn't
  ///   exactly `width * height * 4` bytes.
  /// * [`Compression`](PngEncodeError::Compression) if the compressor fails.
  /// * [`ChunkTooLong`](PngEncodeError::ChunkTooLong) if the compressed data
  ///   doesn't fit in one chunk.
  /// * [`Alloc`](PngEncodeError::Alloc)
  ///
  /// All checks on the input happen before any encoding work.
  pub fn encode(&self, rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PngEncodeError> {
    let ihdr = validate_rgba8(rgba, width, height)?;

    let filtered = filter_scanlines(rgba, width, height, self.options.filter_strategy)?;
    let compressed = self.compressor.compress_zlib(&filtered, self.options.compression_level)?;
    drop(filtered);

    let mut png: Vec<u8> = Vec::new();
    png.try_reserve_exact(PNG_SIGNATURE.len() + (13 + 12) + (compressed.len() + 12) + 12)?;
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, PngChunkType::IHDR, ihdr.as_bytes())?;
    write_chunk(&mut png, PngChunkType::IDAT, &compressed)?;
    png.extend_from_slice(&IEND_CHUNK);
    log::trace!(
      "encoded {width}x{height} png: {} pixel bytes -> {} png bytes",
      rgba.len(),
      png.len()
    );
    Ok(png)
  }
}

#[cfg(feature = "miniz_oxide")]
impl PngEncoder<MinizOxide> {
  /// The default encoder: level 6, no filtering, `miniz_oxide` compression.
  pub const DEFAULT: Self = Self::new(MinizOxide);
}

/// Checks an RGBA8 buffer against the dimensions, and gives the header for
/// them.
///
/// The width and height go through this one function, so the header always
/// describes exactly the dimensions the buffer was checked against.
pub fn validate_rgba8(rgba: &[u8], width: u32, height: u32) -> Result<IHDR, PngEncodeError> {
  if width == 0 || height == 0 {
    return Err(PngEncodeError::WidthOrHeightZero);
  }
  if width > MAX_DIMENSION || height > MAX_DIMENSION {
    return Err(PngEncodeError::DimensionsTooLarge);
  }
  let expected = (width as usize)
    .checked_mul(height as usize)
    .and_then(|px| px.checked_mul(4))
    .ok_or(PngEncodeError::DimensionsTooLarge)?;
  if rgba.len() != expected {
    return Err(PngEncodeError::SizeMismatch { expected, actual: rgba.len() });
  }
  Ok(IHDR::rgba8(width, height))
}

/// Encodes RGBA8 bytes as a PNG with the default settings.
///
/// This is [`PngEncoder::DEFAULT`]`.encode(rgba, width, height)`, see
/// [`PngEncoder::encode`] for the details.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[inline]
pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PngEncodeError> {
  PngEncoder::DEFAULT.encode(rgba, width, height)
}
