//! Frames as renderers hand them over: base64 text plus dimensions.

use alloc::vec::Vec;

use base64::{
  alphabet,
  engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
  Engine as _,
};

use crate::{
  png::{validate_rgba8, PngEncoder, ZlibCompressor},
  PngEncodeError,
};

/// Standard alphabet, with or without `=` padding on input.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
  &alphabet::STANDARD,
  GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true),
);

/// A decoded RGBA8 frame from a renderer.
///
/// The byte count always matches the dimensions, that's checked when the
/// frame is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbaFrame {
  width: u32,
  height: u32,
  rgba: Vec<u8>,
}
impl RgbaFrame {
  /// Makes a frame from RGBA8 bytes, top row first.
  ///
  /// ## Failure
  /// * Zero or too large dimensions.
  /// * The byte count isn't `width * height * 4`.
  pub fn new(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self, PngEncodeError> {
    validate_rgba8(&rgba, width, height)?;
    Ok(Self { width, height, rgba })
  }

  /// Decodes a frame from standard-alphabet base64.
  ///
  /// Padding is optional and ASCII whitespace anywhere in the text (such as
  /// line breaks) is skipped.
  ///
  /// ## Failure
  /// * [`Base64`](PngEncodeError::Base64) if the text isn't valid base64.
  /// * Anything [`RgbaFrame::new`] would fail with.
  pub fn from_base64(b64: &str, width: u32, height: u32) -> Result<Self, PngEncodeError> {
    let rgba = if b64.bytes().any(|b| b.is_ascii_whitespace()) {
      let mut compact: Vec<u8> = Vec::new();
      compact.try_reserve_exact(b64.len())?;
      compact.extend(b64.bytes().filter(|b| !b.is_ascii_whitespace()));
      LENIENT_STANDARD.decode(&compact)?
    } else {
      LENIENT_STANDARD.decode(b64)?
    };
    Self::new(rgba, width, height)
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }
  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }
  /// The RGBA8 bytes.
  #[inline]
  #[must_use]
  pub fn rgba(&self) -> &[u8] {
    &self.rgba
  }
  /// Takes the RGBA8 bytes back out.
  #[inline]
  #[must_use]
  pub fn into_rgba(self) -> Vec<u8> {
    self.rgba
  }

  /// Encodes the frame using the encoder given.
  #[inline]
  pub fn to_png_with<C: ZlibCompressor>(
    &self, encoder: &PngEncoder<C>,
  ) -> Result<Vec<u8>, PngEncodeError> {
    encoder.encode(&self.rgba, self.width, self.height)
  }

  /// Encodes the frame with the default settings.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  #[inline]
  pub fn to_png(&self) -> Result<Vec<u8>, PngEncodeError> {
    self.to_png_with(&PngEncoder::DEFAULT)
  }
}

/// Base64 encodes bytes (such as an encoded PNG) with the standard alphabet.
#[inline]
#[must_use]
pub fn to_base64(bytes: &[u8]) -> alloc::string::String {
  base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[test]
fn test_from_base64() {
  // [255, 0, 0, 255]
  let frame = RgbaFrame::from_base64("/wAA/w==", 1, 1).unwrap();
  assert_eq!(frame.rgba(), &[255, 0, 0, 255]);
  assert_eq!(to_base64(frame.rgba()), "/wAA/w==");
}

#[test]
fn test_from_base64_unpadded_and_wrapped() {
  for text in ["/wAA/w", "/wAA\n/w==", "/wAA\r\n/w", " /wAA/w==\n", "/w AA /w=="] {
    let frame = RgbaFrame::from_base64(text, 1, 1).unwrap();
    assert_eq!(frame.rgba(), &[255, 0, 0, 255], "{text:?}");
  }
}

#[test]
fn test_from_base64_errors() {
  assert_eq!(RgbaFrame::from_base64("not base64!", 1, 1), Err(PngEncodeError::Base64));
  assert_eq!(
    RgbaFrame::from_base64("/wAA/w==", 2, 1),
    Err(PngEncodeError::SizeMismatch { expected: 8, actual: 4 })
  );
}
