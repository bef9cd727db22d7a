//! Encoding several images as one batch.
//!
//! A batch is something like several camera views of the same object. Each
//! image is encoded on its own: if one fails, that image is reported as a
//! failure and the rest are still encoded. A batch never fails as a whole.

use alloc::vec::Vec;

use crate::{
  png::{PngEncoder, ZlibCompressor},
  PngEncodeError,
};

/// Anything that can be encoded as one image of a batch.
pub trait BatchFrame {
  /// Encodes this frame using the encoder given.
  fn encode_with<C: ZlibCompressor>(&self, encoder: &PngEncoder<C>)
    -> Result<Vec<u8>, PngEncodeError>;
}

/// A borrowed RGBA8 buffer and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct FrameRef<'a> {
  pub rgba: &'a [u8],
  pub width: u32,
  pub height: u32,
}
impl BatchFrame for FrameRef<'_> {
  #[inline]
  fn encode_with<C: ZlibCompressor>(
    &self, encoder: &PngEncoder<C>,
  ) -> Result<Vec<u8>, PngEncodeError> {
    encoder.encode(self.rgba, self.width, self.height)
  }
}

#[cfg(feature = "base64")]
impl BatchFrame for crate::frame::RgbaFrame {
  #[inline]
  fn encode_with<C: ZlibCompressor>(
    &self, encoder: &PngEncoder<C>,
  ) -> Result<Vec<u8>, PngEncodeError> {
    self.to_png_with(encoder)
  }
}

/// A frame still in its base64 form.
///
/// Decoding happens as part of the batch, so a bad payload only fails its own
/// item.
#[cfg(feature = "base64")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Base64Frame<'a> {
  pub base64: &'a str,
  pub width: u32,
  pub height: u32,
}
#[cfg(feature = "base64")]
impl BatchFrame for Base64Frame<'_> {
  #[inline]
  fn encode_with<C: ZlibCompressor>(
    &self, encoder: &PngEncoder<C>,
  ) -> Result<Vec<u8>, PngEncodeError> {
    crate::frame::RgbaFrame::from_base64(self.base64, self.width, self.height)?
      .to_png_with(encoder)
  }
}

/// The outcome for one image of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
  /// Position of the frame in the batch input.
  pub index: usize,
  /// The PNG bytes, or why this image was left out.
  pub result: Result<Vec<u8>, PngEncodeError>,
}

/// The outcomes of a whole batch, one item per input frame, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
  /// Every item, in input order.
  pub items: Vec<BatchItem>,
}
impl BatchReport {
  /// The images that encoded, with their input index.
  #[inline]
  pub fn images(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
    self.items.iter().filter_map(|item| match &item.result {
      Ok(png) => Some((item.index, png.as_slice())),
      Err(_) => None,
    })
  }
  /// The images that were left out, with their input index.
  #[inline]
  pub fn failures(&self) -> impl Iterator<Item = (usize, PngEncodeError)> + '_ {
    self.items.iter().filter_map(|item| match item.result {
      Ok(_) => None,
      Err(e) => Some((item.index, e)),
    })
  }
  /// How many images encoded.
  #[inline]
  #[must_use]
  pub fn success_count(&self) -> usize {
    self.images().count()
  }
  /// If every image encoded.
  #[inline]
  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.items.iter().all(|item| item.result.is_ok())
  }
}

/// Encodes every frame, keeping going past failures.
pub fn encode_batch<C, I>(encoder: &PngEncoder<C>, frames: I) -> BatchReport
where
  C: ZlibCompressor,
  I: IntoIterator,
  I::Item: BatchFrame,
{
  let items: Vec<BatchItem> = frames
    .into_iter()
    .enumerate()
    .map(|(index, frame)| {
      let result = frame.encode_with(encoder);
      if let Err(e) = &result {
        log::warn!("batch image {index} left out: {e}");
      }
      BatchItem { index, result }
    })
    .collect();
  log::trace!(
    "batch encoded {} of {} images",
    items.iter().filter(|item| item.result.is_ok()).count(),
    items.len()
  );
  BatchReport { items }
}

#[test]
#[cfg(feature = "miniz_oxide")]
fn test_batch_isolates_failures() {
  let good = [10_u8, 20, 30, 255];
  let frames = [
    FrameRef { rgba: &good, width: 1, height: 1 },
    FrameRef { rgba: &good[..3], width: 1, height: 1 },
    FrameRef { rgba: &good, width: 1, height: 1 },
  ];
  let report = encode_batch(&PngEncoder::DEFAULT, frames);
  assert_eq!(report.items.len(), 3);
  assert_eq!(report.success_count(), 2);
  assert!(!report.is_complete());
  assert_eq!(report.images().map(|(i, _)| i).collect::<Vec<_>>(), [0, 2]);
  assert_eq!(
    report.failures().collect::<Vec<_>>(),
    [(1, PngEncodeError::SizeMismatch { expected: 4, actual: 3 })]
  );
}

#[test]
#[cfg(all(feature = "miniz_oxide", feature = "base64"))]
fn test_batch_bad_base64_item() {
  let frames = [
    Base64Frame { base64: "/wAA/w==", width: 1, height: 1 },
    Base64Frame { base64: "%%%", width: 1, height: 1 },
  ];
  let report = encode_batch(&PngEncoder::DEFAULT, frames);
  assert_eq!(report.success_count(), 1);
  assert_eq!(report.failures().collect::<Vec<_>>(), [(1, PngEncodeError::Base64)]);
}

#[test]
#[cfg(feature = "miniz_oxide")]
fn test_empty_batch() {
  let report = encode_batch(&PngEncoder::DEFAULT, core::iter::empty::<FrameRef<'_>>());
  assert!(report.items.is_empty());
  assert!(report.is_complete());
}
