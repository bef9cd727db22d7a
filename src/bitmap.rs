//! Provides an owned RGBA8 image type.

use alloc::vec::Vec;

use pixel_formats::r8g8b8a8_Srgb;

use crate::{png::ZlibCompressor, png::PngEncoder, PngEncodeError};

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// An owned direct-color image.
///
/// The fields are public, but if you put them together weirdly (a `pixels`
/// length other than `width * height`) encoding will give a
/// [`SizeMismatch`](PngEncodeError::SizeMismatch) error.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Bitmap<P = r8g8b8a8_Srgb> {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<P>,
}
impl<P> Bitmap<P> {
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<&P> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut P> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      self.pixels.get_mut(i)
    } else {
      None
    }
  }
  /// Flips the image, top to bottom.
  ///
  /// GPU readbacks usually come out bottom row first, while PNG wants the top
  /// row first.
  ///
  /// If the buffer contains less pixels than `width * height` would indicate,
  /// this will do nothing.
  #[inline]
  pub fn vertical_flip(&mut self) {
    let w = self.width as usize;
    let Some(num_pixels) = w.checked_mul(self.height as usize) else { return };
    if let Some(mut data) = self.pixels.get_mut(..num_pixels) {
      let mut temp_height = self.height;
      while temp_height > 1 {
        let (low, mid) = data.split_at_mut(w);
        let (mid, high) = mid.split_at_mut(mid.len() - w);
        low.swap_with_slice(high);
        data = mid;
        temp_height -= 2;
      }
    }
  }
}
impl Bitmap<r8g8b8a8_Srgb> {
  /// Makes a bitmap out of RGBA8 bytes.
  ///
  /// ## Failure
  /// * The byte count isn't `width * height * 4`.
  pub fn try_from_rgba_bytes(
    width: u32, height: u32, rgba: &[u8],
  ) -> Result<Self, PngEncodeError> {
    let expected = (width as usize)
      .checked_mul(height as usize)
      .and_then(|px| px.checked_mul(4))
      .ok_or(PngEncodeError::DimensionsTooLarge)?;
    if rgba.len() != expected {
      return Err(PngEncodeError::SizeMismatch { expected, actual: rgba.len() });
    }
    let src: &[r8g8b8a8_Srgb] = bytemuck::cast_slice(rgba);
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(src.len())?;
    pixels.extend_from_slice(src);
    Ok(Self { width, height, pixels })
  }

  /// The pixels viewed as RGBA8 bytes.
  #[inline]
  #[must_use]
  pub fn as_rgba_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Encodes the bitmap using the encoder given.
  pub fn to_png_bytes_with<C: ZlibCompressor>(
    &self, encoder: &PngEncoder<C>,
  ) -> Result<Vec<u8>, PngEncodeError> {
    encoder.encode(self.as_rgba_bytes(), self.width, self.height)
  }

  /// Encodes the bitmap with the default settings.
  #[cfg(feature = "miniz_oxide")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  #[inline]
  pub fn to_png_bytes(&self) -> Result<Vec<u8>, PngEncodeError> {
    self.to_png_bytes_with(&PngEncoder::DEFAULT)
  }
}

#[test]
fn test_vertical_flip() {
  let mut bitmap = Bitmap { width: 2, height: 3, pixels: alloc::vec![1, 2, 3, 4, 5, 6] };
  bitmap.vertical_flip();
  assert_eq!(bitmap.pixels, [5, 6, 3, 4, 1, 2]);
  assert_eq!(bitmap.get(1, 0), Some(&6));
  assert_eq!(bitmap.get(2, 0), None);
}

#[test]
fn test_rgba_bytes_round_trip() {
  let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
  let bitmap = Bitmap::try_from_rgba_bytes(2, 1, &bytes).unwrap();
  assert_eq!(bitmap.get(1, 0), Some(&r8g8b8a8_Srgb { r: 5, g: 6, b: 7, a: 8 }));
  assert_eq!(bitmap.as_rgba_bytes(), bytes);
  assert_eq!(
    Bitmap::try_from_rgba_bytes(2, 2, &bytes),
    Err(PngEncodeError::SizeMismatch { expected: 16, actual: 8 })
  );
}

#[test]
fn test_as_rgba_bytes_channel_order() {
  let bitmap = Bitmap {
    width: 2,
    height: 1,
    pixels: alloc::vec![
      r8g8b8a8_Srgb { r: 1, g: 2, b: 3, a: 4 },
      r8g8b8a8_Srgb { r: 5, g: 6, b: 7, a: 8 },
    ],
  };
  assert_eq!(bitmap.as_rgba_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
  assert_eq!(bitmap.as_rgba_bytes().as_ptr(), bitmap.pixels.as_ptr().cast::<u8>());
}

#[test]
fn test_vertical_flip_overflowing_size() {
  let mut bitmap = Bitmap { width: u32::MAX, height: u32::MAX, pixels: alloc::vec![1, 2, 3] };
  bitmap.vertical_flip();
  assert_eq!(bitmap.pixels, [1, 2, 3]);
  let mut short = Bitmap { width: 2, height: 2, pixels: alloc::vec![1, 2, 3] };
  short.vertical_flip();
  assert_eq!(short.pixels, [1, 2, 3]);
}
