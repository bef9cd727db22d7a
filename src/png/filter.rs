//! Scanline filtering.
//!
//! From the PNG spec:
//!
//! > Filters are applied to **bytes**, not to pixels, regardless of the bit
//! > depth or color type of the image.
//!
//! With 8-bit RGBA the "pixel to the left" of a byte is always 4 bytes back.

use super::*;

use alloc::vec::Vec;

use crate::PngEncodeError;

const BYTES_PER_PIXEL: usize = 4;

/// How the encoder picks the filter type for each scanline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterStrategy {
  /// Every scanline uses [`FilterType::None`].
  ///
  /// The fastest option, and the output only depends on the pixels and the
  /// compression level.
  #[default]
  None,
  /// Every scanline is run through all five filter types and the one with
  /// the smallest sum of absolute (signed) byte values is kept.
  ///
  /// This is the heuristic the PNG spec suggests. It usually compresses
  /// better, but the output bytes differ from [`FilterStrategy::None`].
  Adaptive,
}

/// The five filter types of PNG filter method 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum FilterType {
  None = 0,
  Sub = 1,
  Up = 2,
  Average = 3,
  Paeth = 4,
}
impl FilterType {
  /// All filter types, in byte value order.
  pub const ALL: [Self; 5] = [Self::None, Self::Sub, Self::Up, Self::Average, Self::Paeth];
}

/// The size of the filtered data for an image: one filter type byte plus
/// `width * 4` pixel bytes per row.
///
/// `None` if that overflows.
#[inline]
#[must_use]
pub fn filtered_len(width: u32, height: u32) -> Option<usize> {
  let row_len = (width as usize).checked_mul(BYTES_PER_PIXEL)?.checked_add(1)?;
  row_len.checked_mul(height as usize)
}

/// Turns RGBA8 rows into the filtered byte stream that gets compressed.
///
/// `rgba` is `height` rows of `width * 4` bytes, top row first.
///
/// ## Failure
/// The same input checks as [`validate_rgba8`], so a zero dimension or a
/// buffer of the wrong length is an error rather than a short output.
pub fn filter_scanlines(
  rgba: &[u8], width: u32, height: u32, strategy: FilterStrategy,
) -> Result<Vec<u8>, PngEncodeError> {
  validate_rgba8(rgba, width, height)?;
  let total = filtered_len(width, height).ok_or(PngEncodeError::DimensionsTooLarge)?;
  let row_len = width as usize * BYTES_PER_PIXEL;
  let mut out: Vec<u8> = Vec::new();
  out.try_reserve_exact(total)?;
  match strategy {
    FilterStrategy::None => {
      for row in rgba.chunks_exact(row_len) {
        out.push(FilterType::None as u8);
        out.extend_from_slice(row);
      }
    }
    FilterStrategy::Adaptive => {
      let mut scratch: Vec<u8> = Vec::new();
      scratch.try_reserve_exact(row_len * 2)?;
      scratch.resize(row_len * 2, 0);
      let (candidate, best) = scratch.split_at_mut(row_len);
      let mut counts = [0_usize; 5];
      let mut prev: Option<&[u8]> = None;
      for row in rgba.chunks_exact(row_len) {
        let mut best_filter = FilterType::None;
        let mut best_score = u64::MAX;
        for filter in FilterType::ALL {
          filter_row(filter, row, prev, candidate);
          let score = sum_of_abs(candidate);
          if score < best_score {
            best_score = score;
            best_filter = filter;
            best.copy_from_slice(candidate);
          }
        }
        counts[best_filter as usize] += 1;
        out.push(best_filter as u8);
        out.extend_from_slice(best);
        prev = Some(row);
      }
      log::debug!("adaptive filter choices (none, sub, up, avg, paeth): {counts:?}");
    }
  }
  debug_assert_eq!(out.len(), total);
  Ok(out)
}

/// Filters one row into `out`.
///
/// `prev` is the previous unfiltered row, or `None` for the top row (which
/// then acts like a row of zeros).
pub fn filter_row(filter: FilterType, row: &[u8], prev: Option<&[u8]>, out: &mut [u8]) {
  debug_assert_eq!(row.len(), out.len());
  for (i, (x, o)) in row.iter().copied().zip(out.iter_mut()).enumerate() {
    let a = if i >= BYTES_PER_PIXEL { row[i - BYTES_PER_PIXEL] } else { 0 };
    let b = prev.and_then(|p| p.get(i)).copied().unwrap_or(0);
    let c = if i >= BYTES_PER_PIXEL {
      prev.and_then(|p| p.get(i - BYTES_PER_PIXEL)).copied().unwrap_or(0)
    } else {
      0
    };
    let predicted = match filter {
      FilterType::None => 0,
      FilterType::Sub => a,
      FilterType::Up => b,
      FilterType::Average => ((u16::from(a) + u16::from(b)) / 2) as u8,
      FilterType::Paeth => paeth_predictor(a, b, c),
    };
    *o = x.wrapping_sub(predicted);
  }
}

fn sum_of_abs(bytes: &[u8]) -> u64 {
  bytes.iter().map(|&b| u64::from((b as i8).unsigned_abs())).sum()
}

/// The Paeth filter function computes a simple linear function of the three
/// neighboring pixels (left `a`, above `b`, upper left `c`).
///
/// The output is the "predictor" of the neighboring pixel closest to the
/// computed value.
const fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
  // i32 math can't overflow here, which the PNG spec requires.
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

#[cfg(test)]
mod filter_tests {
  use super::*;
  use alloc::vec;

  /// Reverses `filter_row`, the way a decoder would.
  fn unfilter_row(filter: FilterType, filtered: &[u8], prev: Option<&[u8]>) -> Vec<u8> {
    let mut out = vec![0_u8; filtered.len()];
    for i in 0..filtered.len() {
      let a = if i >= BYTES_PER_PIXEL { out[i - BYTES_PER_PIXEL] } else { 0 };
      let b = prev.map_or(0, |p| p[i]);
      let c = if i >= BYTES_PER_PIXEL { prev.map_or(0, |p| p[i - BYTES_PER_PIXEL]) } else { 0 };
      let predicted = match filter {
        FilterType::None => 0,
        FilterType::Sub => a,
        FilterType::Up => b,
        FilterType::Average => ((u16::from(a) + u16::from(b)) / 2) as u8,
        FilterType::Paeth => paeth_predictor(a, b, c),
      };
      out[i] = filtered[i].wrapping_add(predicted);
    }
    out
  }

  #[test]
  fn test_paeth_predictor() {
    assert_eq!(paeth_predictor(0, 0, 0), 0);
    assert_eq!(paeth_predictor(100, 50, 50), 100);
    assert_eq!(paeth_predictor(50, 100, 50), 100);
    assert_eq!(paeth_predictor(50, 50, 100), 50);
    assert_eq!(paeth_predictor(255, 255, 255), 255);
  }

  #[test]
  fn test_none_strategy_layout() {
    // 2x2, bytes 1..=16
    let rgba: Vec<u8> = (1..=16).collect();
    let out = filter_scanlines(&rgba, 2, 2, FilterStrategy::None).unwrap();
    assert_eq!(out.len(), 2 * (2 * 4 + 1));
    assert_eq!(out[0], 0);
    assert_eq!(&out[1..9], &rgba[0..8]);
    assert_eq!(out[9], 0);
    assert_eq!(&out[10..18], &rgba[8..16]);
  }

  #[test]
  fn test_every_filter_reverses() {
    let prev: Vec<u8> = (0..32_u32).map(|i| (i * 37 % 256) as u8).collect();
    let row: Vec<u8> = (0..32_u32).map(|i| (i * 91 % 256) as u8).collect();
    let mut filtered = vec![0_u8; row.len()];
    for filter in FilterType::ALL {
      for p in [None, Some(&prev[..])] {
        filter_row(filter, &row, p, &mut filtered);
        assert_eq!(unfilter_row(filter, &filtered, p), row, "failed filter: {filter:?}");
      }
    }
  }

  #[test]
  fn test_adaptive_picks_up_for_repeated_rows() {
    let row: Vec<u8> = (0..16_u32).map(|i| (i * 53 % 256) as u8).collect();
    let mut rgba = row.clone();
    rgba.extend_from_slice(&row);
    let out = filter_scanlines(&rgba, 4, 2, FilterStrategy::Adaptive).unwrap();
    assert_eq!(out.len(), 2 * 17);
    // the second row is identical to the first, so "Up" zeroes it all out
    assert_eq!(out[17], FilterType::Up as u8);
    assert!(out[18..].iter().all(|&b| b == 0));
    let first = unfilter_row(FilterType::ALL[out[0] as usize], &out[1..17], None);
    assert_eq!(first, row);
  }

  #[test]
  fn test_filtered_len_overflow() {
    assert_eq!(filtered_len(3, 5), Some(5 * 13));
    assert_eq!(filtered_len(u32::MAX, u32::MAX), None);
  }

  #[test]
  fn test_filter_scanlines_rejects_bad_input() {
    for strategy in [FilterStrategy::None, FilterStrategy::Adaptive] {
      assert_eq!(filter_scanlines(&[], 0, 3, strategy), Err(PngEncodeError::WidthOrHeightZero));
      assert_eq!(filter_scanlines(&[], 3, 0, strategy), Err(PngEncodeError::WidthOrHeightZero));
      assert_eq!(
        filter_scanlines(&[1, 2, 3, 4, 5], 1, 2, strategy),
        Err(PngEncodeError::SizeMismatch { expected: 8, actual: 5 })
      );
    }
    let out = filter_scanlines(&[1, 2, 3, 4, 5, 6, 7, 8], 1, 2, FilterStrategy::None).unwrap();
    assert_eq!(out.len(), 10);
  }
}
