use rawpng::{
  bitmap::Bitmap,
  png::{
    encode_png, png_framing_is_valid, FilterStrategy, PngEncoder, PngRawChunkIter, IHDR,
  },
  r8g8b8a8_Srgb, PngEncodeError,
};

use super::{decode_rgba8, rand_bytes};

#[test]
fn test_red_pixel_decodes() {
  let png = encode_png(&[255, 0, 0, 255], 1, 1).unwrap();
  assert_eq!(decode_rgba8(&png), (1, 1, vec![255, 0, 0, 255]));
}

#[test]
fn test_random_images_round_trip() {
  for (w, h) in [(1, 1), (1, 7), (7, 1), (3, 5), (64, 48), (257, 3)] {
    let rgba = rand_bytes(w as usize * h as usize * 4);
    let png = encode_png(&rgba, w, h).unwrap();
    assert!(png_framing_is_valid(&png), "failed {w}x{h}");
    assert_eq!(decode_rgba8(&png), (w, h, rgba), "failed {w}x{h}");
  }
}

#[test]
fn test_adaptive_round_trip() {
  let encoder = PngEncoder::DEFAULT.with_filter_strategy(FilterStrategy::Adaptive);
  // a gradient, which filtering helps a lot with
  let (w, h) = (40_u32, 30_u32);
  let mut rgba = Vec::new();
  for y in 0..h {
    for x in 0..w {
      rgba.extend_from_slice(&[(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8, 255]);
    }
  }
  let adaptive = encoder.encode(&rgba, w, h).unwrap();
  let plain = encode_png(&rgba, w, h).unwrap();
  assert_eq!(decode_rgba8(&adaptive), (w, h, rgba.clone()));
  assert!(adaptive.len() <= plain.len());

  let noise = rand_bytes(9 * 11 * 4);
  assert_eq!(decode_rgba8(&encoder.encode(&noise, 9, 11).unwrap()), (9, 11, noise));
}

#[test]
fn test_three_channel_buffer_rejected() {
  let rgb = rand_bytes(10 * 10 * 3);
  assert_eq!(
    encode_png(&rgb, 10, 10),
    Err(PngEncodeError::SizeMismatch { expected: 400, actual: 300 })
  );
}

#[test]
fn test_same_input_same_bytes() {
  let rgba = rand_bytes(32 * 32 * 4);
  let a = encode_png(&rgba, 32, 32).unwrap();
  let b = encode_png(&rgba, 32, 32).unwrap();
  assert_eq!(a, b);
}

#[test]
fn test_header_matches_dimensions() {
  let png = encode_png(&rand_bytes(6 * 2 * 4), 6, 2).unwrap();
  let first = PngRawChunkIter::new(&png).next().unwrap();
  assert_eq!(IHDR::try_from_bytes(first.data()), Some(IHDR::rgba8(6, 2)));
}

#[test]
fn test_concurrent_encodes_agree() {
  let rgba = rand_bytes(50 * 20 * 4);
  let expected = encode_png(&rgba, 50, 20).unwrap();
  let encoder = PngEncoder::DEFAULT;
  std::thread::scope(|s| {
    let handles: Vec<_> =
      (0..4).map(|_| s.spawn(|| encoder.encode(&rgba, 50, 20).unwrap())).collect();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), expected);
    }
  });
}

#[test]
fn test_flipped_bitmap() {
  let top = r8g8b8a8_Srgb { r: 1, g: 2, b: 3, a: 4 };
  let bottom = r8g8b8a8_Srgb { r: 5, g: 6, b: 7, a: 8 };
  let mut bitmap = Bitmap { width: 1, height: 2, pixels: vec![bottom, top] };
  bitmap.vertical_flip();
  let png = bitmap.to_png_bytes().unwrap();
  assert_eq!(decode_rgba8(&png), (1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]));
}

#[test]
fn test_RawPngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = rand_bytes(1024);
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    assert!(!png_framing_is_valid(&v));
  }
}
