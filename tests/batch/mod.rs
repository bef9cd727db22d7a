use rawpng::{
  batch::{encode_batch, Base64Frame, FrameRef},
  frame::{to_base64, RgbaFrame},
  png::PngEncoder,
  PngEncodeError,
};

use super::{decode_rgba8, rand_bytes};

#[test]
fn test_one_bad_view_of_four() {
  let views: Vec<Vec<u8>> = (0..4).map(|_| rand_bytes(8 * 8 * 4)).collect();
  let mut frames: Vec<FrameRef<'_>> =
    views.iter().map(|v| FrameRef { rgba: v, width: 8, height: 8 }).collect();
  frames[2].height = 9;

  let report = encode_batch(&PngEncoder::DEFAULT, frames);
  assert_eq!(report.items.len(), 4);
  assert_eq!(report.success_count(), 3);
  for (index, png) in report.images() {
    assert_eq!(decode_rgba8(png), (8, 8, views[index].clone()));
  }
  let failures: Vec<_> = report.failures().collect();
  assert_eq!(failures, [(2, PngEncodeError::SizeMismatch { expected: 8 * 9 * 4, actual: 256 })]);
}

#[test]
fn test_base64_views() {
  let rgba = rand_bytes(3 * 4 * 4);
  let text = to_base64(&rgba);
  let frames = [
    Base64Frame { base64: &text, width: 3, height: 4 },
    Base64Frame { base64: &text, width: 4, height: 4 },
  ];
  let report = encode_batch(&PngEncoder::DEFAULT, frames);
  let images: Vec<_> = report.images().collect();
  assert_eq!(images.len(), 1);
  assert_eq!(images[0].0, 0);
  assert_eq!(decode_rgba8(images[0].1), (3, 4, rgba));
  assert!(!report.is_complete());
}

#[test]
fn test_frame_to_png() {
  let frame = RgbaFrame::from_base64("/wAA/w==", 1, 1).unwrap();
  assert_eq!(decode_rgba8(&frame.to_png().unwrap()), (1, 1, vec![255, 0, 0, 255]));
}
