#![allow(bad_style)]

mod batch;
mod png;

fn rand_bytes(count: usize) -> Vec<u8> {
  let mut buffer = vec![0; count];
  getrandom::getrandom(&mut buffer).unwrap();
  buffer
}

/// Decodes with the `png` crate, returning `(width, height, rgba)`.
fn decode_rgba8(png_bytes: &[u8]) -> (u32, u32, Vec<u8>) {
  let decoder = ::png::Decoder::new(png_bytes);
  let mut reader = decoder.read_info().unwrap();
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf).unwrap();
  assert_eq!(info.color_type, ::png::ColorType::Rgba);
  assert_eq!(info.bit_depth, ::png::BitDepth::Eight);
  buf.truncate(info.buffer_size());
  (info.width, info.height, buf)
}
