//! Turns a raw RGBA8 dump into a PNG file.
//!
//! ```text
//! rgba2png <input> <width> <height> <output.png> [--level N] [--adaptive] [--base64] [--flip]
//! rgba2png --check <file.png>
//! ```
//!
//! * `--base64`: the input file is base64 text rather than raw bytes.
//! * `--flip`: the input rows are bottom row first.
//! * `--check`: reports each chunk of an existing PNG and if the framing
//!   matches what this tool writes.

use std::process::ExitCode;

use rawpng::{
  bitmap::Bitmap,
  frame::RgbaFrame,
  png::{
    png_framing_is_valid, CompressionLevel, FilterStrategy, PngEncoder, PngRawChunkIter,
  },
};

const USAGE: &str = "usage:
  rgba2png <input> <width> <height> <output.png> [--level N] [--adaptive] [--base64] [--flip]
  rgba2png --check <file.png>";

struct Args {
  input: String,
  width: u32,
  height: u32,
  output: String,
  level: CompressionLevel,
  strategy: FilterStrategy,
  base64: bool,
  flip: bool,
}

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().skip(1).collect();
  let result = match args.as_slice() {
    [flag, path] if flag == "--check" => check(path),
    _ => match parse_args(&args) {
      Ok(args) => encode(&args),
      Err(e) => Err(format!("{e}\n{USAGE}")),
    },
  };
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("rgba2png: {e}");
      ExitCode::FAILURE
    }
  }
}

fn parse_args(args: &[String]) -> Result<Args, String> {
  let mut positional = Vec::new();
  let mut level = CompressionLevel::DEFAULT;
  let mut strategy = FilterStrategy::None;
  let mut base64 = false;
  let mut flip = false;
  let mut it = args.iter();
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--level" => {
        let n = it.next().ok_or("--level needs a value")?;
        level = n
          .parse::<u8>()
          .ok()
          .and_then(CompressionLevel::new)
          .ok_or_else(|| format!("bad compression level: {n}"))?;
      }
      "--adaptive" => strategy = FilterStrategy::Adaptive,
      "--base64" => base64 = true,
      "--flip" => flip = true,
      other if other.starts_with("--") => return Err(format!("unknown option: {other}")),
      _ => positional.push(arg.clone()),
    }
  }
  let [input, width, height, output]: [String; 4] =
    positional.try_into().map_err(|_| String::from("expected 4 positional arguments"))?;
  let width = width.parse().map_err(|_| format!("bad width: {width}"))?;
  let height = height.parse().map_err(|_| format!("bad height: {height}"))?;
  Ok(Args { input, width, height, output, level, strategy, base64, flip })
}

fn encode(args: &Args) -> Result<(), String> {
  let bytes = std::fs::read(&args.input).map_err(|e| format!("{}: {e}", args.input))?;
  let rgba = if args.base64 {
    let text = String::from_utf8(bytes).map_err(|_| format!("{}: not utf-8 text", args.input))?;
    RgbaFrame::from_base64(&text, args.width, args.height).map_err(|e| e.to_string())?.into_rgba()
  } else {
    bytes
  };
  let encoder =
    PngEncoder::DEFAULT.with_compression_level(args.level).with_filter_strategy(args.strategy);
  let png = if args.flip {
    let mut bitmap =
      Bitmap::try_from_rgba_bytes(args.width, args.height, &rgba).map_err(|e| e.to_string())?;
    bitmap.vertical_flip();
    bitmap.to_png_bytes_with(&encoder)
  } else {
    encoder.encode(&rgba, args.width, args.height)
  }
  .map_err(|e| e.to_string())?;
  std::fs::write(&args.output, &png).map_err(|e| format!("{}: {e}", args.output))?;
  println!("{}: {}x{}, {} bytes", args.output, args.width, args.height, png.len());
  Ok(())
}

fn check(path: &str) -> Result<(), String> {
  let bytes = std::fs::read(path).map_err(|e| format!("{path}: {e}"))?;
  for chunk in PngRawChunkIter::new(&bytes) {
    let crc = if chunk.crc_is_valid() { "ok" } else { "BAD" };
    println!("{:?} len={} crc={crc}", chunk.chunk_type(), chunk.data().len());
  }
  if png_framing_is_valid(&bytes) {
    println!("{path}: ok");
    Ok(())
  } else {
    Err(format!("{path}: not a signature + IHDR + IDAT + IEND stream"))
  }
}
