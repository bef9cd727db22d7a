#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for turning raw RGBA8 pixel buffers into PNG data.
//!
//! Renderers, screen grabbers, and GPU readbacks tend to hand you a flat
//! buffer of `R, G, B, A` bytes plus a width and height. This crate writes
//! that out as a minimal, fully standard PNG stream: the signature, one
//! `IHDR`, one `IDAT`, and one `IEND` chunk.
//!
//! ```
//! # #[cfg(feature = "miniz_oxide")]
//! # {
//! let red_pixel = [255_u8, 0, 0, 255];
//! let png = rawpng::png::encode_png(&red_pixel, 1, 1).unwrap();
//! assert_eq!(&png[..8], &rawpng::png::PNG_SIGNATURE);
//! # }
//! ```
//!
//! ## Crate Features
//! * `alloc` (default): everything that builds a `Vec<u8>`.
//! * `miniz_oxide` (default): the default zlib compressor. Without it you
//!   provide your own [`ZlibCompressor`](png::ZlibCompressor).
//! * `base64` (default): decoding of base64 encoded renderer frames.
//! * `std`: `std::error::Error` impls. Required by the `rgba2png` binary.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

pub mod png;

#[cfg(feature = "alloc")]
pub mod bitmap;

#[cfg(feature = "alloc")]
pub mod batch;

#[cfg(feature = "base64")]
pub mod frame;

pub use pixel_formats::r8g8b8a8_Srgb;
