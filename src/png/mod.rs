//! Holds all the tools for encoding PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Automatic Encoding
//!
//! If you just have RGBA8 bytes call [`encode_png`] and you get back a
//! `Vec<u8>` with the full PNG stream. This requires the `miniz_oxide`
//! feature. If you want a different compression level, the adaptive filter
//! strategy, or your own zlib compressor, build a [`PngEncoder`].
//!
//! ## What Gets Written
//!
//! The general format of a PNG is an 8 byte signature followed by "chunks".
//! Each chunk is framed as:
//!
//! ```text
//! length: u32 (big-endian), counts only the data bytes
//! type:   4 ascii letters
//! data:   `length` bytes
//! crc:    u32 (big-endian), CRC-32 of type and data
//! ```
//!
//! This crate always writes exactly three chunks, in this order:
//! * **Header** ([`IHDR`]) - width, height, and the pixel format. The format is
//!   always 8 bits per channel RGBA, non-interlaced.
//! * **Image Data** (`IDAT`) - the filtered scanlines as one zlib stream.
//! * **End** ([`IEND_CHUNK`]) - the empty chunk that marks the end of the
//!   stream.
//!
//! No ancillary chunks (gamma, sRGB, text, and so on) are ever written.
//!
//! ## Filtering
//!
//! Before compression each scanline gets a filter type byte on the front. By
//! default that's always filter 0 ("None") and the row's bytes are copied
//! over unchanged. That's the fastest option and gives byte-identical output
//! across runs, but it isn't the smallest output. Selecting
//! [`FilterStrategy::Adaptive`] picks a filter per row instead, which usually
//! compresses better but changes the output bytes.
//!
//! ## Reading Back
//!
//! [`PngRawChunkIter`] walks the chunks of any PNG stream, and each
//! [`PngRawChunk`] can check its own CRC. That's enough to verify the framing
//! of an encoded image, it's not a decoder.

pub(crate) use core::fmt::{Debug, Write};

mod crc32;
pub use crc32::*;

mod chunk_type;
pub use chunk_type::*;

mod ihdr;
pub use ihdr::*;

mod iend;
pub use iend::*;

mod raw_chunk;
pub use raw_chunk::*;

mod compress;
pub use compress::*;

#[cfg(feature = "alloc")]
mod chunk;
#[cfg(feature = "alloc")]
pub use chunk::*;

#[cfg(feature = "alloc")]
mod filter;
#[cfg(feature = "alloc")]
pub use filter::*;

#[cfg(feature = "alloc")]
mod encoder;
#[cfg(feature = "alloc")]
pub use encoder::*;

#[cfg(all(test, feature = "miniz_oxide"))]
mod tests;

/// The 8 bytes that start every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are the correct signature.
#[inline]
#[must_use]
pub fn is_png_header_correct(bytes: &[u8]) -> bool {
  bytes.get(..8) == Some(&PNG_SIGNATURE[..])
}
