use super::*;

/// The four byte type tag of a PNG chunk.
///
/// The tag is always exactly four bytes. They're also meant to be ASCII
/// letters, and [`new`](Self::new) enforces that: a bad tag is a mistake in
/// the calling code, not bad input data, so it panics (or fails to compile,
/// when used for a `const`).
///
/// The case of each letter is a property bit, see the `is_` methods.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType([u8; 4]);
impl PngChunkType {
  /// Image Header
  pub const IHDR: Self = Self::new(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self::new(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self::new(*b"IEND");

  /// Makes a chunk type.
  ///
  /// ## Panics
  /// * If any byte isn't an ASCII letter.
  #[inline]
  #[must_use]
  #[track_caller]
  pub const fn new(tag: [u8; 4]) -> Self {
    match Self::try_new(tag) {
      Some(ty) => ty,
      None => panic!("PNG chunk types must be four ASCII letters"),
    }
  }

  /// Makes a chunk type, or `None` if any byte isn't an ASCII letter.
  #[inline]
  #[must_use]
  pub const fn try_new(tag: [u8; 4]) -> Option<Self> {
    let mut i = 0;
    while i < 4 {
      if !tag[i].is_ascii_alphabetic() {
        return None;
      }
      i += 1;
    }
    Some(Self(tag))
  }

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks (uppercase first letter) must be understood by a
  /// decoder.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
  /// Public chunks have an uppercase second letter.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }
  /// Safe-to-copy chunks have a lowercase fourth letter.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}
impl Debug for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}
impl TryFrom<[u8; 4]> for PngChunkType {
  type Error = [u8; 4];
  #[inline]
  fn try_from(tag: [u8; 4]) -> Result<Self, Self::Error> {
    Self::try_new(tag).ok_or(tag)
  }
}

#[test]
fn test_chunk_type_tags() {
  assert_eq!(PngChunkType::IHDR.as_bytes(), b"IHDR");
  assert!(PngChunkType::IDAT.is_critical());
  assert!(PngChunkType::IEND.is_public());
  assert!(!PngChunkType::new(*b"tEXt").is_critical());
  assert!(PngChunkType::new(*b"tEXt").is_safe_to_copy());
  assert_eq!(PngChunkType::try_new(*b"IH R"), None);
  assert_eq!(PngChunkType::try_from(*b"ID4T"), Err(*b"ID4T"));
}

#[test]
#[should_panic]
fn test_chunk_type_rejects_non_letters() {
  let _ = PngChunkType::new([b'I', b'H', b'D', 0xC3]);
}
