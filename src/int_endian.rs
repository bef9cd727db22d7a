//! Integers stored as big-endian bytes, for building PNG records in place.

use bytemuck::{Pod, Zeroable};

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1, and a `repr(C)` struct of these and `u8` fields has no
/// padding. That's what lets [`IHDR`](crate::png::IHDR) be viewed directly as
/// its on-disk bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  /// The stored bytes, most significant first.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

#[test]
fn test_u32be_byte_order() {
  let x = U32BE::from_u32(0x0102_0304);
  assert_eq!(x.to_bytes(), [1, 2, 3, 4]);
  assert_eq!(bytemuck::bytes_of(&x), &[1, 2, 3, 4]);
  assert_eq!(u32::from(x), 0x0102_0304);
  assert_eq!(U32BE::from(0x0A0B_0C0D_u32).to_bytes(), [10, 11, 12, 13]);
}
