//! Word rotations and buffer XOR shared by both engines.
//!
//! Rotation amounts are taken modulo the word width, so `rotl32(x, 32) == x`.

#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n % u32::BITS)
}

#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n % u32::BITS)
}

#[inline(always)]
pub const fn rotl64(x: u64, n: u32) -> u64 {
  x.rotate_left(n % u64::BITS)
}

#[inline(always)]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n % u64::BITS)
}

/// XOR `src` into `dst` byte by byte.
///
/// # Panics
///
/// Panics if the buffers differ in length.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
  assert_eq!(dst.len(), src.len(), "xor operands must have equal length");
  for (d, s) in dst.iter_mut().zip(src) {
    *d ^= *s;
  }
}
