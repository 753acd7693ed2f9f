//! SHA-256 (FIPS 180-4).
//!
//! The whole message is padded up front, parsed into 64-byte blocks and run
//! through the compression function one block at a time.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use alloc::vec::Vec;

use traits::Digest;

use crate::util::rotr32;

/// Block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 32;

// Bytes reserved at the end of the final block for the big-endian bit length.
const LENGTH_FIELD_LEN: usize = 8;

const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Pad `message` to a multiple of [`BLOCK_LEN`] bytes.
///
/// Appends a single `1` bit (`0x80`), the minimum number of zero bytes so the
/// length is 56 mod 64, then the original length in bits as a big-endian
/// `u64`. Messages of 56..=63 bytes mod 64 spill into an extra block.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
  let bit_len = (message.len() as u64).wrapping_mul(8);
  let used = (message.len() + 1) % BLOCK_LEN;
  let zeros = (BLOCK_LEN - LENGTH_FIELD_LEN + BLOCK_LEN - used) % BLOCK_LEN;

  let mut out = Vec::with_capacity(message.len() + 1 + zeros + LENGTH_FIELD_LEN);
  out.extend_from_slice(message);
  out.push(0x80);
  out.resize(out.len() + zeros, 0);
  out.extend_from_slice(&bit_len.to_be_bytes());
  debug_assert_eq!(out.len() % BLOCK_LEN, 0);
  out
}

/// Expand one block into the 64-word message schedule.
#[must_use]
pub fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
  let mut w = [0u32; 64];
  let (words, _) = block.as_chunks::<4>();
  for (dst, word) in w.iter_mut().zip(words) {
    *dst = u32::from_be_bytes(*word);
  }
  for t in 16..64 {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
  w
}

/// Run the 64-round compression function over one block.
pub fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let w = schedule(block);

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (&k, &wt) in K.iter().zip(w.iter()) {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(k)
      .wrapping_add(wt);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(v);
  }
}

/// SHA-256.
///
/// ```
/// use fipshash::crypto::Sha256;
///
/// let out = Sha256::digest(b"abc");
/// assert_eq!(out[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
    let padded = pad(data);
    let (blocks, rest) = padded.as_chunks::<BLOCK_LEN>();
    assert!(rest.is_empty(), "sha256 padding produced a partial block");

    let mut state = H0;
    for block in blocks {
      compress(&mut state, block);
    }

    let mut out = [0u8; OUTPUT_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(state) {
      *chunk = word.to_be_bytes();
    }
    out
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Sha256::digest(data)
  }
}
