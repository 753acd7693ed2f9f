//! Keccak sponge: domain-separated padding, absorb, squeeze.
//!
//! Every variant exposed here uses rate 1088 bits / capacity 512 bits. The
//! state is kept in its serialized 200-byte form so message blocks can be
//! XORed straight into the rate prefix.

#![allow(clippy::indexing_slicing)] // RATE < STATE_LEN; block parsing is audited

use alloc::vec::Vec;

use super::keccak::{STATE_LEN, permute_bytes};
use crate::util::xor_in_place;

/// Rate in bytes (1088 bits).
pub const RATE: usize = 136;

/// Capacity in bytes (512 bits).
pub const CAPACITY: usize = STATE_LEN - RATE;

const RATE_BITS: usize = RATE * 8;

/// Domain-separation suffix XORed into the first padding byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Domain {
  /// Pre-standard Keccak: only the mandatory terminating bit, no separation.
  Keccak = 0x01,
  /// FIPS 202 SHA3-*.
  Sha3 = 0x06,
  /// FIPS 202 SHAKE*.
  Shake = 0x1f,
}

impl Domain {
  /// Raw suffix byte.
  #[inline]
  #[must_use]
  pub const fn suffix(self) -> u8 {
    self as u8
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Keccak => "keccak",
      Self::Sha3 => "sha3",
      Self::Shake => "shake",
    }
  }
}

/// Padding for a message of `message_len` bytes.
///
/// This is `pad10*1` with the suffix bits in front, written in the bit order
/// the little-endian lane layout reads them: the suffix byte lands as-is in
/// the first padding byte and the closing `1` bit is `0x80` in the last. The
/// padding is `(j + 2) / 8` bytes where `j = (-m - 2) mod 1088` and `m` is the
/// message length in bits, so it is never empty and a rate-aligned message
/// gets a full extra block.
#[must_use]
pub fn pad(message_len: usize, suffix: u8) -> Vec<u8> {
  let m = (message_len % RATE) * 8;
  let j = (RATE_BITS - (m + 2) % RATE_BITS) % RATE_BITS;
  let len = (j + 2) / 8;

  let mut out = alloc::vec![0u8; len];
  if let Some(first) = out.first_mut() {
    *first ^= suffix;
  }
  if let Some(last) = out.last_mut() {
    *last ^= 0x80;
  }
  out
}

/// XOR each rate-sized block of `padded` into `state`, permuting after each.
///
/// # Panics
///
/// Panics if `padded` is not a whole number of blocks.
pub fn absorb(state: &mut [u8; STATE_LEN], padded: &[u8]) {
  let (blocks, rest) = padded.as_chunks::<RATE>();
  assert!(rest.is_empty(), "sponge input is not a multiple of the rate");
  for block in blocks {
    xor_in_place(&mut state[..RATE], block);
    permute_bytes(state);
  }
}

/// Read `out_len` bytes from the rate prefix, permuting between blocks.
#[must_use]
pub fn squeeze(state: &mut [u8; STATE_LEN], out_len: usize) -> Vec<u8> {
  let mut out = Vec::with_capacity(out_len.div_ceil(RATE) * RATE);
  loop {
    out.extend_from_slice(&state[..RATE]);
    if out.len() >= out_len {
      out.truncate(out_len);
      return out;
    }
    permute_bytes(state);
  }
}

/// Hash `message` under `suffix`, returning `output_bits / 8` bytes.
///
/// ```
/// use fipshash::crypto::sponge::{Domain, sponge};
///
/// let long = sponge(b"abc", Domain::Shake.suffix(), 8 * 300);
/// assert_eq!(long.len(), 300);
/// assert_eq!(sponge(b"abc", Domain::Shake.suffix(), 256)[..], long[..32]);
/// ```
#[must_use]
pub fn sponge(message: &[u8], suffix: u8, output_bits: usize) -> Vec<u8> {
  let padding = pad(message.len(), suffix);
  let mut padded = Vec::with_capacity(message.len() + padding.len());
  padded.extend_from_slice(message);
  padded.extend_from_slice(&padding);

  let mut state = [0u8; STATE_LEN];
  absorb(&mut state, &padded);
  squeeze(&mut state, output_bits / 8)
}
