//! SHA3-256 (FIPS 202) and the original Keccak-256.
//!
//! Both run the same sponge (rate 1088, capacity 512) and differ only in the
//! padding suffix. Their digests are unrelated: Keccak-256 is *not* SHA3-256.

use traits::Digest;

use super::sponge::{Domain, sponge};

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 32;

#[inline]
fn sponge_256(data: &[u8], domain: Domain) -> [u8; OUTPUT_LEN] {
  let squeezed = sponge(data, domain.suffix(), OUTPUT_LEN * 8);
  let mut out = [0u8; OUTPUT_LEN];
  out.copy_from_slice(&squeezed);
  out
}

/// SHA3-256.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_256;

impl Sha3_256 {
  /// Compute the digest of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
    sponge_256(data, Domain::Sha3)
  }
}

impl Digest for Sha3_256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Sha3_256::digest(data)
  }
}

/// Keccak-256 with the pre-standard `0x01` padding (as used by Ethereum).
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256;

impl Keccak256 {
  /// Compute the digest of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
    sponge_256(data, Domain::Keccak)
  }
}

impl Digest for Keccak256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Keccak256::digest(data)
  }
}
