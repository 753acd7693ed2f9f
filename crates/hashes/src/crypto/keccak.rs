//! Keccak-f[1600] permutation (FIPS 202 §3).
//!
//! The state is a 5×5 matrix of 64-bit lanes addressed as `lanes[x][y]`.
//! Serialized, lane `(x, y)` occupies bytes `8 * (x + 5 * y)..` in
//! little-endian order, which is the layout the sponge XORs message blocks
//! into.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

use traits::LengthError;

use crate::util::rotl64;

/// Number of rounds in Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Serialized state width in bytes (1600 bits).
pub const STATE_LEN: usize = 200;

const LANES: usize = 25;

// Round constants.
const RC: [u64; ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// ρ rotation offsets, indexed by `x + 5 * y`.
const RHO: [u32; LANES] = [
  0, 1, 62, 28, 27, //
  36, 44, 6, 55, 20, //
  3, 10, 43, 25, 39, //
  41, 45, 15, 21, 8, //
  18, 2, 61, 56, 14,
];

// π destinations: lane `x + 5 * y` moves to `y + 5 * ((2x + 3y) mod 5)`.
const PI: [usize; LANES] = [
  0, 10, 20, 5, 15, //
  16, 1, 11, 21, 6, //
  7, 17, 2, 12, 22, //
  23, 8, 18, 3, 13, //
  14, 24, 9, 19, 4,
];

type Lanes = [[u64; 5]; 5];

/// The 1600-bit Keccak state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeccakState {
  lanes: Lanes,
}

impl KeccakState {
  /// All-zero state, the starting point of every sponge.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { lanes: [[0u64; 5]; 5] }
  }

  /// Lane at column `x`, row `y`.
  ///
  /// # Panics
  ///
  /// Panics if `x` or `y` is not below 5.
  #[inline]
  #[must_use]
  pub fn lane(&self, x: usize, y: usize) -> u64 {
    self.lanes[x][y]
  }

  /// Decode 200 little-endian bytes.
  #[must_use]
  pub fn from_bytes(bytes: &[u8; STATE_LEN]) -> Self {
    let mut lanes = [[0u64; 5]; 5];
    let (chunks, _) = bytes.as_chunks::<8>();
    for (i, chunk) in chunks.iter().enumerate() {
      lanes[i % 5][i / 5] = u64::from_le_bytes(*chunk);
    }
    Self { lanes }
  }

  /// Encode as 200 little-endian bytes.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; STATE_LEN] {
    let mut out = [0u8; STATE_LEN];
    let (chunks, _) = out.as_chunks_mut::<8>();
    for (i, chunk) in chunks.iter_mut().enumerate() {
      *chunk = self.lanes[i % 5][i / 5].to_le_bytes();
    }
    out
  }

  /// Apply all 24 rounds in place.
  pub fn permute(&mut self) {
    for &rc in &RC {
      round(&mut self.lanes, rc);
    }
  }
}

impl TryFrom<&[u8]> for KeccakState {
  type Error = LengthError;

  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    let bytes: &[u8; STATE_LEN] = bytes
      .try_into()
      .map_err(|_| LengthError::new(STATE_LEN, bytes.len()))?;
    Ok(Self::from_bytes(bytes))
  }
}

/// Permute a serialized 200-byte state in place.
///
/// # Panics
///
/// Panics if `state` is not exactly [`STATE_LEN`] bytes; it is never truncated
/// or padded.
pub fn permute_bytes(state: &mut [u8]) {
  let mut st = match KeccakState::try_from(&*state) {
    Ok(st) => st,
    Err(err) => panic!("keccak-f[1600] state: {err}"),
  };
  st.permute();
  state.copy_from_slice(&st.to_bytes());
}

#[inline(always)]
fn round(a: &mut Lanes, rc: u64) {
  theta(a);
  let b = rho_pi(a);
  chi(a, &b);
  iota(a, rc);
}

// θ: XOR each lane with the parities of two neighbouring columns.
#[inline(always)]
fn theta(a: &mut Lanes) {
  let mut c = [0u64; 5];
  for (x, col) in a.iter().enumerate() {
    c[x] = col[0] ^ col[1] ^ col[2] ^ col[3] ^ col[4];
  }
  for (x, col) in a.iter_mut().enumerate() {
    let d = c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1);
    for lane in col.iter_mut() {
      *lane ^= d;
    }
  }
}

// ρ and π fused: rotate every lane, then relocate it.
#[inline(always)]
fn rho_pi(a: &Lanes) -> Lanes {
  let mut b = [[0u64; 5]; 5];
  for i in 0..LANES {
    let dst = PI[i];
    b[dst % 5][dst / 5] = rotl64(a[i % 5][i / 5], RHO[i]);
  }
  b
}

// χ: the only non-linear step, applied along each row.
#[inline(always)]
fn chi(a: &mut Lanes, b: &Lanes) {
  for y in 0..5 {
    for x in 0..5 {
      a[x][y] = b[x][y] ^ (!b[(x + 1) % 5][y] & b[(x + 2) % 5][y]);
    }
  }
}

#[inline(always)]
fn iota(a: &mut Lanes, rc: u64) {
  a[0][0] ^= rc;
}
