//! SHA-256, SHA3-256 and Keccak-256 built from FIPS 180-4 and FIPS 202.
//!
//! This crate is `no_std` (it needs `alloc` for the padded message buffer)
//! and has no runtime dependencies beyond the optional `hex` encoder.
//! Dev-only dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The SHA-256 engine, the Keccak-f[1600] permutation, the
//!   sponge, and the digest types built on them.
//! - [`util`] - Word rotations and buffer XOR.
//!
//! # Quick Start
//!
//! ```
//! let d = fipshash::sha256(b"abc");
//! assert_eq!(d.len(), 32);
//!
//! // Same sponge, different suffix: never interchangeable.
//! assert_ne!(fipshash::sha3_256(b"abc"), fipshash::keccak256(b"abc"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `hex` | Yes | Lowercase hex wrappers (`sha256_hex`, ...) |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "hex")]
use alloc::string::String;

pub mod crypto;
pub mod util;

pub use traits::{Digest, LengthError};

use crate::crypto::{Keccak256, Sha3_256, Sha256};

/// SHA-256 of `message`.
#[inline]
#[must_use]
pub fn sha256(message: &[u8]) -> [u8; 32] {
  Sha256::digest(message)
}

/// SHA3-256 of `message`.
#[inline]
#[must_use]
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
  Sha3_256::digest(message)
}

/// Original Keccak-256 of `message` (`0x01` suffix, not SHA3-256).
#[inline]
#[must_use]
pub fn keccak256(message: &[u8]) -> [u8; 32] {
  Keccak256::digest(message)
}

/// Lowercase hex SHA-256.
///
/// ```
/// assert_eq!(
///   fipshash::sha256_hex(b""),
///   "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[cfg(feature = "hex")]
#[must_use]
pub fn sha256_hex(message: &[u8]) -> String {
  hex::encode(sha256(message))
}

/// Lowercase hex SHA3-256.
#[cfg(feature = "hex")]
#[must_use]
pub fn sha3_256_hex(message: &[u8]) -> String {
  hex::encode(sha3_256(message))
}

/// Lowercase hex Keccak-256.
#[cfg(feature = "hex")]
#[must_use]
pub fn keccak256_hex(message: &[u8]) -> String {
  hex::encode(keccak256(message))
}
