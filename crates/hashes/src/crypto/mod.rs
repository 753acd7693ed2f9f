//! Cryptographic hash functions.

pub mod keccak;
pub mod sha256;
pub mod sha3;
pub mod sponge;

pub use keccak::KeccakState;
pub use sha3::{Keccak256, Sha3_256};
pub use sha256::Sha256;
pub use sponge::Domain;
