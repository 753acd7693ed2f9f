//! Core traits for the fipshash engines.
//!
//! This crate provides the interface every digest in the workspace conforms
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | One-shot cryptographic hash functions | SHA-256, SHA3-256, Keccak-256 |
//!
//! # Error Types
//!
//! - [`LengthError`] - A buffer did not have the length an algorithm requires
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::LengthError;
