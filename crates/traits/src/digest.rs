//! Cryptographic digest trait.
//!
//! Every message is hashed in a single call: the full length is known before
//! padding begins, so there is no update/finalize split.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
///
/// # Example
///
/// ```rust
/// # use traits::Digest;
/// # #[derive(Clone, Copy, Debug, Default)]
/// # struct SumDigest;
/// # impl Digest for SumDigest {
/// #   const OUTPUT_SIZE: usize = 4;
/// #   type Output = [u8; 4];
/// #   fn digest(data: &[u8]) -> Self::Output {
/// #     [data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b)); 4]
/// #   }
/// # }
/// let out = SumDigest::digest(b"abc");
/// assert_eq!(out.len(), SumDigest::OUTPUT_SIZE);
/// assert_eq!(SumDigest::digest_vectored(&[b"a".as_slice(), b"bc".as_slice()]), out);
/// ```
pub trait Digest: Copy + Default + Debug {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Compute the digest of `data`.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;

  /// Compute the digest of the concatenation of `bufs`.
  ///
  /// Buffers are joined before hashing since the engines need the whole
  /// message up front; the result equals `digest(&bufs.concat())`.
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    match bufs {
      [] => Self::digest(&[]),
      [one] => Self::digest(one),
      _ => {
        let joined: Vec<u8> = bufs.concat();
        Self::digest(&joined)
      }
    }
  }
}
