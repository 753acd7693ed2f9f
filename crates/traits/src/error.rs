//! Error types shared by the engines.
//!
//! The hash functions themselves are total; errors only arise when a caller
//! hands a raw buffer to a building block that requires an exact size.

use core::fmt;

/// A buffer did not have the exact length an algorithm requires.
///
/// # Examples
///
/// ```
/// use traits::LengthError;
///
/// fn check(buf: &[u8]) -> Result<(), LengthError> {
///   if buf.len() == 200 {
///     Ok(())
///   } else {
///     Err(LengthError::new(200, buf.len()))
///   }
/// }
///
/// let err = check(&[0u8; 199]).unwrap_err();
/// assert_eq!(err.expected(), 200);
/// assert_eq!(err.actual(), 199);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthError {
  expected: usize,
  actual: usize,
}

impl LengthError {
  /// Create a new length error.
  #[inline]
  #[must_use]
  pub const fn new(expected: usize, actual: usize) -> Self {
    Self { expected, actual }
  }

  /// Length the algorithm requires, in bytes.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    self.expected
  }

  /// Length that was supplied, in bytes.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    self.actual
  }
}

impl fmt::Display for LengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid length: expected {} bytes, got {}", self.expected, self.actual)
  }
}

impl core::error::Error for LengthError {}
