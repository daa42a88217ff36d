//! Crate-wide error taxonomy.
//!
//! Generation either completes in full or fails before any output is
//! produced; none of these variants are retried internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Rejected before generation starts.
  #[error("invalid configuration: {0}")]
  Config(String),

  /// Pixel buffer allocation failed. Fatal, no partial output is written.
  #[error("buffer allocation failed: {0}")]
  Alloc(#[from] std::collections::TryReserveError),

  /// Serialization boundary only; the finished canvas is never corrupted.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// Malformed pixmap header encountered while parsing.
  #[error("malformed pixmap header: {0}")]
  Format(String),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
