//! Error types for the sq console.
//!
//! Failures are either prompt errors (no terminal, interrupted input) or errors from the
//! underlying scholarquest library. Both are transparent so the original message reaches the
//! user unchanged.

use thiserror::Error;

/// Errors that can occur while running the console.
#[derive(Error, Debug)]
pub enum SqErrors {
  /// Errors from user interaction prompts
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Errors from the underlying scholarquest library
  #[error(transparent)]
  Scholar(#[from] scholarquest::errors::ScholarError),
}
