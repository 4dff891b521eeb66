//! Error types for the scholarquest library.
//!
//! Upstream non-success statuses are not errors here: the fetch layer turns them into empty
//! or default values. What remains are the failures that abort a query:
//! - Transport errors talking to the API
//! - Response bodies that cannot be decoded
//! - Malformed URLs and identifiers
//!
//! # Examples
//!
//! ```no_run
//! use scholarquest::{clients::Fetcher, errors::ScholarError, OpenAlexClient};
//!
//! # async fn example() -> Result<(), ScholarError> {
//! let client = OpenAlexClient::new();
//! match client.fetch_publications("graph neural networks", None).await {
//!   Ok(publications) => println!("Fetched {} publications", publications.len()),
//!   Err(ScholarError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Errors that can occur when fetching and ranking publications.
#[derive(Error, Debug)]
pub enum ScholarError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API answered with a success status but a body we could not decode.
  ///
  /// The string parameter describes the decoding failure.
  #[error("API error: {0}")]
  ApiError(String),

  /// Failed to build a request URL from the configured base URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// An OpenAlex identifier had no usable trailing segment.
  #[error("Invalid identifier: {0:?}")]
  InvalidIdentifier(String),
}
