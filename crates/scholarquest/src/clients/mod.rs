//! Sources of publication, author and institution metadata.
//!
//! Everything upstream of scoring goes through the [`Fetcher`] trait, so the ranking pipeline
//! can run against the live API or against fixed in-memory data.
//!
//! # Implementations
//!
//! - [`openalex`] - Client for the OpenAlex REST API
//! - [`memory`] - Fixed, in-memory records for tests and offline use
//!
//! # Examples
//!
//! ```no_run
//! use scholarquest::clients::{Fetcher, OpenAlexClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAlexClient::new();
//! let publications = client.fetch_publications("stochastic programming", Some("us")).await?;
//! let summary = client.fetch_author_h_index("https://openalex.org/A5003442464").await?;
//! let institution = client.fetch_institution_details("I74973139").await?;
//! # Ok(())
//! # }
//! ```

use super::*;

pub mod memory;
pub mod openalex;

pub use memory::StaticFetcher;
pub use openalex::OpenAlexClient;

/// The three lookups the ranking pipeline needs from a metadata source.
///
/// Upstream "not found" or other non-success answers are reported through defaults (an empty
/// list, [`AuthorSummary::default`], `None`), never as errors. Errors are reserved for
/// failures that should abort the whole query.
#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Fetches the first page of publications matching `topic`, optionally restricted to
  /// publications with an author in `country`.
  async fn fetch_publications(
    &self,
    topic: &str,
    country: Option<&str>,
  ) -> Result<Vec<PublicationRecord>, ScholarError>;

  /// Fetches an author's h-index and first listed affiliation.
  async fn fetch_author_h_index(&self, author_id: &str) -> Result<AuthorSummary, ScholarError>;

  /// Fetches the detail record of an institution, if it exists.
  async fn fetch_institution_details(
    &self,
    institution_id: &str,
  ) -> Result<Option<InstitutionDetails>, ScholarError>;
}

/// The trailing path segment of an OpenAlex identifier.
///
/// Accepts both full URLs (`https://openalex.org/A5003442464`) and bare ids (`A5003442464`).
pub fn short_id(id: &str) -> Result<&str, ScholarError> {
  id.trim_end_matches('/')
    .rsplit('/')
    .next()
    .filter(|segment| !segment.is_empty())
    .ok_or_else(|| ScholarError::InvalidIdentifier(id.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_short_id() {
    assert_eq!(short_id("https://openalex.org/A5003442464").unwrap(), "A5003442464");
    assert_eq!(short_id("https://openalex.org/I74973139/").unwrap(), "I74973139");
    assert_eq!(short_id("I74973139").unwrap(), "I74973139");
    assert!(matches!(short_id(""), Err(ScholarError::InvalidIdentifier(_))));
    assert!(matches!(short_id("///"), Err(ScholarError::InvalidIdentifier(_))));
  }
}
