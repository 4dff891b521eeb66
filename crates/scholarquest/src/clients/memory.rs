//! An in-memory [`Fetcher`] over fixed records.
//!
//! Lookups never touch the network, which makes ranking runs deterministic.
//!
//! # Examples
//!
//! ```
//! use scholarquest::{
//!   clients::{Fetcher, StaticFetcher},
//!   publication::PublicationRecord,
//! };
//!
//! # async fn example() -> Result<(), scholarquest::ScholarError> {
//! let fetcher = StaticFetcher::new(vec![PublicationRecord::new("A paper")]);
//! assert_eq!(fetcher.fetch_publications("anything", None).await?.len(), 1);
//! assert_eq!(fetcher.fetch_author_h_index("A1").await?.h_index, 0);
//! # Ok(())
//! # }
//! ```

use super::*;

/// A [`Fetcher`] serving fixed publications, author summaries and institution details.
///
/// Every topic and country returns the same publications. Unknown ids fall back to the same
/// defaults as a non-success upstream answer.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
  /// Publications returned for every query
  publications: Vec<PublicationRecord>,
  /// Author summaries keyed by short id
  authors:      HashMap<String, AuthorSummary>,
  /// Institution details keyed by short id
  institutions: HashMap<String, InstitutionDetails>,
}

impl StaticFetcher {
  /// Creates a fetcher returning `publications` for every query.
  pub fn new(publications: Vec<PublicationRecord>) -> Self {
    Self { publications, ..Default::default() }
  }

  /// Registers the summary returned for `author_id`.
  pub fn with_author(mut self, author_id: &str, summary: AuthorSummary) -> Self {
    self.authors.insert(key(author_id), summary);
    self
  }

  /// Registers the details returned for `institution_id`.
  pub fn with_institution(mut self, institution_id: &str, details: InstitutionDetails) -> Self {
    self.institutions.insert(key(institution_id), details);
    self
  }
}

/// Lookup key for an id, so full URLs and bare ids address the same entry.
fn key(id: &str) -> String { short_id(id).unwrap_or(id).to_string() }

#[async_trait]
impl Fetcher for StaticFetcher {
  async fn fetch_publications(
    &self,
    topic: &str,
    country: Option<&str>,
  ) -> Result<Vec<PublicationRecord>, ScholarError> {
    debug!("Serving {} static publications for {topic:?} ({country:?})", self.publications.len());
    Ok(self.publications.clone())
  }

  async fn fetch_author_h_index(&self, author_id: &str) -> Result<AuthorSummary, ScholarError> {
    Ok(self.authors.get(&key(author_id)).cloned().unwrap_or_default())
  }

  async fn fetch_institution_details(
    &self,
    institution_id: &str,
  ) -> Result<Option<InstitutionDetails>, ScholarError> {
    Ok(self.institutions.get(&key(institution_id)).cloned())
  }
}
