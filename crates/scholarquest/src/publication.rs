//! Publication records and the resolved types produced from them.
//!
//! A [`PublicationRecord`] is the normalized form of one OpenAlex work: every author credited
//! on the work contributes one entry to each of the parallel author sequences, and every
//! resolved institution of every authorship contributes one [`InstitutionLocation`].
//!
//! # Examples
//!
//! ```
//! use scholarquest::publication::{InstitutionLocation, PublicationRecord};
//!
//! let publication = PublicationRecord::new("Deep learning")
//!   .with_institution(InstitutionLocation::named("MIT"))
//!   .with_author("Ada Lovelace", "https://openalex.org/A1", 12, "MIT")
//!   .with_citations(42);
//!
//! assert_eq!(publication.author_h_index_sum(), 12);
//! assert_eq!(publication.position_of("Ada Lovelace"), Some(0));
//! ```

use super::*;

/// A resolved institution attached to one authorship of a publication.
///
/// Every field may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionLocation {
  /// The institution's display name
  pub name:      Option<String>,
  /// Latitude of the institution's location
  pub latitude:  Option<f64>,
  /// Longitude of the institution's location
  pub longitude: Option<f64>,
  /// Country the institution is located in
  pub country:   Option<String>,
  /// City the institution is located in
  pub city:      Option<String>,
}

impl InstitutionLocation {
  /// An entry carrying only a name, with no geo information.
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Default::default() }
  }

  /// The name used as a scoring key, with missing names mapped to [`UNKNOWN`].
  pub fn key(&self) -> &str { self.name.as_deref().unwrap_or(UNKNOWN) }
}

impl From<InstitutionDetails> for InstitutionLocation {
  fn from(details: InstitutionDetails) -> Self {
    Self {
      name:      details.display_name,
      latitude:  details.latitude,
      longitude: details.longitude,
      country:   details.country,
      city:      details.city,
    }
  }
}

/// The current (first listed) affiliation of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentInstitution {
  /// The affiliation's display name
  pub name: String,
}

/// Detail record for an institution, as returned by the institution lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionDetails {
  /// The institution's display name
  pub display_name: Option<String>,
  /// Latitude from the institution's geo block
  pub latitude:     Option<f64>,
  /// Longitude from the institution's geo block
  pub longitude:    Option<f64>,
  /// Country from the institution's geo block
  pub country:      Option<String>,
  /// City from the institution's geo block
  pub city:         Option<String>,
}

/// The h-index and current affiliation of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
  /// The author's h-index
  pub h_index:     u32,
  /// Display name of the author's first listed affiliation, or [`UNKNOWN`]
  pub institution: String,
}

impl Default for AuthorSummary {
  fn default() -> Self { Self { h_index: 0, institution: UNKNOWN.to_string() } }
}

/// A single publication, normalized for scoring.
///
/// `authors`, `author_ids`, `author_h_indices` and `current_institution` are parallel:
/// index `i` of each describes the `i`-th credited author. Records built from upstream data
/// may break this (an author without an affiliation name adds no `current_institution`
/// entry), so consumers index them defensively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
  /// The publication's title
  pub title:               String,
  /// Institutions of every authorship, in authorship order
  pub institutions:        Vec<InstitutionLocation>,
  /// Current affiliation of each author
  pub current_institution: Vec<CurrentInstitution>,
  /// Author display names
  pub authors:             Vec<String>,
  /// Author identifiers
  pub author_ids:          Vec<String>,
  /// Number of times the publication has been cited
  pub cited_by_count:      u64,
  /// h-index of each author
  pub author_h_indices:    Vec<u32>,
}

impl PublicationRecord {
  /// An empty record with the given title.
  pub fn new(title: impl Into<String>) -> Self {
    Self { title: title.into(), ..Default::default() }
  }

  /// Appends an institution entry.
  pub fn with_institution(mut self, institution: InstitutionLocation) -> Self {
    self.institutions.push(institution);
    self
  }

  /// Appends an author, keeping the parallel author sequences aligned.
  pub fn with_author(
    mut self,
    name: impl Into<String>,
    id: impl Into<String>,
    h_index: u32,
    current_institution: impl Into<String>,
  ) -> Self {
    self.authors.push(name.into());
    self.author_ids.push(id.into());
    self.author_h_indices.push(h_index);
    self.current_institution.push(CurrentInstitution { name: current_institution.into() });
    self
  }

  /// Sets the citation count.
  pub fn with_citations(mut self, cited_by_count: u64) -> Self {
    self.cited_by_count = cited_by_count;
    self
  }

  /// Sum of the h-indices of every author on the publication.
  pub fn author_h_index_sum(&self) -> u64 {
    self.author_h_indices.iter().map(|&h| u64::from(h)).sum()
  }

  /// Position of the first author with this display name.
  pub fn position_of(&self, author: &str) -> Option<usize> {
    self.authors.iter().position(|name| name == author)
  }
}

/// A top-ranked author, resolved back to their identifier, h-index and institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProfessor {
  /// The author's display name
  pub name:               String,
  /// The author's identifier
  pub author_id:          String,
  /// The author's h-index
  pub h_index:            u32,
  /// The author's current institution
  pub current_university: String,
}

impl fmt::Display for TopProfessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: Author ID - {}, h-index - {}, Current University - {}",
      self.name, self.author_id, self.h_index, self.current_university
    )
  }
}
