//! Heuristic scores for institutions and authors over a set of publications.
//!
//! Scores are folded from the publication list into a fresh [`ScoreTable`] on every call; no
//! state survives between calls and the input is never modified.
//!
//! - Institution score, per institution entry of a publication:
//!   `0.4 * 1 + 0.4 * cited_by_count + 0.2 * sum(author h-indices)`
//! - Author score, per author of a publication: `5 * h_index + cited_by_count`
//!
//! The citation and h-index terms of the institution score are whole-publication values, so an
//! institution listed twice on one publication (two co-authors from it) is credited twice.
//!
//! # Examples
//!
//! ```
//! use scholarquest::{publication::*, scoring};
//!
//! let publications = vec![PublicationRecord::new("p")
//!   .with_institution(InstitutionLocation::named("MIT"))
//!   .with_author("A", "id-a", 5, "MIT")
//!   .with_citations(10)];
//!
//! let institutions = scoring::institution_scores(&publications);
//! assert!((institutions.get("MIT").unwrap() - 5.4).abs() < 1e-9);
//!
//! let authors = scoring::author_scores(&publications);
//! assert_eq!(authors.get("A"), Some(35));
//! ```

use super::*;

/// Weight of the constant publication-count term in an institution score.
pub const PUBLICATION_WEIGHT: f64 = 0.4;
/// Weight of the citation count in an institution score.
pub const CITATION_WEIGHT: f64 = 0.4;
/// Weight of the summed author h-indices in an institution score.
pub const H_INDEX_SUM_WEIGHT: f64 = 0.2;
/// Multiplier applied to an author's h-index in an author score.
pub const AUTHOR_H_INDEX_MULTIPLIER: u64 = 5;

/// A score that can absorb another score of the same kind.
///
/// Integer scores saturate instead of overflowing on very large upstream counts.
pub trait Accumulate: Copy {
  /// Adds `other` into `self`.
  fn accumulate(&mut self, other: Self);
}

impl Accumulate for f64 {
  fn accumulate(&mut self, other: Self) { *self += other; }
}

impl Accumulate for u64 {
  fn accumulate(&mut self, other: Self) { *self = self.saturating_add(other); }
}

/// A name → score mapping that remembers the order names were first inserted.
///
/// Insertion order is what breaks ties when the table is ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable<S> {
  /// Entries in first-insertion order
  entries: Vec<(String, S)>,
  /// Position of each name in `entries`
  index:   HashMap<String, usize>,
}

impl<S> Default for ScoreTable<S> {
  fn default() -> Self { Self { entries: Vec::new(), index: HashMap::new() } }
}

impl<S: Accumulate> ScoreTable<S> {
  /// Adds `score` to the running total for `name`, inserting it if new.
  pub fn add(&mut self, name: &str, score: S) {
    match self.index.get(name) {
      Some(&position) => self.entries[position].1.accumulate(score),
      None => {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), score));
      },
    }
  }

  /// The accumulated score for `name`.
  pub fn get(&self, name: &str) -> Option<S> {
    self.index.get(name).map(|&position| self.entries[position].1)
  }

  /// Entries in first-insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, S)> + '_ {
    self.entries.iter().map(|(name, score)| (name.as_str(), *score))
  }

  /// Number of distinct names.
  pub fn len(&self) -> usize { self.entries.len() }

  /// Whether no score has been recorded.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Consumes the table, yielding entries in first-insertion order.
  pub fn into_entries(self) -> Vec<(String, S)> { self.entries }
}

/// Score of one institution entry on a publication.
fn institution_entry_score(publication: &PublicationRecord) -> f64 {
  PUBLICATION_WEIGHT
    + CITATION_WEIGHT * publication.cited_by_count as f64
    + H_INDEX_SUM_WEIGHT * publication.author_h_index_sum() as f64
}

/// Computes an institution score table from a list of publications.
///
/// Every institution entry of every publication adds the publication's entry score to that
/// institution, including repeated entries within one publication. Entries without a name
/// accumulate under [`UNKNOWN`].
pub fn institution_scores(publications: &[PublicationRecord]) -> ScoreTable<f64> {
  publications.iter().fold(ScoreTable::default(), |mut table, publication| {
    let score = institution_entry_score(publication);
    for institution in &publication.institutions {
      table.add(institution.key(), score);
    }
    table
  })
}

/// Computes an author score table from a list of publications.
///
/// Authors are paired with h-indices by position; when the two sequences differ in length the
/// pairing stops at the shorter one. Authors are keyed by display name, so distinct authors
/// sharing a name share a score.
pub fn author_scores(publications: &[PublicationRecord]) -> ScoreTable<u64> {
  publications.iter().fold(ScoreTable::default(), |mut table, publication| {
    for (author, &h_index) in publication.authors.iter().zip(&publication.author_h_indices) {
      let score = (AUTHOR_H_INDEX_MULTIPLIER * u64::from(h_index))
        .saturating_add(publication.cited_by_count);
      table.add(author, score);
    }
    table
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn approx_eq(left: f64, right: f64) -> bool { (left - right).abs() < 1e-9 }

  #[test]
  fn test_single_institution_score() {
    let mut publication =
      PublicationRecord::new("p").with_institution(InstitutionLocation::named("MIT"));
    publication.cited_by_count = 10;
    publication.author_h_indices = vec![5];

    let scores = institution_scores(&[publication]);
    assert_eq!(scores.len(), 1);
    assert!(approx_eq(scores.get("MIT").unwrap(), 5.4));
  }

  #[test]
  fn test_institution_listed_twice_is_credited_twice() {
    let publication = PublicationRecord::new("p")
      .with_institution(InstitutionLocation::named("MIT"))
      .with_institution(InstitutionLocation::named("MIT"))
      .with_institution(InstitutionLocation::named("CMU"))
      .with_author("A", "a", 1, "MIT")
      .with_author("B", "b", 2, "MIT")
      .with_citations(3);

    let scores = institution_scores(&[publication]);
    // 0.4 + 0.4 * 3 + 0.2 * 3 = 2.2 per entry
    assert!(approx_eq(scores.get("MIT").unwrap(), 4.4));
    assert!(approx_eq(scores.get("CMU").unwrap(), 2.2));
  }

  #[test]
  fn test_institution_scores_accumulate_across_publications() {
    let first = PublicationRecord::new("a").with_institution(InstitutionLocation::named("MIT"));
    let second = PublicationRecord::new("b")
      .with_institution(InstitutionLocation::named("MIT"))
      .with_citations(5);

    let scores = institution_scores(&[first, second]);
    assert!(approx_eq(scores.get("MIT").unwrap(), 0.4 + 2.4));
  }

  #[test]
  fn test_unnamed_institutions_share_unknown_key() {
    let publication = PublicationRecord::new("p")
      .with_institution(InstitutionLocation::default())
      .with_institution(InstitutionLocation {
        country: Some("FR".into()),
        ..Default::default()
      });

    let scores = institution_scores(&[publication]);
    assert_eq!(scores.len(), 1);
    assert!(approx_eq(scores.get(UNKNOWN).unwrap(), 0.8));
  }

  #[test]
  fn test_author_scores() {
    let mut publication = PublicationRecord::new("p").with_citations(2);
    publication.authors = vec!["A".into(), "B".into()];
    publication.author_h_indices = vec![3, 7];

    let scores = author_scores(&[publication]);
    assert_eq!(scores.get("A"), Some(17));
    assert_eq!(scores.get("B"), Some(37));
  }

  #[test]
  fn test_author_scores_stop_at_shorter_sequence() {
    let mut publication = PublicationRecord::new("p").with_citations(1);
    publication.authors = vec!["A".into(), "B".into(), "C".into()];
    publication.author_h_indices = vec![2];

    let scores = author_scores(&[publication]);
    assert_eq!(scores.len(), 1);
    assert_eq!(scores.get("A"), Some(11));
    assert_eq!(scores.get("B"), None);
  }

  #[test]
  fn test_author_scores_accumulate_by_display_name() {
    let first = PublicationRecord::new("a").with_author("A", "id-1", 1, "X").with_citations(4);
    let second = PublicationRecord::new("b").with_author("A", "id-2", 2, "Y");

    let scores = author_scores(&[first, second]);
    assert_eq!(scores.get("A"), Some(9 + 10));
  }

  #[test]
  fn test_author_scores_saturate_on_huge_citation_counts() {
    let publications = vec![
      PublicationRecord::new("a").with_author("A", "id-a", 3, "X").with_citations(u64::MAX),
      PublicationRecord::new("b").with_author("A", "id-a", 3, "X").with_citations(u64::MAX),
    ];

    let scores = author_scores(&publications);
    assert_eq!(scores.get("A"), Some(u64::MAX));
  }

  #[test]
  fn test_empty_publications_yield_empty_tables() {
    assert!(institution_scores(&[]).is_empty());
    assert!(author_scores(&[]).is_empty());
  }

  #[test]
  fn test_scoring_is_repeatable() {
    let publications = vec![
      PublicationRecord::new("a")
        .with_institution(InstitutionLocation::named("MIT"))
        .with_author("A", "a", 4, "MIT")
        .with_citations(8),
      PublicationRecord::new("b")
        .with_institution(InstitutionLocation::named("ETH"))
        .with_author("B", "b", 6, "ETH"),
    ];
    let snapshot = publications.clone();

    assert_eq!(institution_scores(&publications), institution_scores(&publications));
    assert_eq!(author_scores(&publications), author_scores(&publications));
    assert_eq!(publications, snapshot);
  }

  #[test]
  fn test_table_preserves_first_insertion_order() {
    let mut table = ScoreTable::default();
    table.add("b", 1u64);
    table.add("a", 1);
    table.add("b", 1);
    let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(table.into_entries(), vec![("b".to_string(), 2), ("a".to_string(), 1)]);
  }
}
