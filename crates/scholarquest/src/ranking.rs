//! Selection of the top-ranked institutions and authors.
//!
//! Both selections sort by score descending with a stable sort, so equal scores keep the
//! order in which their names were first seen while scoring.

use std::cmp::Ordering;

use super::*;

/// Sorts table entries by score, highest first, keeping insertion order among ties.
fn ranked<S: scoring::Accumulate + PartialOrd>(table: ScoreTable<S>) -> Vec<(String, S)> {
  let mut entries = table.into_entries();
  entries.sort_by(|(_, left), (_, right)| right.partial_cmp(left).unwrap_or(Ordering::Equal));
  entries
}

/// Returns at most `limit` institutions from `scores`, highest score first.
///
/// # Examples
///
/// ```
/// use scholarquest::{ranking, ScoreTable};
///
/// let mut scores = ScoreTable::default();
/// scores.add("MIT", 1.0);
/// scores.add("CMU", 3.0);
/// scores.add("ETH", 1.0);
///
/// let top = ranking::top_institutions(&scores, 2);
/// assert_eq!(top, vec![("CMU".to_string(), 3.0), ("MIT".to_string(), 1.0)]);
/// ```
pub fn top_institutions(scores: &ScoreTable<f64>, limit: usize) -> Vec<(String, f64)> {
  let mut entries = ranked(scores.clone());
  entries.truncate(limit);
  entries
}

/// Returns at most `limit` resolved top authors for a list of publications.
///
/// Authors are ranked by [`scoring::author_scores`]. Each ranked author is resolved against
/// the first publication, in the given order, that credits them by name: the identifier,
/// h-index and current institution come from that publication's parallel sequences at the
/// author's position.
///
/// Resolution is lenient about sequences shorter than `authors`: a missing current
/// institution becomes [`UNKNOWN`] and a missing h-index becomes 0. An author with no
/// identifier at their position, or not credited on any publication, is skipped rather than
/// padded.
pub fn top_professors(publications: &[PublicationRecord], limit: usize) -> Vec<TopProfessor> {
  ranked(scoring::author_scores(publications))
    .into_iter()
    .filter_map(|(author, _)| resolve_professor(publications, author))
    .take(limit)
    .collect()
}

/// Resolves a ranked author name to a [`TopProfessor`] using the first publication crediting it.
fn resolve_professor(publications: &[PublicationRecord], author: String) -> Option<TopProfessor> {
  let (publication, position) = publications.iter().find_map(|publication| {
    publication.position_of(&author).map(|position| (publication, position))
  })?;

  let Some(author_id) = publication.author_ids.get(position) else {
    warn!("No identifier for {author} at position {position} of {:?}, skipping", publication.title);
    return None;
  };

  let h_index = publication.author_h_indices.get(position).copied().unwrap_or_else(|| {
    warn!("No h-index for {author} on {:?}, using 0", publication.title);
    0
  });

  let current_university = match publication.current_institution.get(position) {
    Some(institution) => institution.name.clone(),
    None => {
      warn!("No current institution for {author} on {:?}, using {UNKNOWN}", publication.title);
      UNKNOWN.to_string()
    },
  };

  debug!("Resolved {author} from {:?}", publication.title);
  Some(TopProfessor { name: author, author_id: author_id.clone(), h_index, current_university })
}
