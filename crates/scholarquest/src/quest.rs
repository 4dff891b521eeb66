//! Ranking the leaders of a research topic end to end.
//!
//! [`rank_topic_leaders`] fetches the publications for a topic through a [`Fetcher`], scores
//! them and keeps the top institutions and authors. The resulting [`TopicLeaders`] renders as
//! the plain-text report printed by the console.

use super::*;

/// Number of institutions reported when no limit is given.
pub const DEFAULT_TOP_INSTITUTIONS: usize = 10;
/// Number of authors reported when no limit is given.
pub const DEFAULT_TOP_PROFESSORS: usize = 5;

/// The top institutions and authors of a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicLeaders {
  /// Institutions and their scores, highest first
  pub institutions: Vec<(String, f64)>,
  /// Resolved authors, highest score first
  pub professors:   Vec<TopProfessor>,
}

impl TopicLeaders {
  /// Scores `publications` and keeps the top entries of each ranking.
  pub fn from_publications(
    publications: &[PublicationRecord],
    top_institutions: usize,
    top_professors: usize,
  ) -> Self {
    let institution_scores = scoring::institution_scores(publications);
    Self {
      institutions: ranking::top_institutions(&institution_scores, top_institutions),
      professors:   ranking::top_professors(publications, top_professors),
    }
  }

  /// Whether nothing at all was ranked.
  pub fn is_empty(&self) -> bool { self.institutions.is_empty() && self.professors.is_empty() }
}

impl fmt::Display for TopicLeaders {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Top Institutions:")?;
    for (institution, score) in &self.institutions {
      writeln!(f, "{institution}: {score:.3}")?;
    }
    writeln!(f)?;
    writeln!(f, "Top Professors:")?;
    for professor in &self.professors {
      writeln!(f, "{professor}")?;
    }
    Ok(())
  }
}

/// Fetches, scores and ranks the publications of a topic.
///
/// `country` restricts the search to publications with an author in that country; `None` or a
/// blank string searches worldwide. An upstream failure that the fetcher maps to an empty
/// result yields empty rankings rather than an error.
///
/// # Examples
///
/// ```
/// use scholarquest::{clients::StaticFetcher, publication::*, quest};
///
/// # async fn example() -> Result<(), scholarquest::ScholarError> {
/// let fetcher = StaticFetcher::new(vec![PublicationRecord::new("p")
///   .with_institution(InstitutionLocation::named("MIT"))
///   .with_author("A", "https://openalex.org/A1", 5, "MIT")
///   .with_citations(10)]);
///
/// let leaders = quest::rank_topic_leaders(&fetcher, "anything", None, 10, 5).await?;
/// assert_eq!(leaders.institutions.len(), 1);
/// assert!((leaders.institutions[0].1 - 5.4).abs() < 1e-9);
/// assert_eq!(leaders.professors[0].name, "A");
/// # Ok(())
/// # }
/// ```
pub async fn rank_topic_leaders<F: Fetcher + ?Sized>(
  fetcher: &F,
  topic: &str,
  country: Option<&str>,
  top_institutions: usize,
  top_professors: usize,
) -> Result<TopicLeaders, ScholarError> {
  let country = country.map(str::trim).filter(|country| !country.is_empty());
  let publications = fetcher.fetch_publications(topic, country).await?;
  debug!("Ranking {} publications for {topic:?}", publications.len());

  Ok(TopicLeaders::from_publications(&publications, top_institutions, top_professors))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_report_format() {
    let leaders = TopicLeaders {
      institutions: vec![("MIT".into(), 5.4), ("CMU".into(), 1.23456)],
      professors:   vec![TopProfessor {
        name:               "B".into(),
        author_id:          "https://openalex.org/A2".into(),
        h_index:            7,
        current_university: "CMU".into(),
      }],
    };

    assert_eq!(
      leaders.to_string(),
      "Top Institutions:\nMIT: 5.400\nCMU: 1.235\n\nTop Professors:\nB: Author ID - \
       https://openalex.org/A2, h-index - 7, Current University - CMU\n"
    );
  }

  #[test]
  fn test_empty_report() {
    let leaders =
      TopicLeaders::from_publications(&[], DEFAULT_TOP_INSTITUTIONS, DEFAULT_TOP_PROFESSORS);
    assert!(leaders.is_empty());
    assert_eq!(leaders.to_string(), "Top Institutions:\n\nTop Professors:\n");
  }
}
