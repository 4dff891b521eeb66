use serde_json::json;
use wiremock::{
  matchers::{method, path},
  Mock, MockServer, ResponseTemplate,
};

use super::*;

fn sample_publications() -> Vec<PublicationRecord> {
  vec![
    PublicationRecord::new("Two-stage stochastic programs")
      .with_institution(InstitutionLocation::named("MIT"))
      .with_institution(InstitutionLocation::named("Carnegie Mellon University"))
      .with_author("Ann John", "https://openalex.org/A1", 10, "Carnegie Mellon University")
      .with_author("Bo Li", "https://openalex.org/A2", 4, "MIT")
      .with_citations(30),
    PublicationRecord::new("Chance constraints")
      .with_institution(InstitutionLocation::named("Carnegie Mellon University"))
      .with_author("Ann John", "https://openalex.org/A1", 10, "Carnegie Mellon University")
      .with_citations(5),
    PublicationRecord::new("Unaffiliated note")
      .with_institution(InstitutionLocation::default())
      .with_author("Cy Ng", "https://openalex.org/A3", 1, UNKNOWN),
  ]
}

#[test]
fn test_score_keys_come_from_publications() {
  let publications = sample_publications();

  let institutions = scoring::institution_scores(&publications);
  let known: Vec<&str> =
    publications.iter().flat_map(|p| p.institutions.iter().map(InstitutionLocation::key)).collect();
  assert!(institutions.iter().all(|(name, score)| known.contains(&name) && score >= 0.0));

  let authors = scoring::author_scores(&publications);
  assert!(authors
    .iter()
    .all(|(name, _)| publications.iter().any(|p| p.position_of(name).is_some())));
}

#[traced_test]
#[tokio::test]
async fn test_rank_with_static_fetcher() -> anyhow::Result<()> {
  let fetcher = StaticFetcher::new(sample_publications());
  let leaders =
    quest::rank_topic_leaders(&fetcher, "stochastic programming", Some(" "), 10, 5).await?;

  // CMU: (0.4 + 12 + 2.8) + (0.4 + 2 + 2) = 19.6, MIT: 15.2, Unknown: 0.4 + 0.2 = 0.6
  let names: Vec<_> = leaders.institutions.iter().map(|(name, _)| name.as_str()).collect();
  assert_eq!(names, vec!["Carnegie Mellon University", "MIT", UNKNOWN]);
  assert!((leaders.institutions[0].1 - 19.6).abs() < 1e-9);
  assert!((leaders.institutions[1].1 - 15.2).abs() < 1e-9);

  // Ann John: (50 + 30) + (50 + 5) = 135, Bo Li: 20 + 30 = 50, Cy Ng: 5
  let professors: Vec<_> = leaders.professors.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(professors, vec!["Ann John", "Bo Li", "Cy Ng"]);
  assert_eq!(leaders.professors[0].h_index, 10);
  assert_eq!(leaders.professors[1].current_university, "MIT");
  Ok(())
}

#[tokio::test]
async fn test_rank_limits_are_honored() -> anyhow::Result<()> {
  let fetcher = StaticFetcher::new(sample_publications());
  let leaders = quest::rank_topic_leaders(&fetcher, "topic", None, 1, 2).await?;
  assert_eq!(leaders.institutions.len(), 1);
  assert_eq!(leaders.professors.len(), 2);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_upstream_404_ranks_nothing() -> anyhow::Result<()> {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/works"))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let client = OpenAlexClient::new().with_base_url(server.uri());
  let publications = client.fetch_publications("stochastic programming", None).await?;
  assert!(publications.is_empty());
  assert!(scoring::institution_scores(&publications).is_empty());
  assert!(scoring::author_scores(&publications).is_empty());
  assert!(ranking::top_institutions(&scoring::institution_scores(&publications), 10).is_empty());
  assert!(ranking::top_professors(&publications, 5).is_empty());

  let leaders = quest::rank_topic_leaders(&client, "stochastic programming", None, 10, 5).await?;
  assert!(leaders.is_empty());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_rank_against_openalex_responses() -> anyhow::Result<()> {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/works"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "results": [{
        "display_name": "Sampling methods",
        "cited_by_count": 10,
        "authorships": [{
          "author": { "id": "https://openalex.org/A7", "display_name": "Dee Roy" },
          "institutions": [{ "id": "https://openalex.org/I5" }]
        }]
      }]
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/authors/A7"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "summary_stats": { "h_index": 5 },
      "affiliations": [{ "institution": { "display_name": "ETH Zurich" } }]
    })))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/institutions/I5"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "display_name": "ETH Zurich",
      "geo": { "city": "Zurich", "country": "Switzerland" }
    })))
    .mount(&server)
    .await;

  let client = OpenAlexClient::new().with_base_url(server.uri());
  let leaders = quest::rank_topic_leaders(&client, "sampling", None, 10, 5).await?;

  assert_eq!(leaders.institutions.len(), 1);
  assert_eq!(leaders.institutions[0].0, "ETH Zurich");
  assert!((leaders.institutions[0].1 - 5.4).abs() < 1e-9);
  assert_eq!(leaders.professors, vec![TopProfessor {
    name:               "Dee Roy".into(),
    author_id:          "https://openalex.org/A7".into(),
    h_index:            5,
    current_university: "ETH Zurich".into(),
  }]);
  Ok(())
}
