//! Client implementation for the OpenAlex scholarly metadata API.
//!
//! This module searches OpenAlex works by topic and converts each work into the common
//! [`PublicationRecord`] format. Building a record takes one author lookup per authorship and
//! one institution lookup per listed institution, all issued one after the other.
//!
//! The client uses OpenAlex's REST API (https://api.openalex.org/) and only ever reads the first
//! page of search results.
//!
//! # Examples
//!
//! ```no_run
//! use scholarquest::clients::{Fetcher, OpenAlexClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAlexClient::new();
//! let publications = client.fetch_publications("stochastic programming", None).await?;
//!
//! for publication in &publications {
//!   println!("{} ({} citations)", publication.title, publication.cited_by_count);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::*;

/// Default OpenAlex API base URL.
pub const OPENALEX_API_BASE: &str = "https://api.openalex.org";

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Title used for works without a display name.
const MISSING_TITLE: &str = "Title not available";

/// Response structure of the works search endpoint.
#[derive(Debug, Deserialize)]
struct WorksResponse {
  /// Works on the requested page
  results: Option<Vec<Work>>,
}

/// A work (publication) as returned by the search endpoint.
#[derive(Debug, Deserialize)]
struct Work {
  /// The work's title
  display_name:   Option<String>,
  /// Number of citations of the work
  cited_by_count: Option<u64>,
  /// One entry per credited author
  authorships:    Option<Vec<Authorship>>,
}

/// An author's credit on a work.
#[derive(Debug, Deserialize)]
struct Authorship {
  /// The credited author
  author:       AuthorRef,
  /// Institutions the author was affiliated with for this work
  institutions: Option<Vec<InstitutionRef>>,
}

/// Author reference embedded in an authorship.
#[derive(Debug, Deserialize)]
struct AuthorRef {
  /// OpenAlex author id, e.g. "https://openalex.org/A5003442464"
  id:           Option<String>,
  /// Author's display name
  display_name: Option<String>,
}

/// Institution reference embedded in an authorship.
#[derive(Debug, Deserialize)]
struct InstitutionRef {
  /// OpenAlex institution id
  id: Option<String>,
}

/// Response structure of the author endpoint.
#[derive(Debug, Deserialize)]
struct AuthorResponse {
  /// Citation metrics of the author
  summary_stats: Option<SummaryStats>,
  /// Known affiliations, most recent first
  affiliations:  Option<Vec<Affiliation>>,
}

/// Citation metrics of an author.
#[derive(Debug, Deserialize)]
struct SummaryStats {
  /// The author's h-index
  h_index: Option<u32>,
}

/// A single affiliation of an author.
#[derive(Debug, Deserialize)]
struct Affiliation {
  /// The affiliated institution
  institution: AffiliationInstitution,
}

/// Institution of an author affiliation.
#[derive(Debug, Deserialize)]
struct AffiliationInstitution {
  /// Name of the institution
  display_name: Option<String>,
}

/// Response structure of the institution endpoint.
#[derive(Debug, Deserialize)]
struct InstitutionResponse {
  /// Name of the institution
  display_name: Option<String>,
  /// Location of the institution
  geo:          Option<Geo>,
}

/// Geographic block of an institution.
#[derive(Debug, Default, Deserialize)]
struct Geo {
  /// Latitude
  latitude:  Option<f64>,
  /// Longitude
  longitude: Option<f64>,
  /// Country name
  country:   Option<String>,
  /// City name
  city:      Option<String>,
}

/// Client for fetching publications, authors and institutions from OpenAlex.
///
/// Non-success answers from OpenAlex are logged and mapped to the [`Fetcher`] defaults;
/// transport failures and undecodable bodies are returned as [`ScholarError`].
#[derive(Debug, Clone)]
pub struct OpenAlexClient {
  /// Internal web client used to connect to the API.
  client:   reqwest::Client,
  /// The base URL to use for the client.
  base_url: String,
}

impl OpenAlexClient {
  /// Creates a new OpenAlex client pointed at the public API.
  pub fn new() -> Self {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build().unwrap_or_else(|e| {
      warn!("Failed to build OpenAlex HTTP client ({e}), sending requests without {USER_AGENT}");
      reqwest::Client::default()
    });
    Self { client, base_url: OPENALEX_API_BASE.to_string() }
  }

  /// Points the client at another OpenAlex-compatible base URL, such as a mirror.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// The base URL requests are sent to.
  pub fn base_url(&self) -> &str { &self.base_url }

  /// Builds the first-page works search URL for a topic and optional country.
  ///
  /// # Examples
  ///
  /// ```
  /// # use scholarquest::clients::OpenAlexClient;
  /// let url = OpenAlexClient::new().works_url("stochastic programming", Some("us")).unwrap();
  /// let filter = url.query_pairs().find(|(key, _)| key == "filter").unwrap().1;
  /// assert_eq!(
  ///   filter,
  ///   "default.search:stochastic programming,authorships.countries:countries/us"
  /// );
  /// ```
  pub fn works_url(&self, topic: &str, country: Option<&str>) -> Result<Url, ScholarError> {
    let mut filter = format!("default.search:{topic}");
    if let Some(country) = country.map(str::trim).filter(|country| !country.is_empty()) {
      filter.push_str(&format!(",authorships.countries:countries/{country}"));
    }
    Ok(Url::parse_with_params(&format!("{}/works", self.base_url), &[
      ("page", "1"),
      ("filter", filter.as_str()),
    ])?)
  }

  /// Issues a GET request, returning the decoded body, or the status of a non-success answer.
  async fn get_json<T: DeserializeOwned>(
    &self,
    url: Url,
  ) -> Result<Result<T, StatusCode>, ScholarError> {
    debug!("Fetching from OpenAlex via: {url}");

    let response = self.client.get(url).send().await?;
    let status = response.status();
    debug!("OpenAlex response status: {status}");
    if !status.is_success() {
      return Ok(Err(status));
    }

    let text = response.text().await?;
    trace!("OpenAlex response: {text}");

    serde_json::from_str(&text)
      .map(Ok)
      .map_err(|e| ScholarError::ApiError(format!("Failed to parse JSON: {}", e)))
  }

  /// Converts one work into a publication record, resolving its authors and institutions.
  async fn build_record(&self, work: Work) -> Result<PublicationRecord, ScholarError> {
    let mut record = PublicationRecord {
      title: work.display_name.unwrap_or_else(|| MISSING_TITLE.to_string()),
      cited_by_count: work.cited_by_count.unwrap_or(0),
      ..Default::default()
    };

    for authorship in work.authorships.unwrap_or_default() {
      let author_id = authorship.author.id.unwrap_or_default();
      let summary = if author_id.is_empty() {
        AuthorSummary::default()
      } else {
        self.fetch_author_h_index(&author_id).await?
      };

      record.authors.push(authorship.author.display_name.unwrap_or_else(|| UNKNOWN.to_string()));
      record.author_ids.push(author_id);
      record.author_h_indices.push(summary.h_index);
      if !summary.institution.is_empty() {
        record.current_institution.push(CurrentInstitution { name: summary.institution });
      }

      for institution in authorship.institutions.unwrap_or_default() {
        let Some(institution_id) = institution.id else { continue };
        if let Some(details) = self.fetch_institution_details(&institution_id).await? {
          record.institutions.push(details.into());
        }
      }
    }

    Ok(record)
  }
}

impl Default for OpenAlexClient {
  fn default() -> Self { Self::new() }
}

#[async_trait]
impl Fetcher for OpenAlexClient {
  async fn fetch_publications(
    &self,
    topic: &str,
    country: Option<&str>,
  ) -> Result<Vec<PublicationRecord>, ScholarError> {
    let url = self.works_url(topic, country)?;
    let works = match self.get_json::<WorksResponse>(url).await? {
      Ok(response) => response.results.unwrap_or_default(),
      Err(status) => {
        warn!("Failed to retrieve publication data. Status code: {}", status.as_u16());
        return Ok(Vec::new());
      },
    };
    debug!("OpenAlex returned {} works for {topic:?}", works.len());

    let mut publications = Vec::with_capacity(works.len());
    for work in works {
      publications.push(self.build_record(work).await?);
    }
    Ok(publications)
  }

  async fn fetch_author_h_index(&self, author_id: &str) -> Result<AuthorSummary, ScholarError> {
    let url = Url::parse(&format!("{}/authors/{}", self.base_url, short_id(author_id)?))?;
    let author = match self.get_json::<AuthorResponse>(url).await? {
      Ok(author) => author,
      Err(status) => {
        debug!("No author record for {author_id} (status {status}), using defaults");
        return Ok(AuthorSummary::default());
      },
    };

    let h_index = author.summary_stats.and_then(|stats| stats.h_index).unwrap_or(0);
    let institution = author
      .affiliations
      .and_then(|affiliations| affiliations.into_iter().next())
      .and_then(|affiliation| affiliation.institution.display_name)
      .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(AuthorSummary { h_index, institution })
  }

  async fn fetch_institution_details(
    &self,
    institution_id: &str,
  ) -> Result<Option<InstitutionDetails>, ScholarError> {
    let url = Url::parse(&format!("{}/institutions/{}", self.base_url, short_id(institution_id)?))?;
    let institution = match self.get_json::<InstitutionResponse>(url).await? {
      Ok(institution) => institution,
      Err(status) => {
        debug!("No institution record for {institution_id} (status {status})");
        return Ok(None);
      },
    };

    let geo = institution.geo.unwrap_or_default();
    Ok(Some(InstitutionDetails {
      display_name: institution.display_name,
      latitude:     geo.latitude,
      longitude:    geo.longitude,
      country:      geo.country,
      city:         geo.city,
    }))
  }
}
