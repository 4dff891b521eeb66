//! A library for finding the leading institutions and authors ("professors") on a research
//! topic, using publication metadata from the OpenAlex scholarly API.
//!
//! Publications matching a topic are fetched through a [`Fetcher`], scored per institution
//! and per author, and the top entries of each are returned.
//!
//! # Example
//! ```rust,no_run
//! use scholarquest::{clients::OpenAlexClient, quest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let client = OpenAlexClient::new();
//!   let leaders =
//!     quest::rank_topic_leaders(&client, "stochastic programming", None, 10, 5).await?;
//!   println!("{leaders}");
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::{collections::HashMap, fmt};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod clients;
pub mod errors;
pub mod publication;
pub mod quest;
pub mod ranking;
pub mod scoring;
#[cfg(test)] mod tests;

pub use clients::{Fetcher, OpenAlexClient, StaticFetcher};
pub use errors::ScholarError;
pub use publication::{
  AuthorSummary, CurrentInstitution, InstitutionDetails, InstitutionLocation, PublicationRecord,
  TopProfessor,
};
pub use quest::TopicLeaders;
pub use scoring::ScoreTable;

/// Placeholder used wherever an upstream name is missing.
pub const UNKNOWN: &str = "Unknown";
