use clap::{builder::ArgAction, Parser};
use console::{style, Emoji};
use errors::SqErrors;
use scholarquest::{
  clients::{openalex::OPENALEX_API_BASE, OpenAlexClient},
  quest::{self, DEFAULT_TOP_INSTITUTIONS, DEFAULT_TOP_PROFESSORS},
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod errors;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static GLOBE: Emoji<'_, '_> = Emoji("🌍 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");

#[derive(Parser)]
#[command(
  author,
  version,
  about = "Find the top institutions and professors for a research topic"
)]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Topic of interest; skips the interactive prompts when given
  #[arg(long, short)]
  topic: Option<String>,

  /// Restrict results to authors from this country (used with --topic)
  #[arg(long, short)]
  country: Option<String>,

  /// Number of institutions to report
  #[arg(long, default_value_t = DEFAULT_TOP_INSTITUTIONS)]
  top_institutions: usize,

  /// Number of professors to report
  #[arg(long, default_value_t = DEFAULT_TOP_PROFESSORS)]
  top_professors: usize,

  /// Base URL of the OpenAlex API
  #[arg(long, default_value = OPENALEX_API_BASE)]
  base_url: String,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Asks for the topic (required) and country (blank to skip).
fn prompt_search() -> Result<(String, Option<String>), SqErrors> {
  let topic = dialoguer::Input::<String>::new()
    .with_prompt("Enter the topic of interest")
    .validate_with(|input: &String| -> Result<(), &str> {
      if input.trim().is_empty() {
        Err("A topic is required")
      } else {
        Ok(())
      }
    })
    .interact_text()?;

  let country = dialoguer::Input::<String>::new()
    .with_prompt("Enter the country (optional) Press enter for skip")
    .allow_empty(true)
    .interact_text()?;

  Ok((topic, Some(country)))
}

#[tokio::main]
async fn main() -> Result<(), SqErrors> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let (topic, country) = match cli.topic {
    Some(topic) => (topic, cli.country),
    None => prompt_search()?,
  };
  let country = country.filter(|country| !country.trim().is_empty());
  trace!("Searching {} for {topic:?} in {country:?}", cli.base_url);

  println!("{} Searching for: {}", style(LOOKING_GLASS).cyan(), style(&topic).yellow());
  match &country {
    Some(country) => println!("{} Country: {}", style(GLOBE).cyan(), style(country).yellow()),
    None => println!("{} Country: {}", style(GLOBE).cyan(), style("worldwide").yellow()),
  }

  let client = OpenAlexClient::new().with_base_url(cli.base_url);
  let leaders = quest::rank_topic_leaders(
    &client,
    topic.trim(),
    country.as_deref(),
    cli.top_institutions,
    cli.top_professors,
  )
  .await?;
  debug!("Ranked leaders: {leaders:?}");

  if leaders.is_empty() {
    println!("{} No publications found for: {}", style(WARNING).yellow(), style(&topic).yellow());
  }
  println!("\n{leaders}");
  Ok(())
}
