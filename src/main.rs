use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use article_explorer::format::{format_json, format_outcome};
use article_explorer::opoint::OpointClient;
use article_explorer::query::{Scope, Scopes, build_request};
use article_explorer::search::{self, SearchError};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Search Opoint news articles from the terminal.
///
/// Provider operators (AND, OR, SPAN/n(...), [m..n], lang:xx) are passed through as typed.
#[derive(Parser)]
#[command(name = "article-explorer", version, about)]
struct Cli {
    /// Search term
    #[arg(required = true)]
    query: Vec<String>,

    /// Number of articles to request (1-50; invalid input falls back to 1)
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    count: String,

    /// Restrict matching to a field. Repeatable; default is all fields.
    /// Only a single field actually scopes the query.
    #[arg(short, long = "field", value_enum)]
    fields: Vec<Scope>,

    /// API token (default: $OPOINT_API_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// API base URL (default: $OPOINT_BASE_URL or https://api.opoint.com)
    #[arg(long)]
    base_url: Option<String>,

    /// Print canonical documents as JSON
    #[arg(long)]
    json: bool,

    /// Show full text and body sentences for every result
    #[arg(short, long)]
    expand: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "search failed");
            eprintln!("{}", failure_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// The one line printed to stderr for a failed search.
fn failure_line(error: &SearchError) -> String {
    format!("error: {error}")
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "article_explorer=debug"
    } else {
        "article_explorer=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}

async fn run(cli: Cli) -> Result<(), SearchError> {
    let scopes = if cli.fields.is_empty() {
        Scopes::default()
    } else {
        Scopes::only(&cli.fields)
    };
    let query = build_request(&cli.query.join(" "), scopes, &cli.count)?;
    debug!(?query, "query compiled");

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(SearchError::HttpClient)?;
    let client = OpointClient::from_env(http, cli.token, cli.base_url)?;

    let outcome = search::execute(&client, &query).await?;

    let output = if cli.json {
        format_json(&outcome)?
    } else {
        format_outcome(&outcome, cli.expand)
    };
    println!("{output}");
    Ok(())
}
