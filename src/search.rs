//! One search end to end: compiled query in, canonical documents out.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::normalize::{Document, ResultStats, extract_stats, normalize};
use crate::opoint::types::SearchRequest;
use crate::opoint::{OpointError, SearchClient};
use crate::query::{CompileError, QueryRequest};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Provider(#[from] OpointError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("failed to encode results: {0}")]
    Output(#[from] serde_json::Error),
}

/// The result set of a single search. Each search replaces the previous one wholesale.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    #[serde(rename = "searchterm")]
    pub search_term: String,
    #[serde(rename = "requestedarticles")]
    pub requested_articles: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ResultStats>,
    pub documents: Vec<Document>,
}

impl SearchOutcome {
    pub fn from_response(query: &QueryRequest, raw: &Value) -> Self {
        Self {
            search_term: query.term.clone(),
            requested_articles: query.requested_count,
            stats: extract_stats(raw),
            documents: normalize(raw),
        }
    }
}

pub async fn execute(
    client: &impl SearchClient,
    query: &QueryRequest,
) -> Result<SearchOutcome, OpointError> {
    info!(searchterm = %query.term, requested = query.requested_count, "search");

    let raw = client.search(&SearchRequest::from(query)).await?;
    let outcome = SearchOutcome::from_response(query, &raw);

    info!(documents = outcome.documents.len(), "search complete");
    Ok(outcome)
}
