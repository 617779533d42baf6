use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ResearchError;

#[derive(Debug, Serialize)]
struct ResearchRequest<'a> {
    query: &'a str,
}

/// Raw payload of a successful `POST /api/research` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Echo of the submitted query.
    pub query: String,
    /// Raw search hits. Opaque to the client; only the count is displayed,
    /// and it is independent of how many sources were actually analyzed.
    pub search_results: Vec<Value>,
    /// Analyzed sources in relevance order.
    pub sources: Vec<Source>,
    /// Synthesized narrative report, kept verbatim.
    pub report: String,
}

/// One analyzed web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    /// Bullet summary as produced by the backend, markers included.
    pub summary: Vec<String>,
}

/// HTTP client for the research service.
pub struct ResearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl ResearchClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().context("building HTTP client")?;

        Ok(ResearchClient {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Submit one research query and wait for the complete response.
    ///
    /// The response is consumed as one atomic unit; there is no streaming
    /// and no retry.
    pub async fn research(&self, query: &str) -> Result<ResearchResult, ResearchError> {
        let url = format!("{}/api/research", self.base_url);
        debug!(%url, "sending research request");

        let response = self
            .client
            .post(&url)
            .json(&ResearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Protocol { status });
        }

        // Body read and decode stay separate: a connection dropped mid-read
        // is a transport failure, only a bad shape is a decode failure.
        let body = response.text().await?;
        let result: ResearchResult = serde_json::from_str(&body)?;

        debug!(
            hits = result.search_results.len(),
            sources = result.sources.len(),
            "research response decoded"
        );
        Ok(result)
    }
}
