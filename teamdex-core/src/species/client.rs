///! PokeAPI client for fetching species records.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use super::types::SpeciesRecord;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Fetch port behind the species cache. Not-found and transport failures
/// both surface as errors; the cache decides what to absorb.
#[async_trait]
pub trait SpeciesFetcher: Send + Sync {
    /// `name` is already normalized (lowercase, hyphenated).
    async fn fetch(&self, name: &str) -> Result<SpeciesRecord>;
}

/// Real PokeAPI-backed fetcher.
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(POKEAPI_BASE_URL)
    }

    /// Point the client somewhere else, e.g. a local stub in tests or a
    /// mirror from config.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SpeciesFetcher for PokeApiClient {
    async fn fetch(&self, name: &str) -> Result<SpeciesRecord> {
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request for {}", name))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error {} for {}",
                response.status(),
                name
            ));
        }

        let record: SpeciesRecord = response
            .json()
            .await
            .with_context(|| format!("Failed to parse species JSON for {}", name))?;

        Ok(record)
    }
}
