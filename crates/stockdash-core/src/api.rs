use crate::schema::quote::{QuotePayload, QuoteSeries};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use tracing::{debug, error, trace, warn};

/// Default root of the quote service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Source of price history for a ticker symbol.
///
/// Any failure (transport, status, or body) comes back as a single `Err`; callers do not
/// distinguish between them.
#[async_trait]
pub trait QuoteFetcher {
    async fn fetch(&self, symbol: &str) -> Result<QuoteSeries>;
}

/// `GET {base_url}/stock/{symbol}` against the quote service.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(http_client: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            error!("invalid quote service url {base_url}");
            e
        })?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("quote service url cannot be a base: {base_url}"));
        }
        Ok(HttpFetcher {
            http_client,
            base_url,
        })
    }

    /// Build a fetcher with its own client identifying as `user_agent`.
    pub fn with_user_agent(base_url: &str, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()?;
        Self::new(http_client, base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The symbol is percent-encoded as a single path segment.
    pub fn url(&self, symbol: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("quote service url cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .push("stock")
            .push(symbol);
        Ok(url)
    }
}

#[async_trait]
impl QuoteFetcher for HttpFetcher {
    async fn fetch(&self, symbol: &str) -> Result<QuoteSeries> {
        let url = self.url(symbol)?;
        trace!("fetching quotes from {url}");

        let response = self.http_client.get(url.clone()).send().await.map_err(|e| {
            error!("failed fetching response from {url}");
            e
        })?;

        let response = response.error_for_status().map_err(|e| {
            warn!("[{symbol}] quote service answered {:?}", e.status());
            e
        })?;

        let payload: QuotePayload = response.json().await.map_err(|e| {
            error!("failed deserializing from {url}");
            e
        })?;

        let series = payload.into_series().map_err(|e| {
            warn!("[{symbol}] {e}");
            e
        })?;

        debug!("[{symbol}] {} closing prices fetched", series.len());
        Ok(series)
    }
}
