//! Metadata Resolver Service
//!
//! Resolves a token URI to its metadata document. Three URI forms are
//! accepted; content-addressed URIs are fetched through an ordered list of
//! gateway mirrors with sequential fallback.
//!
//! ## Resolution Flow
//!
//! 1. Classify the URI by literal prefix (ipfs / inline JSON / plain HTTP)
//! 2. Content-addressed: walk the gateway list in order, first success wins
//! 3. Rewrite a nested `ipfs://` image reference through the gateway that
//!    succeeded, so the caller can render it without a second pass
//!
//! Gateway attempts are strictly sequential. Racing them would be faster on
//! failure but makes the remembered gateway nondeterministic, so the image
//! rewrite would no longer match the document fetch.
//!
//! Each call is independent: no cache, no state shared across invocations.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::metadata::TokenMetadata;
use crate::resolver::gateways::{gateway_url, rewrite_ipfs_url, GatewayList};
use crate::resolver::uri::TokenUri;
use crate::types::{MintgateError, Result};

/// Transport-level fetch failure (DNS, connect, timeout, body read)
#[derive(Debug, Clone, thiserror::Error)]
#[error("network error: {0}")]
pub struct FetchError(pub String);

/// Status and body of a completed HTTP GET
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing JSON GETs (allows mocking in tests)
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET a URL with `Accept: application/json`. Only transport failures
    /// surface as `Err`; a non-success status is a valid response.
    async fn get(&self, url: &str) -> std::result::Result<FetchResponse, FetchError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent("mintgate/0.1")
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

#[async_trait]
impl HttpFetch for HttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}

/// Configuration for the metadata resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Gateway mirrors in retry-priority order
    pub gateways: GatewayList,
    /// Timeout for each individual HTTP request
    pub request_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            gateways: GatewayList::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Metadata Resolver Service
///
/// Generic over the fetch capability so tests can script responses.
pub struct MetadataResolver<F: HttpFetch> {
    fetch: Arc<F>,
    gateways: GatewayList,
}

impl MetadataResolver<HttpFetcher> {
    /// Create a resolver backed by a real HTTP client
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            fetch: Arc::new(HttpFetcher::new(config.request_timeout)),
            gateways: config.gateways,
        }
    }
}

impl<F: HttpFetch> MetadataResolver<F> {
    /// Create a resolver with an injected fetch implementation
    pub fn with_fetcher(gateways: GatewayList, fetch: Arc<F>) -> Self {
        Self { fetch, gateways }
    }

    /// Resolve a token URI to its metadata document
    pub async fn resolve(&self, uri: &str) -> Result<TokenMetadata> {
        match TokenUri::classify(uri) {
            TokenUri::Ipfs(cid) => self.resolve_ipfs(&cid).await,
            TokenUri::InlineJson(encoded) => resolve_inline(&encoded),
            TokenUri::Http(url) => self.resolve_http(&url).await,
        }
    }

    /// Fetch a directly addressable URL, one attempt, no fallback
    async fn resolve_http(&self, url: &str) -> Result<TokenMetadata> {
        debug!(url = %url, "Fetching metadata URL");

        let response = self
            .fetch
            .get(url)
            .await
            .map_err(|e| MintgateError::ResolutionFailed(e.to_string()))?;

        if !response.is_success() {
            return Err(MintgateError::ResolutionFailed(format!(
                "http status {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|_| MintgateError::ResolutionFailed("invalid json".to_string()))
    }

    /// Walk the gateway list in order until one serves a parseable document
    async fn resolve_ipfs(&self, cid: &str) -> Result<TokenMetadata> {
        let mut last_error: Option<String> = None;

        for base in self.gateways.iter() {
            let url = gateway_url(base, cid);
            debug!(cid = %cid, gateway = %base, "Trying gateway");

            match self.try_gateway(&url).await {
                Ok(mut document) => {
                    debug!(cid = %cid, gateway = %base, "Gateway served document");

                    // The document came from this gateway, so its nested
                    // image reference is reachable there too
                    if let Some(rewritten) = rewrite_ipfs_url(&document.image, base) {
                        document.image = rewritten;
                    }

                    return Ok(document);
                }
                Err(reason) => {
                    warn!(
                        cid = %cid,
                        gateway = %base,
                        error = %reason,
                        "Gateway failed, trying next"
                    );
                    last_error = Some(reason);
                }
            }
        }

        Err(MintgateError::ResolutionFailed(
            last_error.unwrap_or_else(|| "all gateways failed".to_string()),
        ))
    }

    /// One gateway attempt; every failure mode collapses to a reason string
    async fn try_gateway(&self, url: &str) -> std::result::Result<TokenMetadata, String> {
        let response = self.fetch.get(url).await.map_err(|e| e.to_string())?;

        if !response.is_success() {
            return Err(format!("http status {}", response.status));
        }

        serde_json::from_str(&response.body).map_err(|_| "invalid json".to_string())
    }
}

/// Decode and parse an inline `data:application/json,` document
fn resolve_inline(encoded: &str) -> Result<TokenMetadata> {
    let decoded = urlencoding::decode(encoded)
        .map_err(|_| MintgateError::ResolutionFailed("invalid inline json".to_string()))?;

    serde_json::from_str(&decoded)
        .map_err(|_| MintgateError::ResolutionFailed("invalid inline json".to_string()))
}
