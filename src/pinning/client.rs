//! Content-addressed store client
//!
//! The pinning service is an external collaborator; the crate depends only
//! on two operations (`put_file`, `put_json`), both returning the CID of
//! the pinned content. Identical bytes pin to the same CID, so retrying an
//! upload is harmless.
//!
//! `PinataClient` is the concrete implementation, speaking the Pinata
//! pinning API with JWT bearer auth.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Errors from the pinning store
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Transport failure before a response arrived
    #[error("network error: {0}")]
    Network(String),

    /// The store answered with a non-success status
    #[error("store rejected request: HTTP {status}: {message}")]
    Service { status: u16, message: String },

    /// The store answered but the body was not the expected shape
    #[error("invalid store response: {0}")]
    InvalidResponse(String),

    /// The asset could not be turned into a request
    #[error("invalid asset: {0}")]
    InvalidAsset(String),
}

/// Trait for the content-addressed store (allows mocking in tests)
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Pin a binary blob, returning its CID
    async fn put_file(&self, bytes: Bytes, mime_type: &str) -> Result<String, StoreError>;

    /// Pin a JSON document, returning its CID
    async fn put_json(&self, document: &serde_json::Value) -> Result<String, StoreError>;
}

/// Configuration for the Pinata client
#[derive(Debug, Clone)]
pub struct PinataConfig {
    /// Base URL of the pinning API
    pub api_url: String,
    /// JWT used as bearer token
    pub jwt: String,
    /// Timeout for each upload request
    pub request_timeout: Duration,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.pinata.cloud".to_string(),
            jwt: String::new(),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Pinata pinning API response
#[derive(Debug, Clone, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// HTTP client for the Pinata pinning API
pub struct PinataClient {
    config: PinataConfig,
    client: reqwest::Client,
}

impl PinataClient {
    pub fn new(config: PinataConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent("mintgate/0.1")
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Check a response status and decode the pin receipt
    async fn decode_pin(response: reqwest::Response) -> Result<String, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let receipt: PinResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        Ok(receipt.ipfs_hash)
    }
}

#[async_trait]
impl ContentStore for PinataClient {
    async fn put_file(&self, bytes: Bytes, mime_type: &str) -> Result<String, StoreError> {
        debug!(size = bytes.len(), mime = %mime_type, "Pinning file");

        let part = reqwest::multipart::Part::bytes(bytes.to_vec())
            .file_name("file")
            .mime_str(mime_type)
            .map_err(|e| StoreError::InvalidAsset(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("pinning/pinFileToIPFS"))
            .bearer_auth(&self.config.jwt)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let cid = Self::decode_pin(response).await?;
        debug!(cid = %cid, "File pinned");
        Ok(cid)
    }

    async fn put_json(&self, document: &serde_json::Value) -> Result<String, StoreError> {
        debug!("Pinning JSON document");

        let response = self
            .client
            .post(self.endpoint("pinning/pinJSONToIPFS"))
            .bearer_auth(&self.config.jwt)
            .json(&serde_json::json!({ "pinataContent": document }))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let cid = Self::decode_pin(response).await?;
        debug!(cid = %cid, "JSON pinned");
        Ok(cid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PinataConfig::default();
        assert_eq!(config.api_url, "https://api.pinata.cloud");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = PinataClient::new(PinataConfig {
            api_url: "https://api.pinata.cloud/".to_string(),
            ..Default::default()
        });
        assert_eq!(
            client.endpoint("pinning/pinFileToIPFS"),
            "https://api.pinata.cloud/pinning/pinFileToIPFS"
        );
    }

    #[test]
    fn test_pin_response_decodes() {
        let receipt: PinResponse = serde_json::from_str(
            r#"{"IpfsHash":"QmTest","PinSize":1234,"Timestamp":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(receipt.ipfs_hash, "QmTest");
    }
}
