//! Upload Pipeline - two-step pin of asset and metadata
//!
//! Pins the binary asset first, builds the metadata document referencing it
//! by `ipfs://` CID, then pins the document itself. The caller only ever
//! sees the final metadata URI: if the second pin fails the image-only URI
//! from the first step is never exposed.

use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::metadata::{TokenAttribute, TokenMetadata};
use crate::pinning::client::ContentStore;
use crate::resolver::uri::IPFS_SCHEME;
use crate::types::{MintgateError, Result};

/// A binary asset awaiting upload
#[derive(Debug, Clone)]
pub struct Asset {
    pub bytes: Bytes,
    pub mime_type: String,
}

impl Asset {
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Upload Pipeline Service
///
/// Generic over the store so tests can count and fail individual pins.
pub struct UploadPipeline<S: ContentStore> {
    store: Arc<S>,
}

impl<S: ContentStore> UploadPipeline<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Pin the asset and its metadata document, returning the metadata URI
    pub async fn upload(
        &self,
        asset: Asset,
        name: &str,
        description: &str,
        attributes: Vec<TokenAttribute>,
    ) -> Result<String> {
        let name = name.trim();
        let description = description.trim();

        if asset.bytes.is_empty() {
            return Err(MintgateError::ValidationFailed("asset is empty".to_string()));
        }
        if name.is_empty() {
            return Err(MintgateError::ValidationFailed("name is required".to_string()));
        }
        if description.is_empty() {
            return Err(MintgateError::ValidationFailed(
                "description is required".to_string(),
            ));
        }

        debug!(size = asset.bytes.len(), mime = %asset.mime_type, "Uploading asset");

        let image_cid = self
            .store
            .put_file(asset.bytes, &asset.mime_type)
            .await
            .map_err(|e| MintgateError::UploadFailed(e.to_string()))?;

        debug!(cid = %image_cid, "Asset pinned");

        let document = TokenMetadata {
            name: name.to_string(),
            description: description.to_string(),
            image: format!("{IPFS_SCHEME}{image_cid}"),
            attributes,
            external_url: None,
            background_color: None,
        };

        let value = serde_json::to_value(&document)
            .map_err(|e| MintgateError::UploadFailed(e.to_string()))?;

        let metadata_cid = self
            .store
            .put_json(&value)
            .await
            .map_err(|e| MintgateError::UploadFailed(e.to_string()))?;

        info!(
            image_cid = %image_cid,
            metadata_cid = %metadata_cid,
            "Upload complete"
        );

        Ok(format!("{IPFS_SCHEME}{metadata_cid}"))
    }
}
