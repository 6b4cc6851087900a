//! Asset and metadata pinning
//!
//! The upload pipeline pins a binary asset plus its metadata document to a
//! content-addressed store and hands back the metadata's `ipfs://` URI.

pub mod client;
pub mod pipeline;

pub use client::{ContentStore, PinataClient, PinataConfig, StoreError};
pub use pipeline::{Asset, UploadPipeline};
