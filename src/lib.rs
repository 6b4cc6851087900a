//! Mintgate - NFT asset pinning and token URI resolution
//!
//! Two collaborating pieces of logic, sharing no mutable state:
//!
//! - **Upload pipeline**: pins a binary asset to a content-addressed store,
//!   builds the metadata document referencing it, pins the document, and
//!   returns the metadata's `ipfs://` URI.
//! - **Metadata resolver**: turns a token URI (`ipfs://`, inline
//!   `data:application/json,`, or plain HTTP) back into a parsed metadata
//!   document, trying gateway mirrors in order for the content-addressed
//!   form and rewriting the nested image reference through the gateway
//!   that succeeded.

pub mod config;
pub mod metadata;
pub mod pinning;
pub mod resolver;
pub mod types;

pub use config::Args;
pub use metadata::{TokenAttribute, TokenMetadata};
pub use pinning::{Asset, ContentStore, PinataClient, PinataConfig, UploadPipeline};
pub use resolver::{GatewayList, MetadataResolver, ResolverConfig, TokenUri};
pub use types::{MintgateError, Result};
