//! Token URI resolution
//!
//! Turns a token URI (`ipfs://`, inline `data:application/json,`, or plain
//! HTTP) into a parsed metadata document, with sequential gateway fallback
//! for the content-addressed form.

pub mod gateways;
pub mod service;
pub mod uri;

pub use gateways::{gateway_url, GatewayList, DEFAULT_GATEWAYS};
pub use service::{HttpFetch, HttpFetcher, MetadataResolver, ResolverConfig};
pub use uri::TokenUri;
