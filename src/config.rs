//! Configuration for mintgate
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::time::Duration;

use crate::resolver::gateways::{GatewayList, DEFAULT_GATEWAYS};

/// Mintgate - pin NFT assets to IPFS and resolve token URIs
#[derive(Parser, Debug, Clone)]
#[command(name = "mintgate")]
#[command(about = "Pin NFT assets and metadata to IPFS, resolve token URIs across gateways")]
pub struct Args {
    /// Base URL of the pinning API
    #[arg(long, env = "PIN_API_URL", default_value = "https://api.pinata.cloud")]
    pub pin_api_url: String,

    /// JWT for the pinning API (required for uploads)
    #[arg(long, env = "PIN_JWT")]
    pub pin_jwt: Option<String>,

    /// Comma-separated IPFS gateway base URLs, in retry-priority order
    #[arg(long, env = "IPFS_GATEWAYS")]
    pub gateways: Option<String>,

    /// Timeout per HTTP request in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "30000")]
    pub request_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Gateway bases in retry-priority order, falling back to the public
    /// defaults when none are configured
    pub fn gateway_list(&self) -> GatewayList {
        if let Some(ref bases) = self.gateways {
            GatewayList::new(
                bases
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            )
        } else {
            GatewayList::new(DEFAULT_GATEWAYS.iter().map(|s| s.to_string()).collect())
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Check settings needed for uploads; resolution has no required knobs
    pub fn validate_for_upload(&self) -> Result<(), String> {
        match self.pin_jwt {
            Some(ref jwt) if !jwt.trim().is_empty() => Ok(()),
            _ => Err("PIN_JWT is required for uploads".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(gateways: Option<&str>, jwt: Option<&str>) -> Args {
        Args {
            pin_api_url: "https://api.pinata.cloud".to_string(),
            pin_jwt: jwt.map(|s| s.to_string()),
            gateways: gateways.map(|s| s.to_string()),
            request_timeout_ms: 30_000,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_gateway_list_defaults() {
        let list = args(None, None).gateway_list();
        assert_eq!(list.len(), DEFAULT_GATEWAYS.len());
    }

    #[test]
    fn test_gateway_list_parses_and_preserves_order() {
        let list = args(Some("https://a.example, https://b.example ,,"), None).gateway_list();
        let bases: Vec<&str> = list.iter().collect();
        assert_eq!(bases, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_validate_for_upload_requires_jwt() {
        assert!(args(None, None).validate_for_upload().is_err());
        assert!(args(None, Some("  ")).validate_for_upload().is_err());
        assert!(args(None, Some("jwt-token")).validate_for_upload().is_ok());
    }
}
