//! Gateway list - ordered IPFS gateway mirrors
//!
//! Public gateways are independently operated and individually unreliable.
//! The list order is the retry priority: the resolver walks it front to
//! back and stops at the first gateway that serves a parseable document.

use crate::resolver::uri::IPFS_SCHEME;

/// Default public gateways, most preferred first
pub const DEFAULT_GATEWAYS: &[&str] = &[
    "https://gateway.pinata.cloud",
    "https://ipfs.io",
    "https://cloudflare-ipfs.com",
    "https://dweb.link",
];

/// An ordered, fixed list of gateway base URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayList(Vec<String>);

impl GatewayList {
    /// Build a list from explicit base URLs, preserving order
    pub fn new(bases: Vec<String>) -> Self {
        Self(bases)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate bases in retry-priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for GatewayList {
    fn default() -> Self {
        Self(DEFAULT_GATEWAYS.iter().map(|s| s.to_string()).collect())
    }
}

/// Build the fetch URL for a CID on a gateway base.
///
/// `https://ipfs.io` + `Qm123` -> `https://ipfs.io/ipfs/Qm123`
pub fn gateway_url(base: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", base.trim_end_matches('/'), cid)
}

/// Rewrite an `ipfs://` image reference through a known-good gateway base.
///
/// Returns `None` when the reference is not content-addressed and needs no
/// rewrite.
pub fn rewrite_ipfs_url(image: &str, base: &str) -> Option<String> {
    image
        .strip_prefix(IPFS_SCHEME)
        .map(|cid| gateway_url(base, cid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_url() {
        assert_eq!(
            gateway_url("https://ipfs.io", "Qm123"),
            "https://ipfs.io/ipfs/Qm123"
        );
    }

    #[test]
    fn test_gateway_url_trailing_slash() {
        assert_eq!(
            gateway_url("https://ipfs.io/", "Qm123"),
            "https://ipfs.io/ipfs/Qm123"
        );
    }

    #[test]
    fn test_rewrite_ipfs_url() {
        assert_eq!(
            rewrite_ipfs_url("ipfs://Qm456", "https://ipfs.io"),
            Some("https://ipfs.io/ipfs/Qm456".to_string())
        );
        assert_eq!(rewrite_ipfs_url("https://example.com/x.png", "https://ipfs.io"), None);
    }

    #[test]
    fn test_default_list_order() {
        let list = GatewayList::default();
        let bases: Vec<&str> = list.iter().collect();
        assert_eq!(bases.first(), Some(&"https://gateway.pinata.cloud"));
        assert_eq!(bases.len(), DEFAULT_GATEWAYS.len());
    }
}
