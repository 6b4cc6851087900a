//! Token URI classification
//!
//! A token URI arrives in one of three forms. Classification happens once,
//! from the literal prefix, and the variant is never reconsidered later in
//! the resolution flow - a CID that happens to contain a further `ipfs://`
//! substring stays content-addressed.

/// Scheme prefix for content-addressed URIs
pub const IPFS_SCHEME: &str = "ipfs://";

/// Prefix for inline percent-encoded JSON documents
pub const INLINE_JSON_PREFIX: &str = "data:application/json,";

/// The three forms a token URI can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenUri {
    /// `ipfs://<cid>` - resolved through the gateway list
    Ipfs(String),
    /// `data:application/json,<percent-encoded>` - decoded in place
    InlineJson(String),
    /// Anything else - treated as a directly fetchable HTTP(S) locator
    Http(String),
}

impl TokenUri {
    /// Classify a raw URI string by its literal prefix. First match governs.
    pub fn classify(uri: &str) -> TokenUri {
        if let Some(cid) = uri.strip_prefix(IPFS_SCHEME) {
            TokenUri::Ipfs(cid.to_string())
        } else if let Some(encoded) = uri.strip_prefix(INLINE_JSON_PREFIX) {
            TokenUri::InlineJson(encoded.to_string())
        } else {
            TokenUri::Http(uri.to_string())
        }
    }
}

impl std::fmt::Display for TokenUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenUri::Ipfs(cid) => write!(f, "{IPFS_SCHEME}{cid}"),
            TokenUri::InlineJson(encoded) => write!(f, "{INLINE_JSON_PREFIX}{encoded}"),
            TokenUri::Http(url) => write!(f, "{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ipfs() {
        assert_eq!(
            TokenUri::classify("ipfs://Qm123"),
            TokenUri::Ipfs("Qm123".to_string())
        );
    }

    #[test]
    fn test_classify_inline_json() {
        assert_eq!(
            TokenUri::classify("data:application/json,%7B%22name%22%3A%22X%22%7D"),
            TokenUri::InlineJson("%7B%22name%22%3A%22X%22%7D".to_string())
        );
    }

    #[test]
    fn test_classify_http_fallback() {
        assert_eq!(
            TokenUri::classify("https://example.com/meta.json"),
            TokenUri::Http("https://example.com/meta.json".to_string())
        );
    }

    #[test]
    fn test_first_prefix_match_governs() {
        // A nested ipfs:// inside the CID part must not re-classify
        assert_eq!(
            TokenUri::classify("ipfs://Qm123ipfs://Qm456"),
            TokenUri::Ipfs("Qm123ipfs://Qm456".to_string())
        );
    }

    #[test]
    fn test_display_round_trip() {
        for uri in [
            "ipfs://Qm123",
            "data:application/json,%7B%7D",
            "https://example.com/x.json",
        ] {
            assert_eq!(TokenUri::classify(uri).to_string(), uri);
        }
    }
}
