//! Token metadata document types
//!
//! The JSON shape minted tokens point at, compatible with the ERC-721 /
//! ERC-1155 metadata convention that marketplaces index:
//!
//! ```json
//! { "name": "...", "description": "...", "image": "ipfs://...",
//!   "attributes": [{ "trait_type": "...", "value": "..." }] }
//! ```
//!
//! Produced by the upload pipeline and consumed by the resolver. Documents
//! are plain values with no behavior; a fresh instance is created per
//! resolution, nothing is cached.

use serde::{Deserialize, Serialize};

/// A single display attribute of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttribute {
    /// Attribute name shown by marketplaces ("Background", "Rarity", ...)
    pub trait_type: String,
    /// Attribute value
    pub value: String,
}

impl TokenAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// The metadata document associated with a minted token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Image reference: an `ipfs://` URI as produced by the pipeline, or an
    /// HTTP(S) gateway URL after resolution rewrites it
    pub image: String,

    /// Display attributes, order-preserving. Documents in the wild omit
    /// this field entirely; it deserializes as empty rather than failing.
    #[serde(default)]
    pub attributes: Vec<TokenAttribute>,

    /// Project or collection website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Six-character hex background color, without `#`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_deserializes_empty() {
        let doc: TokenMetadata = serde_json::from_str(
            r#"{"name":"X","description":"Y","image":"ipfs://Qm123"}"#,
        )
        .unwrap();

        assert_eq!(doc.name, "X");
        assert!(doc.attributes.is_empty());
        assert!(doc.external_url.is_none());
    }

    #[test]
    fn test_optional_fields_not_serialized_when_absent() {
        let doc = TokenMetadata {
            name: "X".to_string(),
            description: "Y".to_string(),
            image: "ipfs://Qm123".to_string(),
            attributes: vec![],
            external_url: None,
            background_color: None,
        };

        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("external_url"));
        assert!(!json.contains("background_color"));
        assert!(json.contains("\"attributes\":[]"));
    }

    #[test]
    fn test_attribute_order_preserved() {
        let doc: TokenMetadata = serde_json::from_str(
            r#"{"name":"X","description":"Y","image":"i",
                "attributes":[{"trait_type":"a","value":"1"},
                              {"trait_type":"b","value":"2"},
                              {"trait_type":"c","value":"3"}]}"#,
        )
        .unwrap();

        let traits: Vec<&str> = doc.attributes.iter().map(|a| a.trait_type.as_str()).collect();
        assert_eq!(traits, vec!["a", "b", "c"]);
    }
}
