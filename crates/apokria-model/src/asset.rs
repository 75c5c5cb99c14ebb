//! Downloadable assets attached to an event

use serde::{Deserialize, Serialize};

/// Asset media type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Pdf,
    Image,
    Csv,
}

/// A generated, versioned asset (sponsor deck, poster, export)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier
    pub id: String,
    /// Media type (`type` on the wire)
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Download URL
    pub url: String,
    /// Monotonic version, starting at 1
    pub version: u32,
    /// Content locale, if any
    #[serde(default)]
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_serializes_as_type() {
        let asset = Asset {
            id: "ast_1".to_string(),
            kind: AssetKind::Pdf,
            url: "/sample-sponsor-deck.pdf".to_string(),
            version: 1,
            locale: Some("en".to_string()),
        };
        let json = serde_json::to_string(&asset).unwrap();

        assert!(json.contains("\"type\":\"pdf\""));

        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, AssetKind::Pdf);
        assert_eq!(back.version, 1);
    }
}
