//! Sponsorship tiers and outreach copy

use serde::{Deserialize, Serialize};

/// A sponsorship package tier
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorPackage {
    /// Unique identifier
    pub id: String,
    /// Tier label (Gold, Silver, Bronze)
    pub tier: String,
    /// What the sponsor gets
    pub benefits: Vec<String>,
    /// Asking price, if set
    #[serde(default)]
    pub price: Option<u64>,
}

/// Generated outreach messages for one event
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachBundle {
    /// Email pitch for prospective sponsors
    pub email_sponsor: String,
    /// Registration email for participants
    pub email_participants: String,
    /// Short broadcast message
    pub whatsapp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_wire_shape() {
        let json = r#"{"id":"pkg_1","tier":"Gold","benefits":["Stage logo","Stall"],"price":100000}"#;
        let pkg: SponsorPackage = serde_json::from_str(json).unwrap();

        assert_eq!(pkg.tier, "Gold");
        assert_eq!(pkg.benefits.len(), 2);
        assert_eq!(pkg.price, Some(100000));
    }

    #[test]
    fn test_outreach_wire_field_names() {
        let bundle = OutreachBundle {
            email_sponsor: "s".to_string(),
            email_participants: "p".to_string(),
            whatsapp: "w".to_string(),
        };
        let json = serde_json::to_string(&bundle).unwrap();

        assert!(json.contains("\"emailSponsor\""));
        assert!(json.contains("\"emailParticipants\""));
        assert!(json.contains("\"whatsapp\""));
    }
}
