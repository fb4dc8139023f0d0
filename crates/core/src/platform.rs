//! External sales platforms and their connection state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown when a platform has never synced.
pub const NEVER_SYNCED: &str = "Never";

/// The fixed set of external platforms the shop can sell through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Woocommerce,
    Shopify,
    Ubereats,
    Prestashop,
    Odoo,
    Deliveroo,
}

impl PlatformId {
    pub const ALL: [PlatformId; 6] = [
        PlatformId::Woocommerce,
        PlatformId::Shopify,
        PlatformId::Ubereats,
        PlatformId::Prestashop,
        PlatformId::Odoo,
        PlatformId::Deliveroo,
    ];

    /// Wire identifier, as used in endpoint paths and status-map keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Woocommerce => "woocommerce",
            PlatformId::Shopify => "shopify",
            PlatformId::Ubereats => "ubereats",
            PlatformId::Prestashop => "prestashop",
            PlatformId::Odoo => "odoo",
            PlatformId::Deliveroo => "deliveroo",
        }
    }

    /// Human-readable name used in notifications and listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformId::Woocommerce => "WooCommerce",
            PlatformId::Shopify => "Shopify",
            PlatformId::Ubereats => "Uber Eats",
            PlatformId::Prestashop => "PrestaShop",
            PlatformId::Odoo => "Odoo",
            PlatformId::Deliveroo => "Deliveroo",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for PlatformId {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlatformId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// One platform's client-side view: identity plus connection state.
///
/// `connected` is the sole source of truth for whether sync actions are
/// permitted for the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub id: PlatformId,
    pub connected: bool,
    pub last_sync: String,
}

impl Platform {
    fn seeded(id: PlatformId) -> Self {
        Self {
            id,
            connected: false,
            last_sync: NEVER_SYNCED.to_string(),
        }
    }

    /// The full platform list in its initial (disconnected) state.
    pub fn seed_all() -> Vec<Platform> {
        PlatformId::ALL.iter().copied().map(Platform::seeded).collect()
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }
}

/// Per-platform entry of the `GET /platforms/status` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStatus {
    #[serde(default)]
    pub connected: bool,
    #[serde(default, rename = "lastSync")]
    pub last_sync: Option<String>,
}

/// Status snapshot keyed by wire identifier. Kept as strings so unknown
/// platforms in the response are ignored rather than failing deserialization.
pub type PlatformStatusMap = HashMap<String, PlatformStatus>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_identifiers_round_trip_through_serde() {
        for id in PlatformId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            let back: PlatformId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn from_str_accepts_wire_identifiers_only() {
        assert_eq!("shopify".parse::<PlatformId>(), Ok(PlatformId::Shopify));
        assert!("Shopify".parse::<PlatformId>().is_err());
        assert!("amazon".parse::<PlatformId>().is_err());
    }

    #[test]
    fn seed_all_starts_disconnected_and_never_synced() {
        let platforms = Platform::seed_all();
        assert_eq!(platforms.len(), 6);
        for p in &platforms {
            assert!(!p.connected);
            assert_eq!(p.last_sync, NEVER_SYNCED);
        }
    }

    #[test]
    fn status_entry_tolerates_missing_fields() {
        let status: PlatformStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.connected);
        assert_eq!(status.last_sync, None);

        let status: PlatformStatus =
            serde_json::from_str(r#"{"connected":true,"lastSync":"2026-08-12T09:00:00Z"}"#).unwrap();
        assert!(status.connected);
        assert_eq!(status.last_sync.as_deref(), Some("2026-08-12T09:00:00Z"));
    }
}
