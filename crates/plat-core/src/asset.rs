// crates/plat-core/src/asset.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Units;

/// Sequential asset identifier.
///
/// Assigned at mint starting from 0 and never reused; an id below the
/// registry's asset count always names a live asset.
pub type AssetId = u64;

/// Owner-editable descriptive text for one property.
///
/// Metadata is display-only: editing it never touches supply, holdings, or
/// pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Short human-readable name, e.g. "14 Harbor Lane".
    pub name: String,
    /// Free-form description of the property.
    pub description: String,
    /// Physical location.
    pub location: String,
    /// Image reference (URL or content address). May be left empty; display
    /// encoding falls back to the asset's display URI.
    pub image: String,
}

impl AssetMetadata {
    pub fn new(name: &str, description: &str, location: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            image: image.to_string(),
        }
    }
}

/// One registered property.
///
/// The fraction supply is fixed at mint and immutable for the life of the
/// asset; only the descriptive metadata stays editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Sequential id, assigned at mint.
    pub id: AssetId,
    /// Total fraction units in existence for this asset. Always positive.
    pub total_supply: Units,
    /// Owner-editable display metadata.
    pub metadata: AssetMetadata,
    /// Opaque display reference captured at mint, e.g. a gallery URL. Serves
    /// as the fallback image and the `external_url` of the deed document.
    pub display_uri: String,
    /// Mint timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_serde_round_trip() {
        let asset = Asset {
            id: 0,
            total_supply: 1_000,
            metadata: AssetMetadata::new(
                "14 Harbor Lane",
                "Waterfront duplex",
                "Porthaven",
                "",
            ),
            display_uri: "https://plat.example/deeds/0".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, asset.id);
        assert_eq!(back.total_supply, asset.total_supply);
        assert_eq!(back.metadata, asset.metadata);
    }
}
