// crates/plat-ledger/src/registry.rs
//
// Asset book: sequential ids, fixed supplies, editable metadata.
//
// Ids start at 0 and are never reused. An id exists iff it is below the
// current count, so the book is a plain vector indexed by id.

use chrono::Utc;

use plat_core::{Asset, AssetId, AssetMetadata, PlatError, Units};

/// All minted assets, indexed by id.
#[derive(Debug, Default)]
pub struct AssetBook {
    assets: Vec<Asset>,
}

impl AssetBook {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Number of assets minted so far. Doubles as the next id.
    pub fn count(&self) -> u64 {
        self.assets.len() as u64
    }

    /// Whether `id` names a minted asset.
    pub fn exists(&self, id: AssetId) -> bool {
        id < self.count()
    }

    /// Register the next asset. The fraction supply is fixed here for the
    /// life of the asset.
    ///
    /// # Errors
    /// Returns `PlatError::ZeroAmount` if `total_supply` is zero; an asset
    /// with no units could never trade.
    pub fn mint(
        &mut self,
        metadata: AssetMetadata,
        display_uri: String,
        total_supply: Units,
    ) -> Result<AssetId, PlatError> {
        if total_supply == 0 {
            return Err(PlatError::ZeroAmount);
        }
        let id = self.count();
        self.assets.push(Asset {
            id,
            total_supply,
            metadata,
            display_uri,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Fetch an asset record.
    ///
    /// # Errors
    /// Returns `PlatError::AssetNotFound` for an unknown id.
    pub fn get(&self, id: AssetId) -> Result<&Asset, PlatError> {
        self.assets
            .get(id as usize)
            .ok_or(PlatError::AssetNotFound(id))
    }

    /// Replace the descriptive metadata of an existing asset. Supply and
    /// holdings are untouched.
    pub fn set_metadata(&mut self, id: AssetId, metadata: AssetMetadata) -> Result<(), PlatError> {
        let asset = self
            .assets
            .get_mut(id as usize)
            .ok_or(PlatError::AssetNotFound(id))?;
        asset.metadata = metadata;
        Ok(())
    }

    /// Iterate all assets in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> AssetMetadata {
        AssetMetadata::new(name, "desc", "somewhere", "")
    }

    #[test]
    fn test_ids_are_sequential_from_zero() {
        let mut book = AssetBook::new();
        let a = book.mint(meta("a"), "uri-a".into(), 100).unwrap();
        let b = book.mint(meta("b"), "uri-b".into(), 200).unwrap();
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(book.count(), 2);
    }

    #[test]
    fn test_exists_boundary() {
        let mut book = AssetBook::new();
        assert!(!book.exists(0));
        book.mint(meta("a"), "uri".into(), 10).unwrap();
        assert!(book.exists(0));
        assert!(!book.exists(1));
    }

    #[test]
    fn test_zero_supply_rejected() {
        let mut book = AssetBook::new();
        let err = book.mint(meta("a"), "uri".into(), 0).unwrap_err();
        assert_eq!(err.code(), "ZERO_AMOUNT");
        assert_eq!(book.count(), 0);
    }

    #[test]
    fn test_get_unknown_asset() {
        let book = AssetBook::new();
        let err = book.get(5).unwrap_err();
        assert_eq!(err.code(), "ASSET_NOT_FOUND");
    }

    #[test]
    fn test_set_metadata_overwrites() {
        let mut book = AssetBook::new();
        let id = book.mint(meta("before"), "uri".into(), 10).unwrap();
        book.set_metadata(id, meta("after")).unwrap();

        let asset = book.get(id).unwrap();
        assert_eq!(asset.metadata.name, "after");
        // Supply unchanged by a metadata edit.
        assert_eq!(asset.total_supply, 10);
    }

    #[test]
    fn test_set_metadata_unknown_asset() {
        let mut book = AssetBook::new();
        assert!(book.set_metadata(3, meta("x")).is_err());
    }
}
