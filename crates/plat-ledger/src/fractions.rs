// crates/plat-ledger/src/fractions.rs
//
// Fraction book: per-asset unit accounting.
//
// Each asset carries its unsold pool (units still held by the registry) and
// a sparse holder map. Every move debits one side and credits the other in
// the same call, so for each asset
//
//   unsold + sum(holder balances) == total_supply
//
// holds at all times. Within one asset no balance can exceed the total
// supply, which keeps the unchecked additions below safe.

use std::collections::HashMap;

use plat_core::{AccountId, AssetId, PlatError, Units};

/// Unit accounting for a single asset.
#[derive(Debug, Clone)]
struct AssetHoldings {
    /// Units still available for purchase from the registry.
    unsold: Units,
    /// Per-holder balances. Absent means zero; entries are removed when a
    /// balance decays to zero.
    holders: HashMap<AccountId, Units>,
}

/// Holdings across all assets.
#[derive(Debug, Default)]
pub struct FractionBook {
    by_asset: HashMap<AssetId, AssetHoldings>,
}

impl FractionBook {
    pub fn new() -> Self {
        Self {
            by_asset: HashMap::new(),
        }
    }

    /// Open accounting for a freshly minted asset with its entire supply in
    /// the unsold pool.
    pub fn open(&mut self, asset_id: AssetId, total_supply: Units) {
        self.by_asset.insert(
            asset_id,
            AssetHoldings {
                unsold: total_supply,
                holders: HashMap::new(),
            },
        );
    }

    /// Units still unsold for `asset_id`.
    pub fn unsold(&self, asset_id: AssetId) -> Result<Units, PlatError> {
        Ok(self.holdings(asset_id)?.unsold)
    }

    /// `holder`'s balance for `asset_id`. Unknown holders read as zero.
    pub fn balance_of(&self, asset_id: AssetId, holder: &AccountId) -> Result<Units, PlatError> {
        Ok(self
            .holdings(asset_id)?
            .holders
            .get(holder)
            .copied()
            .unwrap_or(0))
    }

    /// Number of distinct holders with a nonzero balance.
    pub fn holder_count(&self, asset_id: AssetId) -> Result<usize, PlatError> {
        Ok(self.holdings(asset_id)?.holders.len())
    }

    /// Total units accounted for: the unsold pool plus every holder balance.
    /// Always equals the asset's total supply.
    pub fn circulating(&self, asset_id: AssetId) -> Result<Units, PlatError> {
        let holdings = self.holdings(asset_id)?;
        Ok(holdings.unsold + holdings.holders.values().sum::<Units>())
    }

    /// Move `units` from the unsold pool to `buyer` (the purchase leg).
    ///
    /// # Errors
    /// Returns `PlatError::InsufficientSupply` if the pool holds fewer than
    /// `units`.
    pub fn allot(
        &mut self,
        asset_id: AssetId,
        buyer: &AccountId,
        units: Units,
    ) -> Result<(), PlatError> {
        let holdings = self.holdings_mut(asset_id)?;
        if holdings.unsold < units {
            return Err(PlatError::InsufficientSupply {
                asset_id,
                requested: units,
                available: holdings.unsold,
            });
        }
        holdings.unsold -= units;
        *holdings.holders.entry(*buyer).or_insert(0) += units;
        Ok(())
    }

    /// Move `units` from `seller` back into the unsold pool (the sale leg).
    ///
    /// # Errors
    /// Returns `PlatError::InsufficientFractions` if `seller` holds fewer
    /// than `units`.
    pub fn surrender(
        &mut self,
        asset_id: AssetId,
        seller: &AccountId,
        units: Units,
    ) -> Result<(), PlatError> {
        let holdings = self.holdings_mut(asset_id)?;
        let held = holdings.holders.get(seller).copied().unwrap_or(0);
        if held < units {
            return Err(PlatError::InsufficientFractions {
                requested: units,
                held,
            });
        }
        if held == units {
            holdings.holders.remove(seller);
        } else if let Some(balance) = holdings.holders.get_mut(seller) {
            *balance -= units;
        }
        holdings.unsold += units;
        Ok(())
    }

    /// Reverse a surrender whose settlement was refused downstream: move
    /// `units` from the pool back to `holder`. Only sound immediately after
    /// a successful surrender of the same units, which is why it stays
    /// crate-private and infallible.
    pub(crate) fn unwind_surrender(&mut self, asset_id: AssetId, holder: &AccountId, units: Units) {
        if let Some(holdings) = self.by_asset.get_mut(&asset_id) {
            debug_assert!(holdings.unsold >= units);
            holdings.unsold -= units;
            *holdings.holders.entry(*holder).or_insert(0) += units;
        }
    }

    fn holdings(&self, asset_id: AssetId) -> Result<&AssetHoldings, PlatError> {
        self.by_asset
            .get(&asset_id)
            .ok_or(PlatError::AssetNotFound(asset_id))
    }

    fn holdings_mut(&mut self, asset_id: AssetId) -> Result<&mut AssetHoldings, PlatError> {
        self.by_asset
            .get_mut(&asset_id)
            .ok_or(PlatError::AssetNotFound(asset_id))
    }
}
