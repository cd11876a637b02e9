// crates/plat-core/src/traits.rs

use crate::asset::Asset;
use crate::encoder::EncodedDeed;
use crate::error::PlatError;
use crate::identity::AccountId;
use crate::money::Cents;

/// Trait for the value-transfer channel that moves currency between
/// accounts during settlement.
///
/// Implemented by plat-bank (`SettlementBank`). A transfer is all-or-nothing:
/// it either moves the full amount or fails with
/// [`PlatError::TransferFailed`] and moves nothing. The ledger relies on this
/// to keep its internal treasury balance and the channel's view of the
/// registry account in lock-step.
pub trait ValueChannel: Send + Sync {
    /// Move `amount` cents from `from` to `to`.
    ///
    /// A zero-amount transfer succeeds without effect. Implementations must
    /// never create currency: a debit the payer cannot cover fails the
    /// whole transfer.
    fn transfer(&self, from: &AccountId, to: &AccountId, amount: Cents) -> Result<(), PlatError>;
}

/// Trait for encoding stored asset state into an external-facing deed
/// document.
///
/// Implemented by [`crate::encoder::JsonDeedEncoder`]. Invoked only by the
/// read-only query surface; mutations never depend on it.
pub trait DeedEncoder: Send + Sync {
    /// Produce the display document and its transportable URI for `asset`.
    fn encode(&self, asset: &Asset) -> Result<EncodedDeed, PlatError>;
}
