// crates/plat-core/src/error.rs

use thiserror::Error;

use crate::asset::AssetId;
use crate::identity::AccountId;
use crate::money::{Cents, Units};

/// Registry-wide error types for the Plat registry.
///
/// Every failed operation rejects as a whole: callers observing one of these
/// errors can assume no ledger state changed. Each variant carries a stable
/// machine-checkable code (see [`PlatError::code`]) that the RPC layer
/// surfaces alongside the human-readable message.
#[derive(Debug, Error)]
pub enum PlatError {
    /// Caller lacks the privilege for an owner-only operation.
    #[error("unauthorized: {caller} is not the registry owner")]
    Unauthorized { caller: AccountId },

    /// The asset id does not name a minted asset.
    #[error("asset {0} does not exist")]
    AssetNotFound(AssetId),

    /// Payment offered for a purchase does not cover the cost.
    #[error("insufficient payment: cost is {required} cents, paid {paid}")]
    InsufficientPayment { required: Cents, paid: Cents },

    /// The unsold pool cannot cover the requested purchase.
    #[error("insufficient supply of asset {asset_id}: requested {requested} units, {available} unsold")]
    InsufficientSupply {
        asset_id: AssetId,
        requested: Units,
        available: Units,
    },

    /// The seller does not hold the units being sold.
    #[error("insufficient fractions: requested {requested} units, holding {held}")]
    InsufficientFractions { requested: Units, held: Units },

    /// The treasury cannot cover a payout.
    #[error("insufficient treasury balance: required {required} cents, holding {held}")]
    InsufficientBalance { required: Cents, held: Cents },

    /// Currency was sent to the registry outside of a purchase.
    #[error("direct payments are not accepted; fractions are bought through the market")]
    DirectPaymentRejected,

    /// A supply, unit count, or price that must be positive was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// Settlement arithmetic exceeded the representable range.
    #[error("amount overflow in settlement arithmetic")]
    AmountOverflow,

    /// The value-transfer channel refused or failed a transfer.
    #[error("value transfer failed: {0}")]
    TransferFailed(String),

    /// A malformed account id or key at an API boundary.
    #[error("invalid account: {0}")]
    InvalidAccount(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PlatError {
    /// Stable error code for the RPC envelope and machine consumers.
    pub fn code(&self) -> &'static str {
        match self {
            PlatError::Unauthorized { .. } => "UNAUTHORIZED",
            PlatError::AssetNotFound(_) => "ASSET_NOT_FOUND",
            PlatError::InsufficientPayment { .. } => "INSUFFICIENT_PAYMENT",
            PlatError::InsufficientSupply { .. } => "INSUFFICIENT_SUPPLY",
            PlatError::InsufficientFractions { .. } => "INSUFFICIENT_FRACTIONS",
            PlatError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            PlatError::DirectPaymentRejected => "DIRECT_PAYMENT_REJECTED",
            PlatError::ZeroAmount => "ZERO_AMOUNT",
            PlatError::AmountOverflow => "AMOUNT_OVERFLOW",
            PlatError::TransferFailed(_) => "TRANSFER_FAILED",
            PlatError::InvalidAccount(_) => "INVALID_ACCOUNT",
            PlatError::Serialization(_) => "SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for PlatError {
    fn from(e: serde_json::Error) -> Self {
        PlatError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            PlatError::Unauthorized {
                caller: AccountId::from_bytes([0; 32])
            }
            .code(),
            "UNAUTHORIZED"
        );
        assert_eq!(PlatError::AssetNotFound(7).code(), "ASSET_NOT_FOUND");
        assert_eq!(PlatError::DirectPaymentRejected.code(), "DIRECT_PAYMENT_REJECTED");
        assert_eq!(PlatError::ZeroAmount.code(), "ZERO_AMOUNT");
        assert_eq!(PlatError::AmountOverflow.code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_display_carries_amounts() {
        let err = PlatError::InsufficientPayment {
            required: 100,
            paid: 40,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("40"));

        let err = PlatError::InsufficientSupply {
            asset_id: 3,
            requested: 500,
            available: 20,
        };
        assert!(err.to_string().contains("asset 3"));
    }

    #[test]
    fn test_from_serde_json() {
        let bad: Result<u64, _> = serde_json::from_str("not json");
        let err: PlatError = bad.unwrap_err().into();
        assert_eq!(err.code(), "SERIALIZATION");
    }
}
