// crates/plat-rpc/src/handlers/admin.rs
//
// Admin handlers: owner queries and ownership transfer.

use serde::{Deserialize, Serialize};

use plat_core::{AccountId, PlatError};

use crate::SharedLedger;

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

/// Request for the current registry owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRequest {}

/// Response naming the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    /// Hex-encoded account id of the registry owner.
    pub owner: String,
}

/// Handle an Owner request.
pub async fn handle_owner(
    ledger: &SharedLedger,
    _request: OwnerRequest,
) -> Result<OwnerResponse, PlatError> {
    let ledger = ledger.read().await;
    Ok(OwnerResponse {
        owner: ledger.owner().to_hex(),
    })
}

// ---------------------------------------------------------------------------
// TransferOwnership
// ---------------------------------------------------------------------------

/// Request to hand the registry to a new owner. Owner-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOwnershipRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
    /// Hex-encoded account id of the new owner.
    pub new_owner: String,
}

/// Response confirming the handover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOwnershipResponse {
    /// Hex-encoded previous owner.
    pub previous: String,
    /// Hex-encoded new owner.
    pub new_owner: String,
}

/// Handle a TransferOwnership request.
pub async fn handle_transfer_ownership(
    ledger: &SharedLedger,
    request: TransferOwnershipRequest,
) -> Result<TransferOwnershipResponse, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;
    let new_owner = AccountId::from_hex(&request.new_owner)?;

    let mut ledger = ledger.write().await;
    let previous = ledger.owner();
    ledger.transfer_ownership(&caller, new_owner)?;
    tracing::info!(new_owner = %new_owner, "registry ownership transferred");

    Ok(TransferOwnershipResponse {
        previous: previous.to_hex(),
        new_owner: new_owner.to_hex(),
    })
}
