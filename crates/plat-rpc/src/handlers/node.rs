// crates/plat-rpc/src/handlers/node.rs
//
// Node handlers: Info and Health.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use plat_bank::SettlementBank;
use plat_core::{Cents, PlatError};

use crate::SharedLedger;

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

/// Request for a snapshot of the registry node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfoRequest {}

/// Response describing the running node and its registry state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfoResponse {
    /// Crate version of the daemon.
    pub version: String,
    /// Hex-encoded registry owner.
    pub owner: String,
    /// Hex-encoded treasury account on the settlement bank.
    pub treasury_account: String,
    /// Number of minted assets.
    pub asset_count: u64,
    /// Current unit price in cents.
    pub unit_price: Cents,
    /// Treasury balance in cents.
    pub treasury_balance: Cents,
    /// Accounts known to the settlement bank.
    pub bank_accounts: usize,
    /// Journaled events so far.
    pub event_count: u64,
    /// Seconds since the daemon started.
    pub uptime_secs: u64,
}

/// Handle a NodeInfo request.
pub async fn handle_node_info(
    ledger: &SharedLedger,
    bank: &Arc<SettlementBank>,
    started_at: Instant,
    _request: NodeInfoRequest,
) -> Result<NodeInfoResponse, PlatError> {
    let ledger = ledger.read().await;

    Ok(NodeInfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        owner: ledger.owner().to_hex(),
        treasury_account: ledger.treasury_account().to_hex(),
        asset_count: ledger.asset_count(),
        unit_price: ledger.unit_price(),
        treasury_balance: ledger.treasury_balance(),
        bank_accounts: bank.account_count(),
        event_count: ledger.event_count(),
        uptime_secs: started_at.elapsed().as_secs(),
    })
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// Request for a liveness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRequest {}

/// Response confirming the node is serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

/// Handle a Health request.
pub async fn handle_health(
    started_at: Instant,
    _request: HealthRequest,
) -> Result<HealthResponse, PlatError> {
    Ok(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: started_at.elapsed().as_secs(),
    })
}
