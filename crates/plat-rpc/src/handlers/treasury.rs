// crates/plat-rpc/src/handlers/treasury.rs
//
// Treasury handlers: Balance and Withdraw.

use serde::{Deserialize, Serialize};

use plat_core::{AccountId, Cents, Credits, PlatError};

use crate::SharedLedger;

// ---------------------------------------------------------------------------
// Balance
// ---------------------------------------------------------------------------

/// Request for the registry's treasury balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryBalanceRequest {}

/// Response with the treasury balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryBalanceResponse {
    /// Balance in cents.
    pub balance: Cents,
    /// Human-readable form.
    pub display: String,
    /// Hex-encoded settlement account the balance mirrors.
    pub treasury_account: String,
}

/// Handle a TreasuryBalance request.
pub async fn handle_treasury_balance(
    ledger: &SharedLedger,
    _request: TreasuryBalanceRequest,
) -> Result<TreasuryBalanceResponse, PlatError> {
    let ledger = ledger.read().await;
    let balance = ledger.treasury_balance();
    Ok(TreasuryBalanceResponse {
        balance,
        display: Credits::from_cents(balance).to_string(),
        treasury_account: ledger.treasury_account().to_hex(),
    })
}

// ---------------------------------------------------------------------------
// Withdraw
// ---------------------------------------------------------------------------

/// Request to drain the treasury to the owner. Owner-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
}

/// Response from a withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawResponse {
    /// Hex-encoded account the funds went to.
    pub owner: String,
    /// Amount moved, in cents. Zero when the treasury was already empty.
    pub amount: Cents,
    pub display: String,
}

/// Handle a Withdraw request.
pub async fn handle_withdraw(
    ledger: &SharedLedger,
    request: WithdrawRequest,
) -> Result<WithdrawResponse, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;

    let mut ledger = ledger.write().await;
    let amount = ledger.withdraw(&caller)?;
    tracing::info!(amount, "treasury withdrawn");

    Ok(WithdrawResponse {
        owner: ledger.owner().to_hex(),
        amount,
        display: Credits::from_cents(amount).to_string(),
    })
}
