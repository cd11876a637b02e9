// crates/plat-rpc/src/handlers/bank.rs
//
// Settlement bank handlers: OpenAccount, Fund, BankBalance, BankTransfer.
//
// The bank is shared state next to the ledger, but transfers requested over
// RPC are screened by the ledger first: the registry's treasury account can
// be neither paid directly nor drained from outside.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use plat_bank::SettlementBank;
use plat_core::{AccountId, Cents, Credits, PlatError, ValueChannel};

use crate::SharedLedger;

// ---------------------------------------------------------------------------
// OpenAccount
// ---------------------------------------------------------------------------

/// Request to register an account with a zero balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountRequest {
    /// Hex-encoded account id to open.
    pub account: String,
}

/// Response from opening an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub account: String,
    pub balance: Cents,
}

/// Handle an OpenAccount request. Idempotent.
pub async fn handle_open_account(
    bank: &Arc<SettlementBank>,
    request: OpenAccountRequest,
) -> Result<OpenAccountResponse, PlatError> {
    let account = AccountId::from_hex(&request.account)?;
    bank.open(account);

    Ok(OpenAccountResponse {
        account: account.to_hex(),
        balance: bank.balance(&account),
    })
}

// ---------------------------------------------------------------------------
// Fund
// ---------------------------------------------------------------------------

/// Request to seed cents into an account. Owner-only; this is the faucet
/// that brings currency into the settlement bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
    /// Hex-encoded account to fund.
    pub account: String,
    /// Amount to add, in cents.
    pub amount: Cents,
}

/// Response from funding an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundResponse {
    pub account: String,
    /// Balance after the deposit.
    pub balance: Cents,
    pub display: String,
}

/// Handle a Fund request.
pub async fn handle_fund(
    ledger: &SharedLedger,
    bank: &Arc<SettlementBank>,
    request: FundRequest,
) -> Result<FundResponse, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;
    let account = AccountId::from_hex(&request.account)?;

    // The owner gate lives on the ledger; the bank itself has no notion of
    // privilege.
    {
        let ledger = ledger.read().await;
        if caller != ledger.owner() {
            return Err(PlatError::Unauthorized { caller });
        }
    }

    bank.deposit(&account, request.amount)?;
    let balance = bank.balance(&account);
    tracing::info!(account = %account, amount = request.amount, "account funded");

    Ok(FundResponse {
        account: account.to_hex(),
        balance,
        display: Credits::from_cents(balance).to_string(),
    })
}

// ---------------------------------------------------------------------------
// BankBalance
// ---------------------------------------------------------------------------

/// Request for one account's settlement balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankBalanceRequest {
    /// Hex-encoded account id.
    pub account: String,
}

/// Response with the balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankBalanceResponse {
    pub account: String,
    /// Balance in cents. Unknown accounts read as zero.
    pub balance: Cents,
    pub display: String,
}

/// Handle a BankBalance request.
pub async fn handle_bank_balance(
    bank: &Arc<SettlementBank>,
    request: BankBalanceRequest,
) -> Result<BankBalanceResponse, PlatError> {
    let account = AccountId::from_hex(&request.account)?;
    let balance = bank.balance(&account);

    Ok(BankBalanceResponse {
        account: account.to_hex(),
        balance,
        display: Credits::from_cents(balance).to_string(),
    })
}

// ---------------------------------------------------------------------------
// BankTransfer
// ---------------------------------------------------------------------------

/// Request to move cents between two ordinary accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransferRequest {
    /// Hex-encoded payer.
    pub from: String,
    /// Hex-encoded recipient.
    pub to: String,
    /// Amount in cents.
    pub amount: Cents,
}

/// Response from a completed transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransferResponse {
    pub from: String,
    pub to: String,
    pub amount: Cents,
}

/// Handle a BankTransfer request.
///
/// Transfers touching the registry's treasury account are refused: paying it
/// directly answers `DIRECT_PAYMENT_REJECTED` (fractions are bought through
/// `market/buy`), and nothing outside the ledger may spend from it.
pub async fn handle_bank_transfer(
    ledger: &SharedLedger,
    bank: &Arc<SettlementBank>,
    request: BankTransferRequest,
) -> Result<BankTransferResponse, PlatError> {
    let from = AccountId::from_hex(&request.from)?;
    let to = AccountId::from_hex(&request.to)?;

    {
        let ledger = ledger.read().await;
        ledger.vet_external_transfer(&from, &to)?;
    }

    bank.transfer(&from, &to, request.amount)?;

    Ok(BankTransferResponse {
        from: from.to_hex(),
        to: to.to_hex(),
        amount: request.amount,
    })
}
