// crates/plat-rpc/src/handlers/market.rs
//
// Market handlers: Price, SetPrice, Buy, Sell, Holding. Buy and Sell are the
// only paths that move both fractions and currency.

use serde::{Deserialize, Serialize};

use plat_core::{AccountId, AssetId, Cents, Credits, PlatError, Units};

use crate::SharedLedger;

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// Request for the current unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {}

/// Response with the global unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Price of one fraction unit, in cents.
    pub unit_price: Cents,
    /// Human-readable form, e.g. "1.5 CR".
    pub display: String,
}

/// Handle a Price request.
pub async fn handle_price(
    ledger: &SharedLedger,
    _request: PriceRequest,
) -> Result<PriceResponse, PlatError> {
    let ledger = ledger.read().await;
    let unit_price = ledger.unit_price();
    Ok(PriceResponse {
        unit_price,
        display: Credits::from_cents(unit_price).to_string(),
    })
}

// ---------------------------------------------------------------------------
// SetPrice
// ---------------------------------------------------------------------------

/// Request to replace the global unit price. Owner-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPriceRequest {
    /// Hex-encoded account id of the caller.
    pub caller: String,
    /// New price of one fraction unit, in cents. Must be positive.
    pub new_price: Cents,
}

/// Response confirming the new price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPriceResponse {
    pub unit_price: Cents,
    pub display: String,
}

/// Handle a SetPrice request.
pub async fn handle_set_price(
    ledger: &SharedLedger,
    request: SetPriceRequest,
) -> Result<SetPriceResponse, PlatError> {
    let caller = AccountId::from_hex(&request.caller)?;

    let mut ledger = ledger.write().await;
    ledger.set_price(&caller, request.new_price)?;
    tracing::info!(new_price = request.new_price, "unit price updated");

    Ok(SetPriceResponse {
        unit_price: request.new_price,
        display: Credits::from_cents(request.new_price).to_string(),
    })
}

// ---------------------------------------------------------------------------
// Buy
// ---------------------------------------------------------------------------

/// Request to buy fraction units from the unsold pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    /// Hex-encoded account id of the buyer.
    pub buyer: String,
    pub asset_id: AssetId,
    /// Units to buy. Must be positive.
    pub units: Units,
    /// Payment offered, in cents. Must cover units times the unit price;
    /// any excess is kept by the registry.
    pub payment: Cents,
}

/// Response from a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyResponse {
    pub asset_id: AssetId,
    pub units: Units,
    /// The quoted cost of the purchase, in cents.
    pub cost: Cents,
    /// What the buyer actually paid (kept in full).
    pub paid: Cents,
    /// The buyer's holding of this asset after the purchase.
    pub holding: Units,
}

/// Handle a Buy request.
pub async fn handle_buy(ledger: &SharedLedger, request: BuyRequest) -> Result<BuyResponse, PlatError> {
    let buyer = AccountId::from_hex(&request.buyer)?;

    let mut ledger = ledger.write().await;
    let cost = ledger.buy(&buyer, request.asset_id, request.units, request.payment)?;
    let holding = ledger.balance_of(request.asset_id, &buyer)?;
    tracing::info!(
        asset_id = request.asset_id,
        units = request.units,
        cost,
        "fractions purchased"
    );

    Ok(BuyResponse {
        asset_id: request.asset_id,
        units: request.units,
        cost,
        paid: request.payment,
        holding,
    })
}

// ---------------------------------------------------------------------------
// Sell
// ---------------------------------------------------------------------------

/// Request to sell fraction units back to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellRequest {
    /// Hex-encoded account id of the seller.
    pub seller: String,
    pub asset_id: AssetId,
    /// Units to sell back. Must be positive.
    pub units: Units,
}

/// Response from a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellResponse {
    pub asset_id: AssetId,
    pub units: Units,
    /// The payout at the current unit price, in cents.
    pub payout: Cents,
    /// The seller's remaining holding of this asset.
    pub holding: Units,
}

/// Handle a Sell request.
pub async fn handle_sell(
    ledger: &SharedLedger,
    request: SellRequest,
) -> Result<SellResponse, PlatError> {
    let seller = AccountId::from_hex(&request.seller)?;

    let mut ledger = ledger.write().await;
    let payout = ledger.sell(&seller, request.asset_id, request.units)?;
    let holding = ledger.balance_of(request.asset_id, &seller)?;
    tracing::info!(
        asset_id = request.asset_id,
        units = request.units,
        payout,
        "fractions sold back"
    );

    Ok(SellResponse {
        asset_id: request.asset_id,
        units: request.units,
        payout,
        holding,
    })
}

// ---------------------------------------------------------------------------
// Holding
// ---------------------------------------------------------------------------

/// Request for one account's holding of one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingRequest {
    pub asset_id: AssetId,
    /// Hex-encoded account id of the holder.
    pub holder: String,
}

/// Response with the holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingResponse {
    pub asset_id: AssetId,
    pub holder: String,
    /// Units held. Zero for accounts that never bought in.
    pub units: Units,
}

/// Handle a Holding request.
pub async fn handle_holding(
    ledger: &SharedLedger,
    request: HoldingRequest,
) -> Result<HoldingResponse, PlatError> {
    let holder = AccountId::from_hex(&request.holder)?;

    let ledger = ledger.read().await;
    let units = ledger.balance_of(request.asset_id, &holder)?;

    Ok(HoldingResponse {
        asset_id: request.asset_id,
        holder: holder.to_hex(),
        units,
    })
}
