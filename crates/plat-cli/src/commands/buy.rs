// crates/plat-cli/src/commands/buy.rs
//
// `plat buy` — buy fraction units from an asset's unsold pool.

use clap::Args;
use serde_json::json;

use plat_core::Credits;
use plat_rpc::handlers::market::BuyResponse;

use crate::{keys, output, rpc_client};

/// Buy fraction units.
#[derive(Debug, Args)]
pub struct BuyCmd {
    /// The asset to buy into.
    #[arg(long)]
    pub asset_id: u64,

    /// Fraction units to buy.
    #[arg(long)]
    pub units: u64,

    /// Payment in cents. Must cover units times the unit price; any excess
    /// is kept by the registry.
    #[arg(long)]
    pub payment: u64,

    /// Label of the local key paying for the purchase.
    #[arg(long)]
    pub key: String,
}

/// Run the buy command.
pub async fn run(rpc: &str, json: bool, cmd: &BuyCmd) -> Result<(), Box<dyn std::error::Error>> {
    let buyer = keys::load_key(&cmd.key)?;

    let response: BuyResponse = rpc_client::call(
        rpc,
        "market/buy",
        json!({
            "buyer": buyer.account_id().to_hex(),
            "asset_id": cmd.asset_id,
            "units": cmd.units,
            "payment": cmd.payment,
        }),
    )
    .await?;

    if json {
        println!("{}", output::format_json(&response));
        return Ok(());
    }

    println!(
        "Bought {} unit(s) of asset {} for {}.",
        response.units,
        response.asset_id,
        Credits::from_cents(response.cost)
    );
    if response.paid > response.cost {
        println!(
            "  Paid {} total; the overpayment stays with the registry.",
            Credits::from_cents(response.paid)
        );
    }
    println!("  Holding now: {} unit(s)", response.holding);

    Ok(())
}
