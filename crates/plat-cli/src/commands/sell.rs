// crates/plat-cli/src/commands/sell.rs
//
// `plat sell` — sell fraction units back to the registry at the unit price.

use clap::Args;
use serde_json::json;

use plat_core::Credits;
use plat_rpc::handlers::market::SellResponse;

use crate::{keys, output, rpc_client};

/// Sell fraction units back.
#[derive(Debug, Args)]
pub struct SellCmd {
    /// The asset to sell out of.
    #[arg(long)]
    pub asset_id: u64,

    /// Fraction units to sell.
    #[arg(long)]
    pub units: u64,

    /// Label of the local key whose holding is sold.
    #[arg(long)]
    pub key: String,
}

/// Run the sell command.
pub async fn run(rpc: &str, json: bool, cmd: &SellCmd) -> Result<(), Box<dyn std::error::Error>> {
    let seller = keys::load_key(&cmd.key)?;

    let response: SellResponse = rpc_client::call(
        rpc,
        "market/sell",
        json!({
            "seller": seller.account_id().to_hex(),
            "asset_id": cmd.asset_id,
            "units": cmd.units,
        }),
    )
    .await?;

    if json {
        println!("{}", output::format_json(&response));
        return Ok(());
    }

    println!(
        "Sold {} unit(s) of asset {} for {}.",
        response.units,
        response.asset_id,
        Credits::from_cents(response.payout)
    );
    println!("  Holding now: {} unit(s)", response.holding);

    Ok(())
}
