// crates/plat-cli/src/commands/price.rs
//
// `plat price {get, set}` — the global unit price. Setting is owner-only.

use clap::Subcommand;
use serde_json::json;

use plat_rpc::handlers::market::{PriceResponse, SetPriceResponse};

use crate::{keys, output, rpc_client};

/// Unit price subcommands.
#[derive(Debug, Subcommand)]
pub enum PriceCmd {
    /// Show the current price per fraction unit.
    Get,
    /// Set a new price per fraction unit (owner only).
    Set {
        /// New price in cents. Must be positive.
        #[arg(long)]
        cents: u64,
    },
}

/// Run the price subcommand.
pub async fn run(rpc: &str, json: bool, cmd: &PriceCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        PriceCmd::Get => {
            let response: PriceResponse =
                rpc_client::call(rpc, "market/price", json!({})).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Unit price: {} ({} cents per fraction)",
                    response.display, response.unit_price
                );
            }
        }
        PriceCmd::Set { cents } => {
            let owner = keys::load_owner()?;
            let response: SetPriceResponse = rpc_client::call(
                rpc,
                "market/set_price",
                json!({
                    "caller": owner.account_id().to_hex(),
                    "new_price": cents,
                }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Unit price set to {} ({} cents per fraction)",
                    response.display, response.unit_price
                );
            }
        }
    }

    Ok(())
}
