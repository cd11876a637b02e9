// crates/plat-cli/src/commands/holding.rs
//
// `plat holding` — show an account's fraction holding of one asset.

use clap::Args;
use serde_json::json;

use plat_rpc::handlers::market::HoldingResponse;

use crate::{keys, output, rpc_client};

/// Show a holding.
#[derive(Debug, Args)]
pub struct HoldingCmd {
    /// The asset to look up.
    #[arg(long)]
    pub asset_id: u64,

    /// Account to look up: a hex account id or a local key label.
    #[arg(long)]
    pub account: String,
}

/// Run the holding command.
pub async fn run(rpc: &str, json: bool, cmd: &HoldingCmd) -> Result<(), Box<dyn std::error::Error>> {
    let holder = keys::resolve_account(&cmd.account)?;

    let response: HoldingResponse = rpc_client::call(
        rpc,
        "market/holding",
        json!({
            "asset_id": cmd.asset_id,
            "holder": holder,
        }),
    )
    .await?;

    if json {
        println!("{}", output::format_json(&response));
        return Ok(());
    }

    println!(
        "Account {} holds {} unit(s) of asset {}.",
        response.holder, response.units, response.asset_id
    );

    Ok(())
}
