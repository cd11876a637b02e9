// crates/plat-cli/src/commands/treasury.rs
//
// `plat treasury {balance, withdraw}` — the registry's accumulated proceeds.

use clap::Subcommand;
use serde_json::json;

use plat_rpc::handlers::treasury::{TreasuryBalanceResponse, WithdrawResponse};

use crate::{keys, output, rpc_client};

/// Treasury subcommands.
#[derive(Debug, Subcommand)]
pub enum TreasuryCmd {
    /// Show the registry's treasury balance.
    Balance,
    /// Withdraw the entire treasury balance to the owner (owner only).
    Withdraw,
}

/// Run the treasury subcommand.
pub async fn run(
    rpc: &str,
    json: bool,
    cmd: &TreasuryCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        TreasuryCmd::Balance => {
            let response: TreasuryBalanceResponse =
                rpc_client::call(rpc, "treasury/balance", json!({})).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Treasury balance: {}", response.display);
                println!("  Account: {}", response.treasury_account);
            }
        }
        TreasuryCmd::Withdraw => {
            let owner = keys::load_owner()?;
            let response: WithdrawResponse = rpc_client::call(
                rpc,
                "treasury/withdraw",
                json!({ "caller": owner.account_id().to_hex() }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Withdrew {} to {}.", response.display, response.owner);
            }
        }
    }

    Ok(())
}
