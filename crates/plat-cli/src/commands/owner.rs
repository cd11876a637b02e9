// crates/plat-cli/src/commands/owner.rs
//
// `plat owner {show, transfer}` — registry ownership.

use clap::Subcommand;
use serde_json::json;

use plat_rpc::handlers::admin::{OwnerResponse, TransferOwnershipResponse};

use crate::{keys, output, rpc_client};

/// Ownership subcommands.
#[derive(Debug, Subcommand)]
pub enum OwnerCmd {
    /// Show the current registry owner.
    Show,
    /// Hand the registry to a new owner (current owner only).
    Transfer {
        /// New owner: hex account id or local key label.
        #[arg(long)]
        to: String,
    },
}

/// Run the owner subcommand.
pub async fn run(rpc: &str, json: bool, cmd: &OwnerCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        OwnerCmd::Show => {
            let response: OwnerResponse =
                rpc_client::call(rpc, "admin/owner", json!({})).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Registry owner: {}", response.owner);
            }
        }
        OwnerCmd::Transfer { to } => {
            let owner = keys::load_owner()?;
            let new_owner = keys::resolve_account(to)?;
            let response: TransferOwnershipResponse = rpc_client::call(
                rpc,
                "admin/transfer_ownership",
                json!({
                    "caller": owner.account_id().to_hex(),
                    "new_owner": new_owner,
                }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Ownership transferred.");
                println!("  Previous: {}", response.previous);
                println!("  New:      {}", response.new_owner);
                println!();
                println!("Owner-gated commands now require the new owner's key file at");
                println!("~/.plat/owner.key.");
            }
        }
    }

    Ok(())
}
