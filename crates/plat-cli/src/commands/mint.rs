// crates/plat-cli/src/commands/mint.rs
//
// `plat mint` — mint a new asset with a fixed fraction supply. Owner only.

use clap::Args;
use serde_json::json;

use plat_rpc::handlers::registry::MintResponse;

use crate::{keys, output, rpc_client};

/// Mint a new asset.
#[derive(Debug, Args)]
pub struct MintCmd {
    /// Short human-readable name for the asset.
    #[arg(long)]
    pub name: String,

    /// Free-form description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Physical location of the property.
    #[arg(long)]
    pub location: String,

    /// Optional image reference.
    #[arg(long, default_value = "")]
    pub image: String,

    /// Display URI for the asset (e.g. a listing or gallery URL).
    #[arg(long)]
    pub display_uri: String,

    /// Total fraction units to create. Fixed for the life of the asset.
    #[arg(long)]
    pub supply: u64,
}

/// Run the mint command.
pub async fn run(rpc: &str, json: bool, cmd: &MintCmd) -> Result<(), Box<dyn std::error::Error>> {
    let owner = keys::load_owner()?;

    let response: MintResponse = rpc_client::call(
        rpc,
        "registry/mint",
        json!({
            "caller": owner.account_id().to_hex(),
            "name": cmd.name,
            "description": cmd.description,
            "location": cmd.location,
            "image": cmd.image,
            "display_uri": cmd.display_uri,
            "total_supply": cmd.supply,
        }),
    )
    .await?;

    if json {
        println!("{}", output::format_json(&response));
        return Ok(());
    }

    println!("Asset minted.");
    println!("  Asset id: {}", response.asset_id);
    println!("  Supply:   {} fraction units (all unsold)", response.total_supply);

    Ok(())
}
