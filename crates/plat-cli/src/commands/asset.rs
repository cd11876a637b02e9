// crates/plat-cli/src/commands/asset.rs
//
// `plat asset {get, list, document, edit}` — asset queries and metadata edits.

use clap::Subcommand;
use serde_json::json;
use tabled::Tabled;

use plat_rpc::handlers::registry::{
    AssetView, DocumentResponse, GetAssetResponse, ListAssetsResponse,
};

use crate::{keys, output, rpc_client};

/// Asset subcommands.
#[derive(Debug, Subcommand)]
pub enum AssetCmd {
    /// Fetch one asset by id.
    Get {
        /// The asset id.
        #[arg(long)]
        id: u64,
    },
    /// List all minted assets.
    List,
    /// Fetch an asset's deed document and data URI.
    Document {
        /// The asset id.
        #[arg(long)]
        id: u64,
    },
    /// Replace an asset's descriptive metadata (owner only).
    Edit {
        /// The asset id.
        #[arg(long)]
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value = "")]
        image: String,
    },
}

/// A row in the asset listing table.
#[derive(Tabled)]
struct AssetRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Supply")]
    supply: u64,
    #[tabled(rename = "Unsold")]
    unsold: u64,
    #[tabled(rename = "Holders")]
    holders: usize,
}

/// Run the asset subcommand.
pub async fn run(rpc: &str, json: bool, cmd: &AssetCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        AssetCmd::Get { id } => {
            let response: GetAssetResponse =
                rpc_client::call(rpc, "registry/get", json!({ "asset_id": id })).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                print_asset(&response.asset);
            }
        }
        AssetCmd::List => {
            let response: ListAssetsResponse =
                rpc_client::call(rpc, "registry/list", json!({})).await?;
            if json {
                println!("{}", output::format_json(&response));
                return Ok(());
            }

            if response.assets.is_empty() {
                println!("No assets minted yet.");
                return Ok(());
            }

            let rows: Vec<AssetRow> = response
                .assets
                .iter()
                .map(|a| AssetRow {
                    id: a.asset_id,
                    name: a.name.clone(),
                    location: a.location.clone(),
                    supply: a.total_supply,
                    unsold: a.unsold,
                    holders: a.holders,
                })
                .collect();
            println!("{}", output::format_table(&rows));
            println!("{} asset(s)", response.total);
        }
        AssetCmd::Document { id } => {
            let response: DocumentResponse =
                rpc_client::call(rpc, "registry/document", json!({ "asset_id": id })).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Deed document for asset {}:", response.asset_id);
                println!("{}", output::format_json(&response.document));
                println!();
                println!("Data URI:");
                println!("{}", response.uri);
            }
        }
        AssetCmd::Edit {
            id,
            name,
            description,
            location,
            image,
        } => {
            let owner = keys::load_owner()?;
            let response: AssetView = rpc_client::call(
                rpc,
                "registry/metadata",
                json!({
                    "caller": owner.account_id().to_hex(),
                    "asset_id": id,
                    "name": name,
                    "description": description,
                    "location": location,
                    "image": image,
                }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!("Metadata updated.");
                print_asset(&response);
            }
        }
    }

    Ok(())
}

fn print_asset(asset: &AssetView) {
    println!("Asset {}", asset.asset_id);
    println!("  Name:        {}", asset.name);
    if !asset.description.is_empty() {
        println!("  Description: {}", asset.description);
    }
    println!("  Location:    {}", asset.location);
    if !asset.image.is_empty() {
        println!("  Image:       {}", asset.image);
    }
    println!("  Display URI: {}", asset.display_uri);
    println!("  Supply:      {} units", asset.total_supply);
    println!("  Unsold:      {} units", asset.unsold);
    println!("  Holders:     {}", asset.holders);
    println!("  Minted at:   {}", asset.created_at);
}
