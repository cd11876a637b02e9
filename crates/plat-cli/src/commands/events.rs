// crates/plat-cli/src/commands/events.rs
//
// `plat events` — show the tail of the ledger event journal.

use clap::Args;
use serde_json::json;
use tabled::Tabled;

use plat_core::LedgerEvent;
use plat_rpc::handlers::registry::EventsResponse;

use crate::{output, rpc_client};

/// Show journal events.
#[derive(Debug, Args)]
pub struct EventsCmd {
    /// Maximum entries to show, newest last.
    #[arg(long, default_value = "20")]
    pub limit: usize,
}

/// A row in the events table.
#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Seq")]
    seq: u64,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Event")]
    kind: String,
    #[tabled(rename = "Details")]
    details: String,
}

/// Run the events command.
pub async fn run(rpc: &str, json: bool, cmd: &EventsCmd) -> Result<(), Box<dyn std::error::Error>> {
    let response: EventsResponse =
        rpc_client::call(rpc, "registry/events", json!({ "limit": cmd.limit })).await?;

    if json {
        println!("{}", output::format_json(&response));
        return Ok(());
    }

    if response.events.is_empty() {
        println!("No events recorded yet.");
        return Ok(());
    }

    let rows: Vec<EventRow> = response
        .events
        .iter()
        .map(|record| EventRow {
            seq: record.seq,
            time: record.at.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: record.event.kind().to_string(),
            details: describe(&record.event),
        })
        .collect();

    println!("{}", output::format_table(&rows));
    println!(
        "Showing {} of {} event(s)",
        response.events.len(),
        response.total
    );

    Ok(())
}

/// One-line summary of an event for tabular output. Account ids are
/// shortened to their first eight hex characters.
fn describe(event: &LedgerEvent) -> String {
    match event {
        LedgerEvent::AssetMinted {
            asset_id,
            total_supply,
        } => format!("asset {} minted, supply {}", asset_id, total_supply),
        LedgerEvent::FractionsPurchased {
            buyer,
            asset_id,
            units,
        } => format!("{} bought {} of asset {}", short(&buyer.to_hex()), units, asset_id),
        LedgerEvent::FractionsSold {
            seller,
            asset_id,
            units,
        } => format!("{} sold {} of asset {}", short(&seller.to_hex()), units, asset_id),
        LedgerEvent::PriceUpdated { new_price } => {
            format!("unit price set to {} cents", new_price)
        }
        LedgerEvent::Withdrawal { owner, amount } => {
            format!("{} withdrew {} cents", short(&owner.to_hex()), amount)
        }
        LedgerEvent::OwnershipTransferred { previous, new } => {
            format!("{} -> {}", short(&previous.to_hex()), short(&new.to_hex()))
        }
    }
}

fn short(hex: &str) -> String {
    hex.chars().take(8).collect()
}
