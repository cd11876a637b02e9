// crates/plat-cli/src/commands/status.rs
//
// `plat status` — display node connection status and registry totals.

use plat_core::Credits;
use plat_rpc::handlers::node::NodeInfoResponse;

use crate::{output, rpc_client};

/// Run the status command.
pub async fn run(rpc: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info: NodeInfoResponse = rpc_client::call(rpc, "node/info", serde_json::json!({})).await?;

    if json {
        println!("{}", output::format_json(&info));
        return Ok(());
    }

    println!("Plat Registry v{}", info.version);
    println!();
    println!("Node Status");
    println!("-----------");
    println!("  RPC endpoint:   {}", rpc);
    println!("  Owner:          {}", info.owner);
    println!("  Treasury:       {}", info.treasury_account);
    println!("  Treasury funds: {}", Credits::from_cents(info.treasury_balance));
    println!("  Unit price:     {}", Credits::from_cents(info.unit_price));
    println!("  Assets:         {}", info.asset_count);
    println!("  Bank accounts:  {}", info.bank_accounts);
    println!("  Journal events: {}", info.event_count);
    println!("  Uptime:         {}s", info.uptime_secs);

    Ok(())
}
