// crates/plat-cli/src/main.rs
//
// CLI entrypoint for the Plat registry developer tools.
//
// Provides subcommands for initializing keys, minting assets, trading
// fraction units, managing settlement accounts, and inspecting the ledger.

mod commands;
mod keys;
mod output;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::account::AccountCmd;
use commands::asset::AssetCmd;
use commands::buy::BuyCmd;
use commands::events::EventsCmd;
use commands::holding::HoldingCmd;
use commands::mint::MintCmd;
use commands::owner::OwnerCmd;
use commands::price::PriceCmd;
use commands::sell::SellCmd;
use commands::treasury::TreasuryCmd;

/// Plat CLI — developer tools for the fractional-ownership registry.
#[derive(Parser, Debug)]
#[command(
    name = "plat",
    version = "0.1.0",
    about = "Plat CLI — mint real-world assets and trade their fractions"
)]
struct Cli {
    /// RPC endpoint of the plat-daemon.
    #[arg(long, global = true, default_value = "http://localhost:50061")]
    rpc: String,

    /// Print raw JSON responses instead of formatted output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize ~/.plat: owner keypair, key directory, default config.
    Init,

    /// Display node connection status and registry totals.
    Status,

    /// Mint a new asset (owner only).
    Mint(MintCmd),

    /// Asset queries: get, list, document.
    #[command(subcommand)]
    Asset(AssetCmd),

    /// Show or set the global unit price.
    #[command(subcommand)]
    Price(PriceCmd),

    /// Buy fraction units from an asset's unsold pool.
    Buy(BuyCmd),

    /// Sell fraction units back to the registry.
    Sell(SellCmd),

    /// Show an account's holding of an asset.
    Holding(HoldingCmd),

    /// Registry treasury: balance, withdraw.
    #[command(subcommand)]
    Treasury(TreasuryCmd),

    /// Settlement accounts: new, open, fund, balance, transfer.
    #[command(subcommand)]
    Account(AccountCmd),

    /// Show the ledger event journal.
    Events(EventsCmd),

    /// Registry ownership: show, transfer.
    #[command(subcommand)]
    Owner(OwnerCmd),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Status => commands::status::run(&cli.rpc, cli.json).await?,
        Commands::Mint(cmd) => commands::mint::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Asset(cmd) => commands::asset::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Price(cmd) => commands::price::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Buy(cmd) => commands::buy::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Sell(cmd) => commands::sell::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Holding(cmd) => commands::holding::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Treasury(cmd) => commands::treasury::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Account(cmd) => commands::account::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Events(cmd) => commands::events::run(&cli.rpc, cli.json, cmd).await?,
        Commands::Owner(cmd) => commands::owner::run(&cli.rpc, cli.json, cmd).await?,
    }

    Ok(())
}
