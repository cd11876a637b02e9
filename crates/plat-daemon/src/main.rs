// crates/plat-daemon/src/main.rs
//
// Binary entrypoint for the Plat registry daemon.
//
// Initializes tracing, parses CLI arguments, loads configuration, loads the
// owner key, constructs the settlement bank and property ledger, and starts
// the RPC server.

mod config;

use std::sync::Arc;

use clap::Parser;
use config::DaemonConfig;

use plat_bank::SettlementBank;
use plat_core::{derive_account, AccountId, Credits, Keypair};
use plat_ledger::PropertyLedger;
use plat_rpc::{PlatRpcServer, RpcConfig};

/// Stable label for the registry's account on the settlement bank. Sale
/// proceeds accumulate here until the owner withdraws them.
const TREASURY_LABEL: &str = "plat/registry-treasury";

/// Plat registry daemon — serves the fractional-ownership registry over RPC.
#[derive(Parser, Debug)]
#[command(name = "plat-daemon", version = "0.1.0", about = "Plat registry node daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.plat/config.toml")]
    config: String,

    /// Opening price per fraction unit in cents; overrides the config file.
    #[arg(long)]
    unit_price: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing init so the configured log level can
    // seed the filter. RUST_LOG still wins when set.
    let load_result = DaemonConfig::load(&expand_tilde(&args.config));
    let mut daemon_config = match &load_result {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match load_result {
        Ok(_) => tracing::info!("Loaded configuration from {}", args.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            args.config,
            e
        ),
    }

    // CLI --unit-price flag overrides the config file value.
    if let Some(price) = args.unit_price {
        daemon_config.unit_price = price;
    }

    tracing::info!("Plat Registry Daemon v0.1.0");
    tracing::info!(
        "RPC endpoint: {}:{}",
        daemon_config.rpc_host,
        daemon_config.rpc_port
    );
    tracing::info!(
        "Opening unit price: {} per fraction",
        Credits::from_cents(daemon_config.unit_price)
    );

    // ---------------------------------------------------------------
    // Load the registry owner's account from its key file.
    // ---------------------------------------------------------------
    let owner = load_owner_account(&daemon_config);
    let treasury_account = derive_account(TREASURY_LABEL);

    tracing::info!("Registry owner account: {}", owner);
    tracing::info!("Registry treasury account: {}", treasury_account);

    // ---------------------------------------------------------------
    // Construct the settlement bank and the property ledger.
    // ---------------------------------------------------------------
    let bank = Arc::new(SettlementBank::new());
    bank.open(owner);
    bank.open(treasury_account);

    let ledger = PropertyLedger::new(
        owner,
        treasury_account,
        daemon_config.unit_price,
        bank.clone(),
    )?;
    let ledger = Arc::new(tokio::sync::RwLock::new(ledger));

    // ---------------------------------------------------------------
    // Start the RPC server in the foreground.
    // ---------------------------------------------------------------
    let rpc_config = RpcConfig {
        host: daemon_config.rpc_host.clone(),
        port: daemon_config.rpc_port,
    };
    let rpc_server = PlatRpcServer::new(rpc_config, ledger, bank);

    rpc_server.start().await?;

    Ok(())
}

/// Load the owner account from the configured key file. Falls back to a
/// fresh ephemeral keypair when no usable key file exists, which leaves
/// owner-gated calls unusable from the CLI until `plat init` has run.
fn load_owner_account(config: &DaemonConfig) -> AccountId {
    let key_path = expand_tilde(&config.owner_key_path);

    match std::fs::read_to_string(&key_path) {
        Ok(hex_str) => match Keypair::from_hex(hex_str.trim()) {
            Ok(keypair) => keypair.account_id(),
            Err(e) => {
                tracing::warn!(
                    "Invalid owner key at {}: {}. Generating an ephemeral owner key; \
                     run `plat init` to create a persistent one.",
                    key_path,
                    e
                );
                Keypair::generate().account_id()
            }
        },
        Err(_) => {
            tracing::warn!(
                "Owner key not found at {}. Generating an ephemeral owner key; \
                 run `plat init` to create a persistent one.",
                key_path
            );
            Keypair::generate().account_id()
        }
    }
}

/// Expand a leading tilde in a path to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &path[1..]);
        }
    }
    path.to_string()
}
