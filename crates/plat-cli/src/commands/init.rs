// crates/plat-cli/src/commands/init.rs
//
// `plat init` — create ~/.plat, generate the owner keypair, and write a
// default daemon configuration.

use std::fs;

use plat_core::Keypair;

use crate::keys;

const DEFAULT_CONFIG: &str = r#"# Plat registry daemon configuration.

rpc_host = "127.0.0.1"
rpc_port = 50061
owner_key_path = "~/.plat/owner.key"
# Opening price per fraction unit, in cents.
unit_price = 100
log_level = "info"
"#;

/// Run the init command.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let plat_dir = keys::plat_dir()?;
    let keys_dir = keys::keys_dir()?;
    fs::create_dir_all(&keys_dir)?;

    // Owner keypair. Never overwrite an existing key.
    let owner_path = keys::owner_key_path()?;
    if owner_path.exists() {
        let keypair = keys::load_owner()?;
        println!("Owner key already exists: {}", owner_path.display());
        println!("  Owner account: {}", keypair.account_id());
    } else {
        let keypair = Keypair::generate();
        fs::write(&owner_path, keypair.to_hex())?;
        println!("Owner key created: {}", owner_path.display());
        println!("  Owner account: {}", keypair.account_id());
        println!();
        println!("IMPORTANT: Back up this key file securely. It controls");
        println!("minting, pricing, funding, and treasury withdrawals.");
    }

    // Default daemon config, only when none exists.
    let config_path = plat_dir.join("config.toml");
    if config_path.exists() {
        println!("Config already exists: {}", config_path.display());
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        println!("Config created: {}", config_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Start the daemon:        plat-daemon");
    println!("  2. Create a trading key:    plat account new --label alice");
    println!("  3. Fund it (owner faucet):  plat account fund --account alice --amount 10000");

    Ok(())
}
