// crates/plat-cli/src/commands/account.rs
//
// `plat account {new, open, fund, balance, transfer}` — settlement account
// management: local keys plus their bank-side accounts.

use std::fs;

use clap::Subcommand;
use serde_json::json;

use plat_core::Keypair;
use plat_rpc::handlers::bank::{
    BankBalanceResponse, BankTransferResponse, FundResponse, OpenAccountResponse,
};

use crate::{keys, output, rpc_client};

/// Settlement account subcommands.
#[derive(Debug, Subcommand)]
pub enum AccountCmd {
    /// Generate a labeled keypair under ~/.plat/keys/.
    New {
        /// Label for the key file, e.g. "alice".
        #[arg(long)]
        label: String,
    },
    /// Open a settlement account for a key or hex account id.
    Open {
        /// Hex account id or local key label.
        #[arg(long)]
        account: String,
    },
    /// Seed cents into an account (owner-only faucet).
    Fund {
        /// Hex account id or local key label.
        #[arg(long)]
        account: String,
        /// Amount in cents.
        #[arg(long)]
        amount: u64,
    },
    /// Show an account's settlement balance.
    Balance {
        /// Hex account id or local key label.
        #[arg(long)]
        account: String,
    },
    /// Transfer cents between settlement accounts.
    Transfer {
        /// Label of the local key paying.
        #[arg(long)]
        from: String,
        /// Recipient: hex account id or local key label.
        #[arg(long)]
        to: String,
        /// Amount in cents.
        #[arg(long)]
        amount: u64,
    },
}

/// Run the account subcommand.
pub async fn run(rpc: &str, json: bool, cmd: &AccountCmd) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        AccountCmd::New { label } => {
            let keys_dir = keys::keys_dir()?;
            fs::create_dir_all(&keys_dir)?;

            let path = keys_dir.join(format!("{}.key", label));
            if path.exists() {
                return Err(format!("key '{}' already exists at {}", label, path.display()).into());
            }

            let keypair = Keypair::generate();
            fs::write(&path, keypair.to_hex())?;

            println!("Key '{}' created: {}", label, path.display());
            println!("  Account: {}", keypair.account_id());
            println!();
            println!(
                "Open its settlement account with `plat account open --account {}`.",
                label
            );
        }
        AccountCmd::Open { account } => {
            let account = keys::resolve_account(account)?;
            let response: OpenAccountResponse =
                rpc_client::call(rpc, "bank/open", json!({ "account": account })).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Account {} open with balance {} cents.",
                    response.account, response.balance
                );
            }
        }
        AccountCmd::Fund { account, amount } => {
            let owner = keys::load_owner()?;
            let account = keys::resolve_account(account)?;
            let response: FundResponse = rpc_client::call(
                rpc,
                "bank/fund",
                json!({
                    "caller": owner.account_id().to_hex(),
                    "account": account,
                    "amount": amount,
                }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Funded {}. New balance: {}",
                    response.account, response.display
                );
            }
        }
        AccountCmd::Balance { account } => {
            let account = keys::resolve_account(account)?;
            let response: BankBalanceResponse =
                rpc_client::call(rpc, "bank/balance", json!({ "account": account })).await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Account {} holds {} ({} cents).",
                    response.account, response.display, response.balance
                );
            }
        }
        AccountCmd::Transfer { from, to, amount } => {
            let from_key = keys::load_key(from)?;
            let to = keys::resolve_account(to)?;
            let response: BankTransferResponse = rpc_client::call(
                rpc,
                "bank/transfer",
                json!({
                    "from": from_key.account_id().to_hex(),
                    "to": to,
                    "amount": amount,
                }),
            )
            .await?;
            if json {
                println!("{}", output::format_json(&response));
            } else {
                println!(
                    "Transferred {} cents from {} to {}.",
                    response.amount, response.from, response.to
                );
            }
        }
    }

    Ok(())
}
