// crates/plat-cli/src/commands/mod.rs
//
// Command module declarations for the Plat CLI.

pub mod account;
pub mod asset;
pub mod buy;
pub mod events;
pub mod holding;
pub mod init;
pub mod mint;
pub mod owner;
pub mod price;
pub mod sell;
pub mod status;
pub mod treasury;
