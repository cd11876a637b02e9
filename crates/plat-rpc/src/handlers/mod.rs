// crates/plat-rpc/src/handlers/mod.rs
//
// RPC handler modules, grouped by method prefix.

pub mod admin;
pub mod bank;
pub mod market;
pub mod node;
pub mod registry;
pub mod treasury;
