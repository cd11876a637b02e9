// crates/plat-rpc/src/lib.rs
//
// plat-rpc: the service surface of the Plat registry.
//
// A single tonic service carries JSON-RPC style requests: a method string
// such as "market/buy" plus a JSON params payload. Handlers decode the
// params, take the ledger lock (write for mutations, read for queries), and
// answer with typed DTOs. Failures travel as stable error codes alongside
// the human-readable message.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{JsonRpcRequest, JsonRpcResponse, PlatRpcServer, RpcConfig, RpcError};

use std::sync::Arc;

use tokio::sync::RwLock;

use plat_ledger::PropertyLedger;

/// The ledger as every handler sees it: one writer or many readers.
pub type SharedLedger = Arc<RwLock<PropertyLedger>>;
