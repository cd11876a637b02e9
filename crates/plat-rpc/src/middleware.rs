// crates/plat-rpc/src/middleware.rs
//
// Middleware for the RPC server.

use tonic::{Request, Status};

/// Logging interceptor for tonic requests.
///
/// Logs the metadata of each incoming request using the `tracing` crate
/// before it reaches the dispatcher.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    tracing::debug!("Incoming RPC request: {:?}", req.metadata());
    Ok(req)
}
