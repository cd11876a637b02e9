// crates/plat-rpc/src/server.rs
//
// RPC server setup: PlatRpcServer and RpcConfig.
//
// Uses a JSON-RPC-over-gRPC approach. A single tonic unary service accepts
// JSON-encoded requests with a method field, dispatches to the appropriate
// handler, and returns JSON-encoded responses.
//
// This avoids the need for proto codegen while still using tonic's server
// infrastructure for transport and middleware.

use std::sync::Arc;
use std::time::Instant;

use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};

use tonic::transport::Server;
use tonic::Status;

use plat_bank::SettlementBank;
use plat_core::{DeedEncoder, JsonDeedEncoder, PlatError};

use crate::handlers;
use crate::middleware;
use crate::SharedLedger;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50061,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
/// The client sends a method name and a JSON params payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "market/buy", "registry/get").
    pub method: String,
    /// JSON-encoded parameters for the method.
    pub params: serde_json::Value,
}

/// A structured RPC failure: stable code plus human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Machine-checkable code, e.g. "INSUFFICIENT_PAYMENT".
    pub code: String,
    /// What went wrong, for humans.
    pub message: String,
}

impl RpcError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL".to_string(),
            message: message.into(),
        }
    }

    pub fn unknown_method(method: &str) -> Self {
        Self {
            code: "UNKNOWN_METHOD".to_string(),
            message: format!("unknown method: {}", method),
        }
    }
}

impl From<PlatError> for RpcError {
    fn from(e: PlatError) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// The failure (if not success).
    pub error: Option<RpcError>,
}

// ---------------------------------------------------------------------------
// PlatRpcServer
// ---------------------------------------------------------------------------

/// The RPC server for the Plat registry.
///
/// Holds Arc references to the shared ledger and settlement bank and exposes
/// a tonic-based server with JSON-RPC dispatching.
#[derive(Clone)]
pub struct PlatRpcServer {
    /// Server configuration.
    config: RpcConfig,
    /// The registry ledger behind its single-writer lock.
    ledger: SharedLedger,
    /// Settlement accounts shared with the ledger's value channel.
    bank: Arc<SettlementBank>,
    /// Deed document encoder for the query surface.
    encoder: Arc<dyn DeedEncoder>,
    /// Daemon start time for uptime reporting.
    started_at: Instant,
}

impl std::fmt::Debug for PlatRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatRpcServer")
            .field("config", &self.config)
            .finish()
    }
}

impl PlatRpcServer {
    /// Create a new PlatRpcServer.
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port).
    /// * `ledger` - Shared property ledger.
    /// * `bank` - Shared settlement bank.
    pub fn new(config: RpcConfig, ledger: SharedLedger, bank: Arc<SettlementBank>) -> Self {
        Self {
            config,
            ledger,
            bank,
            encoder: Arc::new(JsonDeedEncoder),
            started_at: Instant::now(),
        }
    }

    /// Replace the deed encoder used by `registry/document`.
    pub fn with_encoder(mut self, encoder: Arc<dyn DeedEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Start the RPC server and listen for requests.
    ///
    /// This binds to the configured address and serves requests until the
    /// process is terminated.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        tracing::info!("Plat RPC server starting on {}", addr);

        let service = PlatServiceImpl {
            ledger: self.ledger.clone(),
            bank: self.bank.clone(),
            encoder: self.encoder.clone(),
            started_at: self.started_at,
        };

        Server::builder()
            .accept_http1(true)
            .add_service(tonic::service::interceptor::InterceptedService::new(
                PlatJsonRpcServer::new(service),
                middleware::logging_interceptor,
            ))
            .serve(addr)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// gRPC Service Definition (manual, no proto codegen)
// ---------------------------------------------------------------------------

/// The internal service implementation that holds shared state
/// and dispatches JSON-RPC calls to the appropriate handler.
#[derive(Clone)]
struct PlatServiceImpl {
    ledger: SharedLedger,
    bank: Arc<SettlementBank>,
    encoder: Arc<dyn DeedEncoder>,
    started_at: Instant,
}

impl PlatServiceImpl {
    /// Dispatch a JSON-RPC request to the appropriate handler based on the
    /// method name.
    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let result = match request.method.as_str() {
            // Registry
            "registry/mint" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::registry::handle_mint(&ledger, r).await }
                })
                .await
            }
            "registry/metadata" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::registry::handle_update_metadata(&ledger, r).await }
                })
                .await
            }
            "registry/get" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::registry::handle_get_asset(&ledger, r).await }
                })
                .await
            }
            "registry/list" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::registry::handle_list_assets(&ledger, r).await }
                })
                .await
            }
            "registry/document" => {
                let encoder = self.encoder.clone();
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move {
                        handlers::registry::handle_document(&ledger, encoder.as_ref(), r).await
                    }
                })
                .await
            }
            "registry/events" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::registry::handle_events(&ledger, r).await }
                })
                .await
            }

            // Market
            "market/price" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::market::handle_price(&ledger, r).await }
                })
                .await
            }
            "market/set_price" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::market::handle_set_price(&ledger, r).await }
                })
                .await
            }
            "market/buy" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::market::handle_buy(&ledger, r).await }
                })
                .await
            }
            "market/sell" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::market::handle_sell(&ledger, r).await }
                })
                .await
            }
            "market/holding" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::market::handle_holding(&ledger, r).await }
                })
                .await
            }

            // Treasury
            "treasury/balance" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::treasury::handle_treasury_balance(&ledger, r).await }
                })
                .await
            }
            "treasury/withdraw" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::treasury::handle_withdraw(&ledger, r).await }
                })
                .await
            }

            // Bank
            "bank/open" => {
                let bank = self.bank.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::bank::handle_open_account(&bank, r).await
                })
                .await
            }
            "bank/fund" => {
                let bank = self.bank.clone();
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::bank::handle_fund(&ledger, &bank, r).await }
                })
                .await
            }
            "bank/balance" => {
                let bank = self.bank.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::bank::handle_bank_balance(&bank, r).await
                })
                .await
            }
            "bank/transfer" => {
                let bank = self.bank.clone();
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::bank::handle_bank_transfer(&ledger, &bank, r).await }
                })
                .await
            }

            // Admin
            "admin/owner" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::admin::handle_owner(&ledger, r).await }
                })
                .await
            }
            "admin/transfer_ownership" => {
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move { handlers::admin::handle_transfer_ownership(&ledger, r).await }
                })
                .await
            }

            // Node
            "node/info" => {
                let bank = self.bank.clone();
                let started_at = self.started_at;
                dispatch_handler(request.params, |r| {
                    let ledger = self.ledger.clone();
                    async move {
                        handlers::node::handle_node_info(&ledger, &bank, started_at, r).await
                    }
                })
                .await
            }
            "node/health" => {
                let started_at = self.started_at;
                dispatch_handler(request.params, |r| async move {
                    handlers::node::handle_health(started_at, r).await
                })
                .await
            }

            _ => Err(RpcError::unknown_method(&request.method)),
        };

        match result {
            Ok(value) => JsonRpcResponse {
                success: true,
                result: Some(value),
                error: None,
            },
            Err(err) => JsonRpcResponse {
                success: false,
                result: None,
                error: Some(err),
            },
        }
    }
}

/// Generic dispatch helper: deserialize params into a request type, call the
/// handler, and serialize the result to JSON. Ledger errors keep their
/// stable code; envelope problems map to BAD_REQUEST / INTERNAL.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, RpcError>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: std::future::Future<Output = Result<Resp, PlatError>>,
{
    let request: Req = serde_json::from_value(params)
        .map_err(|e| RpcError::bad_request(format!("failed to deserialize request: {}", e)))?;
    let response = handler(request).await?;
    serde_json::to_value(response)
        .map_err(|e| RpcError::internal(format!("failed to serialize response: {}", e)))
}

// ---------------------------------------------------------------------------
// Tonic Service Wiring
// ---------------------------------------------------------------------------
// We define a single gRPC service with one method: `Call`. The request and
// response are raw bytes (JSON-encoded JsonRpcRequest/Response). This avoids
// proto codegen entirely.

/// The tonic service wrapper. Implements the low-level gRPC service by
/// accepting bytes, deserializing as JSON-RPC, and dispatching.
#[derive(Clone)]
pub struct PlatJsonRpcServer {
    inner: PlatServiceImpl,
}

impl std::fmt::Debug for PlatJsonRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatJsonRpcServer").finish()
    }
}

impl PlatJsonRpcServer {
    fn new(inner: PlatServiceImpl) -> Self {
        Self { inner }
    }
}

// Implement tonic::codegen::Service manually for our JSON-RPC service.
// This is the pattern for defining tonic services without proto codegen.
impl tonic::server::NamedService for PlatJsonRpcServer {
    const NAME: &'static str = "plat.rpc.RegistryService";
}

impl<B> tower_service::Service<http::Request<B>> for PlatJsonRpcServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    B::Data: Send,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            // Read the full request body.
            let body = req.into_body();
            let body_bytes = match collect_body(body).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!("Failed to read request body: {}", e);
                    let resp = JsonRpcResponse {
                        success: false,
                        result: None,
                        error: Some(RpcError::bad_request(format!(
                            "failed to read request body: {}",
                            e
                        ))),
                    };
                    let json = serde_json::to_vec(&resp).unwrap_or_default();
                    return Ok(build_response(json));
                }
            };

            // Deserialize the JSON-RPC request.
            let rpc_request: JsonRpcRequest = match serde_json::from_slice(&body_bytes) {
                Ok(r) => r,
                Err(e) => {
                    let resp = JsonRpcResponse {
                        success: false,
                        result: None,
                        error: Some(RpcError::bad_request(format!(
                            "invalid JSON-RPC request: {}",
                            e
                        ))),
                    };
                    let json = serde_json::to_vec(&resp).unwrap_or_default();
                    return Ok(build_response(json));
                }
            };

            // Dispatch to the appropriate handler.
            let rpc_response = inner.dispatch(rpc_request).await;
            let json = serde_json::to_vec(&rpc_response).unwrap_or_default();
            Ok(build_response(json))
        })
    }
}

/// Collect the body of an HTTP request into bytes.
async fn collect_body<B>(body: B) -> Result<Vec<u8>, String>
where
    B: HttpBody + Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    B::Data: Send,
{
    let mut collected = Vec::new();
    let mut body = std::pin::pin!(body);

    loop {
        match std::future::poll_fn(|cx| HttpBody::poll_frame(body.as_mut(), cx)).await {
            Some(Ok(frame)) => {
                if let Ok(data) = frame.into_data() {
                    use bytes::Buf;
                    collected.extend_from_slice(data.chunk());
                }
            }
            Some(Err(e)) => return Err(e.into().to_string()),
            None => break,
        }
    }

    Ok(collected)
}

/// Build an HTTP response with the given JSON body.
fn build_response(json: Vec<u8>) -> http::Response<tonic::body::BoxBody> {
    let body = tonic::body::BoxBody::new(
        http_body_util::Full::new(bytes::Bytes::from(json))
            .map_err(|e| Status::internal(format!("body error: {}", e))),
    );

    http::Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}
