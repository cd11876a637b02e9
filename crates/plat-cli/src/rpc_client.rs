// crates/plat-cli/src/rpc_client.rs
//
// Lightweight JSON-RPC client that POSTs to the plat-daemon HTTP endpoint.

use serde::de::DeserializeOwned;

use plat_rpc::{JsonRpcRequest, JsonRpcResponse};

/// Send a JSON-RPC call to the daemon and return the parsed envelope.
pub async fn rpc_call(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<JsonRpcResponse, Box<dyn std::error::Error>> {
    let request = JsonRpcRequest {
        method: method.to_string(),
        params,
    };

    let client = reqwest::Client::new();
    let resp = client.post(endpoint).json(&request).send().await?;

    let rpc_response: JsonRpcResponse = resp.json().await?;
    Ok(rpc_response)
}

/// Call a method and unwrap the envelope into a typed result.
///
/// Failures surface as `[CODE] message`, e.g.
/// `[INSUFFICIENT_PAYMENT] insufficient payment: cost is 100 cents, paid 40`.
pub async fn call<T: DeserializeOwned>(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error>> {
    let response = rpc_call(endpoint, method, params).await?;

    if response.success {
        let value = response.result.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(value)?)
    } else {
        let detail = match response.error {
            Some(e) => format!("[{}] {}", e.code, e.message),
            None => "request failed with no error detail".to_string(),
        };
        Err(detail.into())
    }
}
