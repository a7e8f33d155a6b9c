use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::protocol::{
    DEFAULT_PROTOCOL_VERSION, JSONRPC_VERSION, JsonRpcError, JsonRpcId, JsonRpcMessage,
    JsonRpcResponse, ToolCallParams, error_codes,
};
use crate::state::AppState;
use crate::tools;

/// Serve newline-delimited JSON-RPC until the input closes or `cancel` fires.
///
/// Each request runs on its own task; responses are written as they complete.
pub async fn serve<R, W>(
    state: Arc<AppState>,
    reader: R,
    mut writer: W,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

    let read_loop = async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Shutdown requested");
                    break;
                }
                read = reader.read_until(b'\n', &mut buf) => read?,
            };

            if read == 0 {
                tracing::info!("Input closed");
                break;
            }

            // Non-UTF-8 input is a parse error, not a transport failure
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    tracing::warn!("Message is not valid UTF-8: {e}");
                    let _ = tx.send(JsonRpcResponse::error(
                        JsonRpcId::Null,
                        JsonRpcError::parse_error(e),
                    ));
                    continue;
                }
            };

            if line.is_empty() {
                continue;
            }

            let message: JsonRpcMessage = match serde_json::from_str(line) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("Unparseable message: {e}");
                    let _ = tx.send(JsonRpcResponse::error(
                        JsonRpcId::Null,
                        JsonRpcError::parse_error(e),
                    ));
                    continue;
                }
            };

            let state = Arc::clone(&state);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = handle_message(&state, message).await {
                    if tx.send(response).is_err() {
                        tracing::warn!("Response dropped: writer closed");
                    }
                }
            });
        }

        Ok::<_, anyhow::Error>(())
    };

    let write_loop = async {
        while let Some(response) = rx.recv().await {
            let mut bytes = serde_json::to_vec(&response)?;
            bytes.push(b'\n');
            writer.write_all(&bytes).await?;
            writer.flush().await?;
        }
        Ok::<_, anyhow::Error>(())
    };

    let (read_result, write_result) = tokio::join!(read_loop, write_loop);
    read_result?;
    write_result
}

/// Handle one message; notifications produce no response.
pub async fn handle_message(state: &AppState, message: JsonRpcMessage) -> Option<JsonRpcResponse> {
    let JsonRpcMessage {
        jsonrpc,
        id,
        method,
        params,
    } = message;

    let Some(id) = id else {
        tracing::debug!(method = ?method, "Notification received");
        return None;
    };

    if jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
        return Some(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }

    let Some(method) = method else {
        return Some(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_request("Missing method"),
        ));
    };

    tracing::debug!(%method, "Request received");

    let result = match method.as_str() {
        "initialize" => Ok(initialize_result(state, params.as_ref())),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": tools::tool_definitions() })),
        "tools/call" => call_tool(state, params).await,
        other => Err(JsonRpcError::method_not_found(other)),
    };

    Some(match result {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(error) => JsonRpcResponse::error(id, error),
    })
}

fn initialize_result(state: &AppState, params: Option<&serde_json::Value>) -> serde_json::Value {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    json!({
        "protocolVersion": protocol_version,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": state.config.server.name,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "instructions": "Use lookup_word to read Galician dictionary entries.",
    })
}

async fn call_tool(
    state: &AppState,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ToolCallParams = params
        .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))
        .and_then(|p| {
            serde_json::from_value(p)
                .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))
        })?;

    let result = tools::call_tool(state, params).await?;

    serde_json::to_value(result).map_err(|e| {
        JsonRpcError::new(
            error_codes::INTERNAL_ERROR,
            format!("Failed to encode result: {e}"),
        )
    })
}
