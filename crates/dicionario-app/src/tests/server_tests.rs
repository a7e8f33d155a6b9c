use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::{Canned, casa_payload, state_with};
use crate::protocol::error_codes;
use crate::server::serve;

/// Feed `requests` to the server and collect its responses, keyed by id order
async fn exchange(canned: Canned, requests: &[Value]) -> Vec<Value> {
    let (state, _) = state_with(canned);

    let mut input = String::new();
    for request in requests {
        input.push_str(&request.to_string());
        input.push('\n');
    }

    let mut output = Vec::new();
    serve(state, input.as_bytes(), &mut output, CancellationToken::new())
        .await
        .unwrap();

    let mut responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    responses.sort_by_key(|r| r["id"].as_i64().unwrap_or(-1));
    responses
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let responses = exchange(
        Canned::Missing,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": "2025-03-26"}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    // The notification gets no response
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "dicionario");
    assert_eq!(responses[1]["result"]["tools"][0]["name"], "lookup_word");
}

#[tokio::test]
async fn test_tool_call_returns_formatted_entry() {
    let responses = exchange(
        Canned::Payload(casa_payload()),
        &[json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                 "params": {"name": "lookup_word", "arguments": {"word": "casa"}}})],
    )
    .await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], false);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("casa (substantivo feminino)\n"));
    assert!(text.contains("1. Edificio para vivir"));
    assert!(text.contains("Example: A casa é grande"));
}

#[tokio::test]
async fn test_invalid_arguments_are_protocol_errors() {
    let responses = exchange(
        Canned::Missing,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                   "params": {"name": "lookup_word", "arguments": {"word": ""}}}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
                   "params": {"name": "translate", "arguments": {"word": "casa"}}}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 3);
    for response in &responses {
        assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
    }
}

/// Serve raw input bytes and parse every response line, in write order
async fn serve_raw(input: &[u8]) -> Vec<Value> {
    let (state, _) = state_with(Canned::Missing);

    let mut output = Vec::new();
    serve(state, input, &mut output, CancellationToken::new())
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_unknown_method_and_garbage() {
    let responses =
        serve_raw(b"not json\n\n{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"resources/list\"}\n")
            .await;

    assert_eq!(responses.len(), 2);
    let parse_error = responses.iter().find(|r| r["id"].is_null()).unwrap();
    assert_eq!(parse_error["error"]["code"], error_codes::PARSE_ERROR);
    let not_found = responses.iter().find(|r| r["id"] == 5).unwrap();
    assert_eq!(not_found["error"]["code"], error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_stop_server() {
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n");

    let responses = serve_raw(&input).await;

    assert_eq!(responses.len(), 2);
    let parse_error = responses.iter().find(|r| r["id"].is_null()).unwrap();
    assert_eq!(parse_error["error"]["code"], error_codes::PARSE_ERROR);
    let pong = responses.iter().find(|r| r["id"] == 1).unwrap();
    assert_eq!(pong["result"], json!({}));
}

#[tokio::test]
async fn test_request_with_null_id_is_answered() {
    let responses = serve_raw(b"{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"ping\"}\n").await;

    assert_eq!(responses.len(), 1);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[0]["result"], json!({}));
}

#[tokio::test]
async fn test_cancelled_server_stops_reading() {
    let (state, _) = state_with(Canned::Missing);
    let cancel = CancellationToken::new();
    cancel.cancel();

    // A reader that never yields: only cancellation can end the loop
    let (_client, server_side) = tokio::io::duplex(64);
    let mut output = Vec::new();
    serve(state, server_side, &mut output, cancel).await.unwrap();

    assert!(output.is_empty());
}
