use dicionario_core::{LookupOutcome, format_entry, not_found_message};
use serde_json::json;

use crate::protocol::{JsonRpcError, ToolCallParams, ToolDef, ToolResult};
use crate::state::AppState;

pub const LOOKUP_TOOL: &str = "lookup_word";

/// Message shown to the agent when the lookup fails for reasons it cannot fix
pub const LOOKUP_FAILED_MESSAGE: &str =
    "The dictionary could not be reached right now. Please try again later.";

pub fn tool_definitions() -> Vec<ToolDef> {
    vec![ToolDef {
        name: LOOKUP_TOOL.to_string(),
        description: "Look up a Galician word in the Real Academia Galega dictionary. \
                      Returns its part of speech, numbered definitions with examples and \
                      cross-references, and idiomatic expressions."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "word": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The word to look up, e.g. \"casa\""
                }
            },
            "required": ["word"],
            "additionalProperties": false
        }),
    }]
}

/// Dispatch a `tools/call` request.
///
/// Invalid arguments are protocol errors; lookup failures are tool results
/// flagged with `isError` so the agent sees them as text.
pub async fn call_tool(state: &AppState, params: ToolCallParams) -> Result<ToolResult, JsonRpcError> {
    match params.name.as_str() {
        LOOKUP_TOOL => {
            let word = word_argument(&params.arguments)?;
            Ok(lookup_word(state, &word).await)
        }
        other => Err(JsonRpcError::invalid_params(format!("Unknown tool: {other}"))),
    }
}

/// Validate the `word` argument against the tool's input schema
pub fn word_argument(arguments: &serde_json::Value) -> Result<String, JsonRpcError> {
    let word = arguments
        .get("word")
        .ok_or_else(|| JsonRpcError::invalid_params("Missing required argument: word"))?
        .as_str()
        .ok_or_else(|| JsonRpcError::invalid_params("Argument 'word' must be a string"))?
        .trim();

    if word.is_empty() {
        return Err(JsonRpcError::invalid_params("Argument 'word' must not be empty"));
    }

    Ok(word.to_string())
}

/// Run a lookup and render it as a tool result
pub async fn lookup_word(state: &AppState, word: &str) -> ToolResult {
    match state.lookup.lookup(word).await {
        Ok(LookupOutcome::Found(extraction)) => {
            let result = ToolResult::text(format_entry(&extraction.entry));
            if !state.config.server.include_structured {
                return result;
            }
            match serde_json::to_value(&extraction.entry) {
                Ok(value) => result.with_structured(value),
                Err(e) => {
                    tracing::error!("Failed to serialize entry: {e}");
                    result
                }
            }
        }
        Ok(LookupOutcome::NotFound { .. }) => ToolResult::text(not_found_message(word)),
        Err(e) => {
            tracing::error!(word, "Dictionary lookup failed: {e}");
            ToolResult::error(LOOKUP_FAILED_MESSAGE)
        }
    }
}
