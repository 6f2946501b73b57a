//! Common utilities shared across Toggl tools.
//!
//! Response/error formatting, argument parsing and the route builder used by
//! every tool definition.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::domains::toggl::{TogglApi, TogglError};

/// Prefix of every error message returned to clients.
pub const ERROR_PREFIX: &str = "An error occurred";

/// Longest response text returned before truncation.
pub const MAX_RESPONSE_CHARS: usize = 1_000_000;

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Render a payload as indented JSON in a single text block.
///
/// Never fails: a payload that cannot be serialized produces an error result
/// and oversized text is truncated.
pub fn format_response<T: Serialize + ?Sized>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(text) => CallToolResult::success(vec![Content::text(truncate_text(text))]),
        Err(e) => {
            warn!("Failed to serialize response: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "{}: Failed to serialize response: {}",
                ERROR_PREFIX, e
            ))])
        }
    }
}

/// Render an error as a single human-readable text block.
pub fn format_error(error: &impl Display) -> CallToolResult {
    let message = format!("{}: {}", ERROR_PREFIX, error);
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Format the outcome of an upstream call.
pub fn respond(result: Result<Value, TogglError>) -> CallToolResult {
    match result {
        Ok(value) => format_response(&value),
        Err(e) => format_error(&e),
    }
}

fn truncate_text(text: String) -> String {
    let total = text.chars().count();
    if total <= MAX_RESPONSE_CHARS {
        return text;
    }

    let mut truncated: String = text.chars().take(MAX_RESPONSE_CHARS).collect();
    truncated.push_str(&format!(
        "\n… [truncated {} characters]",
        total - MAX_RESPONSE_CHARS
    ));
    truncated
}

/// Deserialize tool arguments into a typed parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Build the Tool model (metadata) for a parameter type.
pub fn tool_model<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build a ToolRoute that parses `P` and hands it to `handler` with the API.
pub fn api_route<S, P, F, Fut>(tool: Tool, api: Arc<TogglApi>, handler: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(P, Arc<TogglApi>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = CallToolResult> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let api = api.clone();
        let handler = handler.clone();
        async move {
            let params: P = parse_arguments(args)?;
            Ok(handler(params, api).await)
        }
        .boxed()
    })
}

/// Parse HTTP arguments into `P`.
#[cfg(feature = "http")]
pub fn parse_http_arguments<P: DeserializeOwned>(arguments: Value) -> Result<P, String> {
    serde_json::from_value(arguments).map_err(|e| e.to_string())
}

/// Convert a tool result into the JSON body sent by the HTTP transport.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Text of the first content block of a result.
#[cfg(test)]
pub(crate) fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(t) => &t.text,
        _ => panic!("Expected text content"),
    }
}
