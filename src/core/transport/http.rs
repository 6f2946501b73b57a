//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to communicate with the MCP server.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportConfig, TransportError, TransportResult, config::HttpConfig};
use crate::core::{McpServer, server::INSTRUCTIONS};
use crate::domains::{resources::ResourceError, tools::ToolError};

/// MCP protocol version answered on `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_request() -> Self {
        Self::new(-32600, "Invalid Request")
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(-32601, format!("Method not found: {}", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(-32602, message)
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(e: ToolError) -> Self {
        Self::new(e.json_rpc_code(), e.to_string())
    }
}

impl From<ResourceError> for JsonRpcError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::NotFound(_) => Self::new(RESOURCE_NOT_FOUND, e.to_string()),
            ResourceError::InvalidUri(_) => Self::invalid_params(e.to_string()),
        }
    }
}

/// JSON-RPC code for an unknown resource URI.
const RESOURCE_NOT_FOUND: i32 = -32002;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Session state for maintaining conversation context.
    session: Arc<RwLock<Option<SessionState>>>,
}

/// Session state for a client.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts HTTP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Http(http_config) => Some(Self::new(http_config.clone())),
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            session: Arc::new(RwLock::new(None)),
        };

        let rpc_path = self.config.rpc_path.clone();
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(move || root_handler(rpc_path.clone())))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(rpc_path: String) -> impl IntoResponse {
    Json(json!({
        "name": "Toggl Track MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "transport": "HTTP",
        "endpoints": {
            "rpc": rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", rpc_path)
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let initialized = state
        .session
        .read()
        .await
        .as_ref()
        .is_some_and(|s| s.initialized);

    Json(json!({
        "status": "healthy",
        "sessionInitialized": initialized,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method = tracing::field::Empty))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::failure(request.id, JsonRpcError::invalid_request());
    }

    let JsonRpcRequest {
        id, method, params, ..
    } = request;

    let outcome = match method.as_str() {
        "initialize" => Ok(initialize(state).await),
        "tools/list" => Ok(json!({ "tools": state.server.list_tools() })),
        "tools/call" => call_tool(state, params).await,
        "resources/list" => Ok(json!({ "resources": state.server.list_resources().await })),
        "resources/templates/list" => Ok(json!({
            "resourceTemplates": state.server.list_resource_templates().await
        })),
        "resources/read" => read_resource(state, params).await,
        m if m.starts_with("notifications/") => {
            notification(state, m).await;
            Ok(Value::Null)
        }
        other => {
            warn!("Unknown method: {}", other);
            Err(JsonRpcError::method_not_found(other))
        }
    };

    match outcome {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(error) => JsonRpcResponse::failure(id, error),
    }
}

/// Read a required string member of the request params.
fn required_str<'a>(params: Option<&'a Value>, key: &str) -> Result<&'a str, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", key)))
}

async fn initialize(state: &AppState) -> Value {
    info!("Processing initialize request");

    *state.session.write().await = Some(SessionState {
        initialized: false,
        protocol_version: PROTOCOL_VERSION.to_string(),
    });

    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": INSTRUCTIONS
    })
}

async fn call_tool(state: &AppState, params: Option<Value>) -> Result<Value, JsonRpcError> {
    let name = required_str(params.as_ref(), "name")?;
    info!("Calling tool {} over HTTP", name);

    let arguments = params
        .as_ref()
        .and_then(|p| p.get("arguments"))
        .cloned()
        .unwrap_or_else(|| json!({}));

    Ok(state.server.call_tool(name, arguments).await?)
}

async fn read_resource(state: &AppState, params: Option<Value>) -> Result<Value, JsonRpcError> {
    let uri = required_str(params.as_ref(), "uri")?;
    info!("Reading resource {} over HTTP", uri);

    Ok(state.server.read_resource(uri).await?)
}

async fn notification(state: &AppState, method: &str) {
    if method != "notifications/initialized" {
        info!("Received notification: {}", method);
        return;
    }

    if let Some(session) = state.session.write().await.as_mut() {
        session.initialized = true;
        info!("Session initialized (protocol {})", session.protocol_version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};

    fn state(executor: ScriptedExecutor) -> AppState {
        AppState {
            server: McpServer::with_api(Config::default(), test_api(Arc::new(executor))),
            session: Arc::new(RwLock::new(None)),
        }
    }

    fn rpc(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn test_initialize_then_notification() {
        let state = state(ScriptedExecutor::new());

        let response = process_request(&state, rpc("initialize", json!({}))).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"].get("prompts").is_none());
        assert!(!state.session.read().await.as_ref().unwrap().initialized);

        process_request(&state, rpc("notifications/initialized", json!({}))).await;
        assert!(state.session.read().await.as_ref().unwrap().initialized);
    }

    #[tokio::test]
    async fn test_tools_list_and_call() {
        let state = state(ScriptedExecutor::new().ok(json!([{ "id": 1, "name": "Personal" }])));

        let response = process_request(&state, rpc("tools/list", json!({}))).await;
        assert_eq!(response.result.unwrap()["tools"].as_array().unwrap().len(), 14);

        let response = process_request(
            &state,
            rpc("tools/call", json!({ "name": "get_workspaces", "arguments": {} })),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("Personal"));
    }

    #[tokio::test]
    async fn test_tools_call_errors() {
        let state = state(ScriptedExecutor::new());

        let response =
            process_request(&state, rpc("tools/call", json!({ "name": "nope" }))).await;
        assert_eq!(response.error.unwrap().code, -32601);

        let response = process_request(
            &state,
            rpc(
                "tools/call",
                json!({ "name": "delete_time_entry", "arguments": { "workspaceId": 1 } }),
            ),
        )
        .await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_resources_read() {
        let state = state(ScriptedExecutor::new());

        let response =
            process_request(&state, rpc("resources/read", json!({ "uri": "greeting://Bob" }))).await;
        assert_eq!(
            response.result.unwrap()["contents"][0]["text"],
            "Hello, Bob!"
        );

        let response =
            process_request(&state, rpc("resources/read", json!({ "uri": "file:///etc" }))).await;
        assert_eq!(response.error.unwrap().code, RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_prompts_are_not_served() {
        let state = state(ScriptedExecutor::new());
        let response = process_request(&state, rpc("prompts/list", json!({}))).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[test]
    fn test_from_transport_config() {
        let transport = HttpTransport::from_transport_config(&TransportConfig::http(9090, "0.0.0.0"))
            .unwrap();
        assert_eq!(transport.address(), "0.0.0.0:9090");
    }
}
