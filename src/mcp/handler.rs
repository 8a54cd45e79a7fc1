//! MCP request handler - routes protocol methods to the tool executor

use log::{debug, info, warn};
use serde_json::Value;

use super::messages::{McpError, McpRequest, McpResponse, Methods};
use super::server::RequestHandler;
use crate::error::TfTestError;
use crate::tools::ToolExecutor;

/// Server name reported in `initialize`
pub const SERVER_NAME: &str = "TerraformTestPromptGenerator";

/// Protocol version used when the client does not ask for one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpHandler {
    executor: ToolExecutor,
}

impl McpHandler {
    pub fn new(executor: ToolExecutor) -> Self {
        Self { executor }
    }

    fn initialize(&self, params: &Value) -> Value {
        let protocol_version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        if let Some(client) = params.get("clientInfo") {
            info!("Client connected: {}", client);
        }

        serde_json::json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn list_tools(&self) -> Value {
        serde_json::json!({ "tools": self.executor.definitions() })
    }

    async fn call_tool(&self, params: &Value) -> Result<Value, McpError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| McpError::invalid_params("tools/call requires a string 'name'"))?;
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()));

        info!("Calling tool: {}", name);
        match self.executor.execute(name, arguments).await {
            Ok(result) => Ok(result.to_mcp_result()),
            Err(TfTestError::InvalidParams(message)) => Err(McpError::invalid_params(message)),
            Err(e) => Err(McpError::internal_error(e.to_string())),
        }
    }
}

impl RequestHandler for McpHandler {
    async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        debug!("Handling method: {}", request.method);

        let Some(id) = request.id else {
            // Notifications never get a response
            if request.method != Methods::INITIALIZED {
                debug!("Ignoring notification: {}", request.method);
            }
            return None;
        };

        let outcome = match request.method.as_str() {
            Methods::INITIALIZE => Ok(self.initialize(&request.params)),
            Methods::PING => Ok(serde_json::json!({})),
            Methods::TOOLS_LIST => Ok(self.list_tools()),
            Methods::TOOLS_CALL => self.call_tool(&request.params).await,
            other => {
                warn!("Unknown method: {}", other);
                Err(McpError::method_not_found(other))
            }
        };

        Some(match outcome {
            Ok(result) => McpResponse::success(id, result),
            Err(error) => McpResponse::error(id, error),
        })
    }
}
