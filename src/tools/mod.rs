//! Tool system exposed over MCP
//!
//! Each tool has a name, description and JSON input schema, and turns a JSON
//! argument object into text. The only tool today is `generate_test_prompt`.

mod executor;
mod generate_test_prompt;

pub use executor::ToolExecutor;
pub use generate_test_prompt::{GenerateTestPromptTool, TOOL_NAME};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A tool that can be called by an MCP client
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the `name` in `tools/call`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    ///
    /// An `Err` means the arguments were unusable; failures of the work
    /// itself are reported inside the returned `ToolResult`.
    async fn execute(&self, input: Value) -> Result<ToolResult>;

    /// Definition advertised in `tools/list`
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Result from tool execution
///
/// Failures of the work are part of the text, so a result is never flagged
/// as an error on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub content: String,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Convert to the MCP `tools/call` result shape
    pub fn to_mcp_result(&self) -> Value {
        serde_json::json!({
            "content": [{ "type": "text", "text": self.content }],
            "isError": false,
        })
    }
}

/// Tool definition in MCP wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
