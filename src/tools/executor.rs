//! Tool executor - manages tool registration and execution

use std::collections::HashMap;

use serde_json::Value;

use super::{GenerateTestPromptTool, Tool, ToolDefinition, ToolResult};
use crate::config::Config;
use crate::error::{Result, TfTestError};

/// Holds the tools served to MCP clients
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with the standard tools configured from `config`
    pub fn standard(config: &Config) -> Self {
        let mut executor = Self::new();
        executor.add_tool(Box::new(GenerateTestPromptTool::from_config(config)));
        executor
    }

    /// Create an empty executor (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the executor
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<_> = self.tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Execute a tool by name
    ///
    /// Unknown tool names and unusable arguments are `InvalidParams`.
    pub async fn execute(&self, name: &str, input: Value) -> Result<ToolResult> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => Err(TfTestError::InvalidParams(format!("Unknown tool: {}", name))),
        }
    }

    /// Get the list of tool names, sorted
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard(&Config::default())
    }
}
