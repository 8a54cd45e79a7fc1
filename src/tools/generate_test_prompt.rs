//! generate_test_prompt tool - Build a Terraform test-generation prompt for a folder
//!
//! Every outcome is a plain string: rejected folders and load failures come
//! back as `Error...` text rather than as errors of the call itself.

use async_trait::async_trait;
use chrono::Local;
use log::{error, info, warn};
use serde_json::Value;

use super::{Tool, ToolResult};
use crate::config::Config;
use crate::error::{Result, TfTestError};
use crate::prompt::{TemplateLoader, compose_prompt};
use crate::validation::{DEFAULT_EXTENSION, check_folder};

/// Name the tool is registered under
pub const TOOL_NAME: &str = "generate_test_prompt";

pub struct GenerateTestPromptTool {
    loader: TemplateLoader,
    extension: String,
}

impl GenerateTestPromptTool {
    pub fn new(loader: TemplateLoader, extension: impl Into<String>) -> Self {
        Self {
            loader,
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(TemplateLoader::new(config.template_file.clone()), config.extension.clone())
    }

    /// Validate `folder_path`, load the template and compose the prompt
    ///
    /// On rejection the result is `Error: <reason>`; when loading fails it is
    /// `Error generating test prompt: <error>`.
    pub async fn generate(&self, folder_path: &str) -> String {
        info!("=== MCP TOOL CALLED: {} ===", TOOL_NAME);
        info!("Request timestamp: {}", Local::now().to_rfc3339());
        info!("Generating prompt for folder: {}", folder_path);

        let files = match check_folder(folder_path, &self.extension) {
            Ok(files) => files,
            Err(rejection) => {
                warn!("Invalid folder path: {}", rejection);
                return format!("Error: {}", rejection);
            }
        };

        info!("Folder validation passed, preparing comprehensive testing prompt");
        info!("Found {} Terraform files: {:?}", files.len(), files);
        let folder_path = folder_path.trim();

        match self.build_prompt(folder_path).await {
            Ok(prompt) => {
                info!("Successfully generated prompt ({} characters)", prompt.chars().count());
                info!("=== RETURNING COMPREHENSIVE TESTING PROMPT ===");
                prompt
            }
            Err(e) => {
                error!("=== MCP TOOL FAILED ===");
                error!("Error in {}: {}", TOOL_NAME, e);
                error!("Full error details: {:?}", e);
                format!("Error generating test prompt: {}", e)
            }
        }
    }

    async fn build_prompt(&self, folder_path: &str) -> Result<String> {
        info!("Preparing Terraform test generation request");
        info!("Target folder: {}", folder_path);

        let template = self.loader.load().await?;
        let prompt = compose_prompt(folder_path, &template);

        info!("Successfully prepared comprehensive testing prompt");
        Ok(prompt)
    }
}

impl Default for GenerateTestPromptTool {
    fn default() -> Self {
        Self::new(TemplateLoader::default(), DEFAULT_EXTENSION)
    }
}

#[async_trait]
impl Tool for GenerateTestPromptTool {
    fn name(&self) -> &'static str {
        TOOL_NAME
    }

    fn description(&self) -> &'static str {
        "Generate a comprehensive prompt instructing a coding agent to write Terraform test cases \
         (unit, integration, mock and variable validation tests) for the configuration in a folder."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "folder_path": {
                    "type": "string",
                    "description": "Path to the folder containing Terraform (.tf) files, e.g. /path/to/terraform/modules/vpc"
                }
            },
            "required": ["folder_path"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult> {
        let folder_path = input
            .get("folder_path")
            .and_then(Value::as_str)
            .ok_or_else(|| TfTestError::InvalidParams("folder_path must be a string".to_string()))?;

        Ok(ToolResult::success(self.generate(folder_path).await))
    }
}
