//! Entry point integration tests
//!
//! Drives `generate_test_prompt` through the public API with the template
//! placed in temporary install and working directories.

use std::fs;

use tempfile::TempDir;
use tftest_prompt::prompt::{DEFAULT_TEMPLATE_FILE, PLACEHOLDER, TemplateLoader};
use tftest_prompt::tools::{GenerateTestPromptTool, ToolExecutor};
use tftest_prompt::validation::DEFAULT_EXTENSION;

struct Env {
    install: TempDir,
    cwd: TempDir,
    tool: GenerateTestPromptTool,
}

fn env() -> Env {
    let install = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let loader = TemplateLoader::with_locations(DEFAULT_TEMPLATE_FILE, install.path(), cwd.path());
    Env {
        tool: GenerateTestPromptTool::new(loader, DEFAULT_EXTENSION),
        install,
        cwd,
    }
}

fn terraform_module() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.tf"), "resource \"aws_vpc\" \"this\" {}").unwrap();
    fs::write(dir.path().join("variables.tf"), "variable \"cidr\" {}").unwrap();
    dir
}

#[tokio::test]
async fn test_prompt_from_install_template() {
    let env = env();
    fs::write(env.install.path().join(DEFAULT_TEMPLATE_FILE), "install {terraform_code_path}").unwrap();
    let module = terraform_module();
    let folder = module.path().to_string_lossy().to_string();

    let prompt = env.tool.generate(&folder).await;
    assert!(prompt.contains(&format!("install TERRAFORM_FOLDER_PATH: {}", folder)));
    assert!(prompt.contains(&format!("`{}/tests/`", folder)));
    assert!(!prompt.contains(PLACEHOLDER));
}

#[tokio::test]
async fn test_prompt_from_working_directory_template() {
    let env = env();
    fs::write(env.cwd.path().join(DEFAULT_TEMPLATE_FILE), "cwd {terraform_code_path}").unwrap();
    let module = terraform_module();

    let prompt = env.tool.generate(&module.path().to_string_lossy()).await;
    assert!(prompt.contains("cwd TERRAFORM_FOLDER_PATH: "));
}

#[tokio::test]
async fn test_install_template_preferred_over_working_directory() {
    let env = env();
    fs::write(env.install.path().join(DEFAULT_TEMPLATE_FILE), "from install").unwrap();
    fs::write(env.cwd.path().join(DEFAULT_TEMPLATE_FILE), "from cwd").unwrap();
    let module = terraform_module();

    let prompt = env.tool.generate(&module.path().to_string_lossy()).await;
    assert!(prompt.contains("from install"));
    assert!(!prompt.contains("from cwd"));
}

#[tokio::test]
async fn test_missing_template_returns_error_string() {
    let env = env();
    let module = terraform_module();

    let prompt = env.tool.generate(&module.path().to_string_lossy()).await;
    assert!(prompt.starts_with("Error"));
}

#[tokio::test]
async fn test_validation_runs_before_template_load() {
    // No template anywhere: a rejected folder still reports the validation reason
    let env = env();
    let empty = TempDir::new().unwrap();

    let prompt = env.tool.generate(&empty.path().to_string_lossy()).await;
    assert_eq!(prompt, "Error: No Terraform (.tf) files found in the specified folder");
}

#[tokio::test]
async fn test_rejections_in_priority_order() {
    let env = env();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.tf");
    fs::write(&file, "").unwrap();
    let missing = dir.path().join("missing");

    assert_eq!(
        env.tool.generate("   ").await,
        "Error: Folder path cannot be empty or only whitespace"
    );
    assert_eq!(
        env.tool.generate(&missing.to_string_lossy()).await,
        format!("Error: Folder path '{}' does not exist", missing.display())
    );
    assert_eq!(
        env.tool.generate(&file.to_string_lossy()).await,
        format!("Error: Path '{}' is not a directory", file.display())
    );
}

#[tokio::test]
async fn test_executor_dispatches_to_entry_point() {
    let executor = ToolExecutor::default();
    let result = executor
        .execute("generate_test_prompt", serde_json::json!({"folder_path": ""}))
        .await
        .unwrap();
    assert_eq!(result.content, "Error: Folder path must be a non-empty string");
}
