use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};

use tftest_prompt::config::Config;
use tftest_prompt::logging::{resolve_level, setup_logging};
use tftest_prompt::mcp::{McpHandler, SERVER_NAME, StdioServer};
use tftest_prompt::tools::{GenerateTestPromptTool, ToolExecutor};

mod cli;

use cli::Cli;
use cli::commands::Commands;

/// Environment variables whose names contain any of these are logged at startup
const LOGGED_ENV_MARKERS: [&str; 3] = ["MCP", "TERRAFORM", "DOCKER"];

fn log_startup() {
    info!("Initializing Terraform Test Prompt Generator MCP");
    info!("Server started at: {}", chrono::Local::now().to_rfc3339());
    match std::env::current_dir() {
        Ok(dir) => info!("Working directory: {}", dir.display()),
        Err(e) => info!("Working directory unavailable: {}", e),
    }
    info!("Version: {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

async fn cmd_serve(config: &Config) -> Result<()> {
    info!("=== TERRAFORM TEST PROMPT GENERATOR MCP SERVER STARTING ===");
    info!("Process ID: {}", std::process::id());
    info!("Environment variables:");
    for (key, value) in std::env::vars() {
        if LOGGED_ENV_MARKERS.iter().any(|marker| key.contains(marker)) {
            info!("  {}={}", key, value);
        }
    }

    info!("Registering MCP tools...");
    let executor = ToolExecutor::standard(config);
    info!("Available MCP tools: {}", executor.tool_names().join(", "));

    eprintln!("{}", format!("Starting {} MCP Server...", SERVER_NAME).as_str().cyan());
    info!("Starting MCP server main loop...");

    let server = StdioServer::new(McpHandler::new(executor));
    let mut interrupted = false;
    let outcome = tokio::select! {
        result = server.run() => result.context("MCP server error"),
        _ = tokio::signal::ctrl_c() => {
            info!("Received keyboard interrupt, shutting down...");
            interrupted = true;
            Ok(())
        }
    };

    if let Err(e) = &outcome {
        error!("MCP server error: {}", e);
        error!("Full error details: {:?}", e);
    }
    info!("=== TERRAFORM TEST PROMPT GENERATOR MCP SERVER STOPPED ===");
    info!("Shutdown timestamp: {}", chrono::Local::now().to_rfc3339());

    // The runtime cannot drop while its blocking stdin read is pending
    if interrupted {
        std::process::exit(0);
    }
    outcome
}

async fn cmd_generate(folder_path: &str, config: &Config) -> Result<()> {
    info!("=== CLI MODE: Generating test prompt for {} ===", folder_path);
    let tool = GenerateTestPromptTool::from_config(config);
    println!("{}", tool.generate(folder_path).await);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments; usage errors exit here with status 2
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    let level = resolve_level(config.log_level.as_deref(), cli.is_verbose());
    setup_logging(&config.log_file, &level).context("Failed to setup logging")?;

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    log_startup();
    info!("Starting with config from: {:?}", cli.config);

    match &cli.command {
        None | Some(Commands::Serve) => cmd_serve(&config).await,
        Some(Commands::Generate { folder_path }) => cmd_generate(folder_path, &config).await,
    }
}
