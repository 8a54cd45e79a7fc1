//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the MCP server on stdio (default)
//! - cli: print the prompt for one folder

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tftest-prompt - Terraform test prompt generator for AI coding agents
#[derive(Parser, Debug)]
#[command(name = "tftest-prompt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server on stdin/stdout
    Serve,

    /// Print the test-generation prompt for a Terraform folder
    #[command(name = "cli", visible_alias = "generate")]
    Generate {
        /// Folder containing Terraform (.tf) files
        folder_path: String,
    },
}
