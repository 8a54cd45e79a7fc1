//! CLI module for tftest-prompt - command-line interface and subcommands.
//!
//! With no subcommand the MCP server runs on stdio; `cli <folder_path>`
//! prints a single prompt instead.

pub mod commands;

pub use commands::Cli;
