//! tftest-prompt - Terraform test prompt generator
//!
//! Serves a single MCP tool, `generate_test_prompt`, which checks that a
//! folder holds Terraform configuration and returns instructions for an AI
//! coding agent to write a test suite for it.

pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod prompt;
pub mod tools;
pub mod validation;

pub use error::{Result, TfTestError};
