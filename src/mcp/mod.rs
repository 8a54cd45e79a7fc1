//! MCP Layer - Model Context Protocol server over stdio
//!
//! This module provides:
//! - JSON-RPC 2.0 message types
//! - A handler that routes MCP methods to the tool executor
//! - A newline-delimited JSON server loop

pub mod handler;
pub mod messages;
pub mod server;

pub use handler::{DEFAULT_PROTOCOL_VERSION, McpHandler, SERVER_NAME};
pub use messages::{ErrorCode, McpError, McpRequest, McpResponse, Methods};
pub use server::{RequestHandler, StdioServer};
