//! MCP Server - newline-delimited JSON-RPC over stdio
//!
//! Provides:
//! - Request routing through a `RequestHandler`
//! - One JSON line per response, flushed immediately
//! - Parse and shape errors answered in-band so the client never stalls

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::{Result, TfTestError};
use crate::mcp::messages::{McpError, McpRequest, McpResponse};

/// Handler trait for processing requests
pub trait RequestHandler: Send + Sync {
    /// Handle a request; `None` means no response is sent (notifications)
    fn handle(&self, request: McpRequest) -> impl std::future::Future<Output = Option<McpResponse>> + Send;
}

/// Serves a `RequestHandler` over a pair of byte streams
pub struct StdioServer<H> {
    handler: Arc<H>,
}

impl<H: RequestHandler> StdioServer<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Serve on the process's stdin and stdout until stdin closes
    pub async fn run(&self) -> Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await?;
        Ok(())
    }

    /// Serve requests read from `reader`, writing responses to `writer`
    ///
    /// Returns the number of lines processed once `reader` reaches EOF.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut processed = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                info!("Input closed after {} messages", processed);
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    processed += 1;
                    self.dispatch(trimmed).await
                }
                Err(e) => {
                    processed += 1;
                    warn!("Message is not valid UTF-8: {}", e);
                    Some(McpResponse::error(
                        Value::Null,
                        McpError::parse_error(format!("Parse error: {}", e)),
                    ))
                }
            };

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        Ok(processed)
    }

    async fn dispatch(&self, line: &str) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Unparseable message: {}", e);
                return Some(McpResponse::error(
                    Value::Null,
                    McpError::parse_error(format!("Parse error: {}", e)),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpRequest>(value) {
            Ok(request) => {
                debug!("Received {} (id: {:?})", request.method, request.id);
                self.handler.handle(request).await
            }
            Err(e) => {
                warn!("Invalid request: {}", e);
                Some(McpResponse::error(
                    id,
                    McpError::invalid_request(format!("Invalid request: {}", e)),
                ))
            }
        }
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &McpResponse) -> Result<()> {
    let mut json = serde_json::to_string(response)?;
    json.push('\n');
    writer
        .write_all(json.as_bytes())
        .await
        .map_err(|e| TfTestError::Protocol(format!("Failed to write response: {}", e)))?;
    writer
        .flush()
        .await
        .map_err(|e| TfTestError::Protocol(format!("Failed to flush response: {}", e)))?;
    Ok(())
}
