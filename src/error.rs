//! Error types for tftest-prompt
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::FolderRejection;

/// All error types that can occur in tftest-prompt
#[derive(Debug, Error)]
pub enum TfTestError {
    /// Folder failed one of the validation checks
    #[error("{0}")]
    Rejected(#[from] FolderRejection),

    /// Template missing from both the install and working directories
    #[error("Template not found at {} or {}", .primary.display(), .fallback.display())]
    TemplateNotFound { primary: PathBuf, fallback: PathBuf },

    /// Tool call arguments missing or malformed
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// MCP protocol error
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tftest-prompt operations
pub type Result<T> = std::result::Result<T, TfTestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_reason_only() {
        let err: TfTestError = FolderRejection::NotADirectory("/etc/hosts".to_string()).into();
        assert_eq!(err.to_string(), "Path '/etc/hosts' is not a directory");
    }

    #[test]
    fn test_template_not_found_names_both_paths() {
        let err = TfTestError::TemplateNotFound {
            primary: PathBuf::from("/opt/bin/prompt_template.md"),
            fallback: PathBuf::from("prompt_template.md"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/bin/prompt_template.md"));
        assert!(msg.ends_with("or prompt_template.md"));
    }

    #[test]
    fn test_invalid_params_error() {
        let err = TfTestError::InvalidParams("missing folder_path".to_string());
        assert_eq!(err.to_string(), "Invalid params: missing folder_path");
    }

    #[test]
    fn test_protocol_error() {
        let err = TfTestError::Protocol("stdout closed".to_string());
        assert_eq!(err.to_string(), "Protocol error: stdout closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TfTestError = io_err.into();
        assert!(matches!(err, TfTestError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TfTestError = json_err.into();
        assert!(matches!(err, TfTestError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TfTestError::Rejected(FolderRejection::Empty))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
