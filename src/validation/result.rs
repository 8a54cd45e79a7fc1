// Folder validation - result type

use super::folder::FolderRejection;

/// Outcome of validating a folder path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the folder was accepted
    pub valid: bool,
    /// Why the folder was rejected; `None` when accepted
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create an accepting result
    pub fn accept() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// Create a rejecting result with a single reason
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Reason text, empty when accepted
    pub fn reason_or_empty(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}

impl From<FolderRejection> for ValidationResult {
    fn from(rejection: FolderRejection) -> Self {
        Self::reject(rejection.to_string())
    }
}
