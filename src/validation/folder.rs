// Folder validation - path checks
// Checks run in a fixed order and stop at the first failure:
// emptiness, existence, is-directory, permission, file presence.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::result::ValidationResult;

/// Extension of the configuration files a folder must contain
pub const DEFAULT_EXTENSION: &str = "tf";

/// Why a folder path was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolderRejection {
    #[error("Folder path must be a non-empty string")]
    Empty,

    #[error("Folder path cannot be empty or only whitespace")]
    Whitespace,

    #[error("Folder path '{0}' does not exist")]
    NotFound(String),

    #[error("Path '{0}' is not a directory")]
    NotADirectory(String),

    #[error("Permission denied accessing folder '{0}'")]
    PermissionDenied(String),

    #[error("Failed to read folder '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("No Terraform (.{0}) files found in the specified folder")]
    NoMatchingFiles(String),
}

/// Validate a folder path and return the names of its matching files
///
/// The path is trimmed before any filesystem check; the trimmed form is
/// what appears in rejection messages.
pub fn check_folder(folder_path: &str, extension: &str) -> Result<Vec<String>, FolderRejection> {
    if folder_path.is_empty() {
        return Err(FolderRejection::Empty);
    }

    let trimmed = folder_path.trim();
    if trimmed.is_empty() {
        return Err(FolderRejection::Whitespace);
    }

    // Any stat failure counts as missing, including an untraversable parent
    let metadata = match fs::metadata(trimmed) {
        Ok(metadata) => metadata,
        Err(_) => return Err(FolderRejection::NotFound(trimmed.to_string())),
    };

    if !metadata.is_dir() {
        return Err(FolderRejection::NotADirectory(trimmed.to_string()));
    }

    let files = find_config_files(Path::new(trimmed), extension).map_err(|e| listing_rejection(trimmed, &e))?;

    if files.is_empty() {
        return Err(FolderRejection::NoMatchingFiles(extension.to_string()));
    }

    Ok(files)
}

/// Map a directory listing failure to its rejection
fn listing_rejection(path: &str, err: &io::Error) -> FolderRejection {
    match err.kind() {
        io::ErrorKind::PermissionDenied => FolderRejection::PermissionDenied(path.to_string()),
        _ => FolderRejection::Unreadable {
            path: path.to_string(),
            reason: err.to_string(),
        },
    }
}

/// Validate a folder path, reducing the outcome to accept or a single reason
pub fn validate_folder_path(folder_path: &str, extension: &str) -> ValidationResult {
    match check_folder(folder_path, extension) {
        Ok(_) => ValidationResult::accept(),
        Err(rejection) => rejection.into(),
    }
}

/// List the files in `dir` whose names end in `.<extension>`, sorted by name
///
/// Only regular files count; a symlink counts when its target is a file.
/// Subdirectories are not searched.
pub fn find_config_files(dir: &Path, extension: &str) -> io::Result<Vec<String>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)?.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(&suffix) && entry.path().is_file() {
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}
