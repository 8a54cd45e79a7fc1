//! Template Loader - Read the prompt template from disk
//!
//! The template is looked up in two places: next to the running executable,
//! then relative to the working directory. Only a not-found condition at the
//! first location triggers the second lookup. Nothing is cached; every call
//! reads the file again.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::{Result, TfTestError};

/// Default template filename
pub const DEFAULT_TEMPLATE_FILE: &str = "prompt_template.md";

/// Loads the prompt template from the install directory or working directory
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    /// Template filename, joined onto each base directory
    filename: String,
    /// Directory tried first
    primary_dir: PathBuf,
    /// Directory tried when the template is missing from `primary_dir`
    fallback_dir: PathBuf,
}

impl TemplateLoader {
    /// Create a loader that looks beside the executable, then in the working directory
    pub fn new(filename: impl Into<String>) -> Self {
        Self::with_locations(filename, install_dir(), PathBuf::new())
    }

    /// Create a loader with explicit lookup directories
    ///
    /// An empty `fallback_dir` leaves the filename relative, so the OS
    /// resolves it against the current working directory.
    pub fn with_locations(
        filename: impl Into<String>,
        primary_dir: impl AsRef<Path>,
        fallback_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            filename: filename.into(),
            primary_dir: primary_dir.as_ref().to_path_buf(),
            fallback_dir: fallback_dir.as_ref().to_path_buf(),
        }
    }

    /// Template filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Path tried first
    pub fn primary_path(&self) -> PathBuf {
        self.primary_dir.join(&self.filename)
    }

    /// Path tried after a not-found at the primary path
    pub fn fallback_path(&self) -> PathBuf {
        self.fallback_dir.join(&self.filename)
    }

    /// Read the template text
    ///
    /// # Returns
    /// The full template content
    ///
    /// # Errors
    /// `TemplateNotFound` when neither path exists; any other I/O error from
    /// either read is returned as-is.
    pub async fn load(&self) -> Result<String> {
        let primary = self.primary_path();
        info!("Loading prompt template from: {}", self.filename);
        debug!("Attempting to load template from: {}", primary.display());

        match tokio::fs::read_to_string(&primary).await {
            Ok(content) => {
                info!("Successfully loaded template ({} characters)", content.chars().count());
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let fallback = self.fallback_path();
                warn!(
                    "Template not found at {}, trying fallback: {}",
                    primary.display(),
                    fallback.display()
                );
                match tokio::fs::read_to_string(&fallback).await {
                    Ok(content) => {
                        info!(
                            "Successfully loaded template from fallback ({} characters)",
                            content.chars().count()
                        );
                        Ok(content)
                    }
                    Err(fallback_err) if fallback_err.kind() == ErrorKind::NotFound => {
                        error!("Failed to load template from both locations: {}, {}", e, fallback_err);
                        Err(TfTestError::TemplateNotFound { primary, fallback })
                    }
                    Err(fallback_err) => Err(fallback_err.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_FILE)
    }
}

/// Directory holding the running executable, or `.` when it cannot be determined
fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
