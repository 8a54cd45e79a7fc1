//! Configuration for tftest-prompt.
//!
//! Loaded from `.tftest-prompt.yml` or `~/.config/tftest-prompt/tftest-prompt.yml`.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt::DEFAULT_TEMPLATE_FILE;
use crate::validation::DEFAULT_EXTENSION;

/// Default log file, appended to by every process.
pub const DEFAULT_LOG_FILE: &str = "/tmp/terraform-test-mcp.log";

/// Project-local config filename.
pub const PROJECT_CONFIG_FILE: &str = ".tftest-prompt.yml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Log level filter (e.g. "info", "debug"); `RUST_LOG` wins when set.
    pub log_level: Option<String>,

    /// File every log line is appended to.
    pub log_file: PathBuf,

    /// Template filename, looked up beside the executable then in the working directory.
    pub template_file: String,

    /// Extension a folder's configuration files must carry, without the dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .tftest-prompt.yml in current directory
    /// 3. ~/.config/tftest-prompt/tftest-prompt.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from {}", PROJECT_CONFIG_FILE);
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", PROJECT_CONFIG_FILE, e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tftest-prompt").join("tftest-prompt.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.template_file.trim().is_empty() {
            eyre::bail!("template-file must not be empty");
        }
        if self.extension.trim().is_empty() {
            eyre::bail!("extension must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log_level.is_none());
        assert_eq!(config.log_file, PathBuf::from("/tmp/terraform-test-mcp.log"));
        assert_eq!(config.template_file, "prompt_template.md");
        assert_eq!(config.extension, "tf");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "log-level: debug\nlog-file: /var/tmp/tftest.log\ntemplate-file: guide.md\n",
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, PathBuf::from("/var/tmp/tftest.log"));
        assert_eq!(config.template_file, "guide.md");
        // Unspecified keys keep their defaults
        assert_eq!(config.extension, "tf");
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_path_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "log-file: [unclosed");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_empty_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "extension: \"\"\n");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_empty_template() {
        let config = Config {
            template_file: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
