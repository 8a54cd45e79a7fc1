//! Process-wide logging setup.
//!
//! Every record goes to stderr and is appended to the configured log file.
//! Stdout is left alone because it carries MCP frames in server mode.

use chrono::Local;
use eyre::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writer that copies every write to stderr and to a file.
pub struct TeeWriter {
    file: File,
}

impl TeeWriter {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // A broken stderr should not stop the file copy
        let _ = io::stderr().write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

/// Pick the default filter; `RUST_LOG` still overrides it.
pub fn resolve_level(config_level: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    config_level.unwrap_or("info").to_string()
}

/// Format one log line: `<timestamp> - <target> - <LEVEL> - <message>`.
pub fn format_line(target: &str, level: log::Level, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "{} - {} - {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        target,
        level,
        message
    )
}

/// Initialize the global logger. Call once, before serving anything.
pub fn setup_logging(log_file: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .context(format!("Failed to open log file {}", log_file.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "{}", format_line(record.target(), record.level(), record.args())))
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .try_init()
        .context("Logger already initialized")?;

    log::info!("Logging initialized, writing to stderr and {}", log_file.display());
    Ok(())
}
