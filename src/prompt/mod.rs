//! Prompt System - Template loading and composition
//!
//! This module loads the testing-guide template from disk and composes it
//! with the target folder path into the final agent prompt.

mod compose;
mod loader;

pub use compose::{PLACEHOLDER, compose_prompt, substitute_path};
pub use loader::{DEFAULT_TEMPLATE_FILE, TemplateLoader};
