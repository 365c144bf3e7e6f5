//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;
pub mod url;

pub use args::{Cli, Commands, ShowArgs, UrlArgs};

use crate::config::find_config_file;
use anyhow::{Context, Result};
use std::path::PathBuf;

impl Cli {
    /// Resolve the project root.
    ///
    /// `--root` wins; otherwise the directory of the nearest config file
    /// above the cwd; otherwise the cwd itself.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        if self.is_init() {
            return Ok(cwd);
        }

        Ok(find_config_file(&cwd, &self.config)
            .and_then(|path| path.parent().map(PathBuf::from))
            .unwrap_or(cwd))
    }
}
