//! `[header]` section configuration.
//!
//! The extra header markup is read from a fragment file once, when the
//! configuration is loaded. The theme injects it verbatim into `<head>`:
//!
//! ```jinja
//! {% if EXTRA_HEADER %}
//!   {{ EXTRA_HEADER }}
//! {% endif %}
//! ```

use crate::config::{ConfigError, types::config_fields};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fragment written by the notebook plugin.
pub const DEFAULT_FRAGMENT: &str = "_nb_header_mod.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Fragment file, relative to the project root.
    pub fragment: PathBuf,

    /// Fragment content, filled in at load time. Never part of the TOML view.
    #[serde(skip)]
    pub markup: String,
}

config_fields!(HeaderConfig => HeaderFields, "header" { fragment, markup });

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            fragment: PathBuf::from(DEFAULT_FRAGMENT),
            markup: String::new(),
        }
    }
}

impl HeaderConfig {
    /// Read the fragment file relative to `root`.
    ///
    /// The file is opened, read fully and closed before this returns, on
    /// both paths. Missing files, read failures and invalid UTF-8 all map
    /// to [`ConfigError::ResourceUnavailable`].
    pub fn read_fragment(&self, root: &Path) -> Result<String, ConfigError> {
        let path = root.join(&self.fragment);
        let markup =
            fs::read_to_string(&path).map_err(|source| ConfigError::ResourceUnavailable {
                path: path.clone(),
                source,
            })?;
        debug!("header"; "read {} bytes from {}", markup.len(), path.display());
        Ok(markup)
    }
}
