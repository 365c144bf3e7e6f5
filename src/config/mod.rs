//! Site configuration management.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── github     # [github]
//! │   ├── header     # [header]
//! │   ├── menu       # [menu]
//! │   ├── site       # [site]
//! │   └── url        # [url] and URL templates
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global load-once handle
//! ├── lookup         # Setting-name lookup (AUTHOR, SITENAME, ...)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! 1. Start from the built-in settings of the blog.
//! 2. Overlay `blogconf.toml` from the project root, if present.
//! 3. Read the header fragment into `header.markup`.
//! 4. Validate.
//!
//! Any failure aborts the load; no partially populated config escapes.

pub mod lookup;
pub mod section;
pub mod types;
mod util;

pub use lookup::{SETTINGS, setting_path};
pub use section::{
    ArticleRef, BuildConfig, GithubConfig, HeaderConfig, MenuConfig, MenuItem, SiteInfoConfig,
    TemplateError, UrlConfig, UrlTemplate,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};
pub use util::{find_config_file, join_url};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default override file name.
pub const CONFIG_FILE: &str = "blogconf.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
///
/// Built once by [`SiteConfig::load`] and shared read-only afterwards
/// (see [`init_config`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Override file that was applied, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Author, titles, base URL, dates
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Article URL templates
    #[serde(default)]
    pub url: UrlConfig,

    /// Menu entries and link lists
    #[serde(default)]
    pub menu: MenuConfig,

    /// GitHub sidebar
    #[serde(default)]
    pub github: GithubConfig,

    /// Pagination, static paths, theme, plugins
    #[serde(default)]
    pub build: BuildConfig,

    /// Extra header fragment
    #[serde(default)]
    pub header: HeaderConfig,
}

impl SiteConfig {
    /// Load the configuration for the project at `root`.
    ///
    /// `config_name` is the override file, relative to `root`. A missing
    /// override file is not an error; a missing header fragment is.
    pub fn load(root: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(config_name);

        let mut config = if config_path.is_file() {
            debug!("config"; "applying {}", config_path.display());
            let mut config = Self::from_path(&config_path)?;
            config.config_path = Some(config_path);
            config
        } else {
            debug!("config"; "no {}, using built-in settings", config_name.display());
            Self::default()
        };

        config.root = root.to_path_buf();
        config.header.markup = config.header.read_fragment(root)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Unknown keys are ignored, like any setting the generator does not know.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Serialize the current settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // article urls
    // ========================================================================

    /// Article URL relative to `site.url`.
    pub fn article_url(&self, article: &ArticleRef) -> anyhow::Result<String> {
        self.url
            .article_template()?
            .expand(article, &self.site.author, &self.site.language)
    }

    /// Article URL including `site.url`.
    pub fn article_permalink(&self, article: &ArticleRef) -> anyhow::Result<String> {
        Ok(join_url(&self.site.url, &self.article_url(article)?))
    }

    /// Output file of an article, relative to the output directory.
    pub fn article_save_as(&self, article: &ArticleRef) -> anyhow::Result<PathBuf> {
        let path = self
            .url
            .save_as_template()?
            .expand(article, &self.site.author, &self.site.language)?;
        Ok(PathBuf::from(path))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections.
    ///
    /// Collects all validation errors and returns them at once. Warnings
    /// are printed and do not fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every section check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.url.validate(&mut diag);
        self.menu.validate(&mut diag);
        self.github.validate(&mut diag);
        self.build.validate(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse an override file on top of the built-in settings.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
