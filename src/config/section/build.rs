//! `[build]` section configuration.
//!
//! Pagination, static assets, theme and plugins. All paths are bare
//! strings resolved by the generator; nothing here checks that they exist.
//!
//! # Example
//!
//! ```toml
//! [build]
//! default_pagination = 10
//! static_out_dir = "downloads"
//! static_paths = ["images", "figures", "videos", "code", "notebooks"]
//! theme = "/home/vanderplas/Opensource/pelican-octopress-theme/"
//! plugin_path = "/home/vanderplas/Opensource/pelican-plugins"
//! plugins = ["summary", "liquid_tags.img"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, types::config_fields};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Articles per index page.
    pub default_pagination: usize,

    /// Output subdirectory for static files.
    pub static_out_dir: PathBuf,

    /// Content subdirectories copied verbatim, in order.
    pub static_paths: Vec<PathBuf>,

    /// Theme directory.
    pub theme: PathBuf,

    /// Directory searched for plugins.
    pub plugin_path: PathBuf,

    /// Plugin identifiers, in load order.
    pub plugins: Vec<String>,
}

config_fields!(BuildConfig => BuildFields, "build" {
    default_pagination, static_out_dir, static_paths, theme, plugin_path, plugins,
});

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_pagination: 10,
            static_out_dir: "downloads".into(),
            static_paths: ["images", "figures", "videos", "code", "notebooks"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            theme: "/home/vanderplas/Opensource/pelican-octopress-theme/".into(),
            plugin_path: "/home/vanderplas/Opensource/pelican-plugins".into(),
            plugins: [
                "summary",
                "liquid_tags.img",
                "liquid_tags.video",
                "liquid_tags.include_code",
                "liquid_tags.notebook",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

static RE_PLUGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_pagination == 0 {
            diag.error_with_hint(
                Self::FIELDS.default_pagination,
                "pagination size must be a positive integer",
                "e.g. default_pagination = 10",
            );
        }

        if self.static_out_dir.as_os_str().is_empty() {
            diag.error(Self::FIELDS.static_out_dir, "output directory name is empty");
        }
        Self::validate_path_safety(&self.static_out_dir, None, Self::FIELDS.static_out_dir, diag);

        let total = self.static_paths.len();
        let mut seen = HashSet::new();
        for (idx, path) in self.static_paths.iter().enumerate() {
            let idx = (total > 1).then_some(idx);
            Self::validate_path_safety(path, idx, Self::FIELDS.static_paths, diag);
            if !seen.insert(path) {
                diag.warn(
                    Self::FIELDS.static_paths,
                    format!("'{}' is listed more than once", path.display()),
                );
            }
        }

        self.validate_plugins(diag);
    }

    /// Check a single path for unsafe components (`..` or absolute).
    fn validate_path_safety(
        path: &Path,
        idx: Option<usize>,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for comp in path.components() {
            let reason = match comp {
                Component::ParentDir => "parent directory '..' not allowed",
                Component::Prefix(_) | Component::RootDir => "absolute paths not allowed",
                _ => continue,
            };
            // Only show index if there are multiple entries
            let prefix = idx.map(|i| format!("[{i}] ")).unwrap_or_default();
            diag.error(
                field,
                format!("{prefix}path '{}': {reason}", path.display()),
            );
        }
    }

    fn validate_plugins(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = HashSet::new();
        for plugin in &self.plugins {
            if !RE_PLUGIN.is_match(plugin) {
                diag.error_with_hint(
                    Self::FIELDS.plugins,
                    format!("'{plugin}' is not a plugin identifier"),
                    "use dotted module names like \"liquid_tags.img\"",
                );
            }
            if !seen.insert(plugin.as_str()) {
                diag.warn(
                    Self::FIELDS.plugins,
                    format!("'{plugin}' is listed more than once"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(build: &BuildConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let build = BuildConfig::default();
        assert_eq!(build.default_pagination, 10);
        assert_eq!(build.static_out_dir, PathBuf::from("downloads"));
        assert_eq!(
            build.static_paths,
            ["images", "figures", "videos", "code", "notebooks"].map(PathBuf::from)
        );
        assert_eq!(build.plugins.len(), 5);
        assert!(validate(&build).is_empty());
    }

    #[test]
    fn test_theme_paths_not_checked() {
        // absolute, nonexistent theme and plugin paths are accepted as-is
        let build = BuildConfig {
            theme: "/nonexistent/theme".into(),
            plugin_path: "/nonexistent/plugins".into(),
            ..Default::default()
        };
        assert!(validate(&build).is_empty());
    }

    #[test]
    fn test_zero_pagination() {
        let config = test_parse_config("[build]\ndefault_pagination = 0");
        let diag = validate(&config.build);
        assert_eq!(diag.errors()[0].field.as_str(), "build.default_pagination");
    }

    #[test]
    fn test_unsafe_static_paths() {
        let build = BuildConfig {
            static_out_dir: "/var/www".into(),
            static_paths: vec!["images".into(), "../secrets".into()],
            ..Default::default()
        };
        let diag = validate(&build);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[1].message.starts_with("[1] "));
    }

    #[test]
    fn test_plugin_identifiers() {
        let build = BuildConfig {
            plugins: vec![
                "summary".into(),
                "liquid tags".into(),
                ".img".into(),
                "summary".into(),
            ],
            ..Default::default()
        };
        let diag = validate(&build);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
    }
}
