//! `[menu]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [menu]
//! items = [["Archive", "archives.html"]]
//! newest_first_archives = true
//!
//! # blogroll and social widget, empty by default
//! links = [{ label = "Pelican", target = "http://docs.getpelican.com/" }]
//! social = []
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, types::config_fields};
use serde::{Deserialize, Serialize};

/// One `(label, target)` link entry.
///
/// Serialized as a two-element array, accepted either as an array or as
/// a `{ label, target }` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MenuItemRepr", into = "(String, String)")]
pub struct MenuItem {
    pub label: String,
    pub target: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuItemRepr {
    Pair(String, String),
    Table { label: String, target: String },
}

impl From<MenuItemRepr> for MenuItem {
    fn from(repr: MenuItemRepr) -> Self {
        match repr {
            MenuItemRepr::Pair(label, target) | MenuItemRepr::Table { label, target } => {
                Self { label, target }
            }
        }
    }
}

impl From<MenuItem> for (String, String) {
    fn from(item: MenuItem) -> Self {
        (item.label, item.target)
    }
}

impl MenuItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Menu and link-list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Title menu entries, in display order.
    pub items: Vec<MenuItem>,

    /// List archives newest article first.
    pub newest_first_archives: bool,

    /// Blogroll entries.
    pub links: Vec<MenuItem>,

    /// Social widget entries.
    pub social: Vec<MenuItem>,
}

config_fields!(MenuConfig => MenuFields, "menu" {
    items, newest_first_archives, links, social,
});

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: vec![MenuItem::new("Archive", "archives.html")],
            newest_first_archives: true,
            links: Vec::new(),
            social: Vec::new(),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_entries(&self.items, Self::FIELDS.items, diag);
        Self::validate_entries(&self.links, Self::FIELDS.links, diag);
        Self::validate_entries(&self.social, Self::FIELDS.social, diag);
    }

    fn validate_entries(entries: &[MenuItem], field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (idx, entry) in entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                diag.error(field, format!("[{idx}] label is empty"));
            }
            if entry.target.trim().is_empty() {
                diag.error(
                    field,
                    format!("[{idx}] '{}' has an empty target", entry.label),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let menu = MenuConfig::default();
        assert_eq!(menu.items, [MenuItem::new("Archive", "archives.html")]);
        assert!(menu.newest_first_archives);
        assert!(menu.links.is_empty());
        assert!(menu.social.is_empty());
    }

    #[test]
    fn test_pair_and_table_forms() {
        let config = test_parse_config(
            r#"[menu]
items = [
    ["Archive", "archives.html"],
    { label = "About", target = "pages/about.html" },
]"#,
        );
        assert_eq!(config.menu.items.len(), 2);
        assert_eq!(config.menu.items[0], MenuItem::new("Archive", "archives.html"));
        assert_eq!(config.menu.items[1].label, "About");
        assert_eq!(config.menu.items[1].target, "pages/about.html");
    }

    #[test]
    fn test_serialized_as_pairs() {
        let json = serde_json::to_value(MenuConfig::default()).unwrap();
        assert_eq!(json["items"], serde_json::json!([["Archive", "archives.html"]]));
    }

    #[test]
    fn test_empty_entries_rejected() {
        let menu = MenuConfig {
            social: vec![MenuItem::new("", "#"), MenuItem::new("Twitter", " ")],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        menu.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.field.as_str() == "menu.social"));
    }
}
