//! Setting-name lookup.
//!
//! The generator reads settings by their conventional upper-case names
//! (`AUTHOR`, `SITENAME`, ...). Names it does not recognize are simply
//! never asked for; names this crate does not know return `None`.

use super::{
    BuildConfig, FieldPath, GithubConfig, HeaderConfig, MenuConfig, SiteConfig, SiteInfoConfig,
    UrlConfig,
};
use serde_json::{Map, Value as JsonValue};

/// Every setting name with the field that stores it, in declaration order.
pub const SETTINGS: &[(&str, FieldPath)] = &[
    ("AUTHOR", SiteInfoConfig::FIELDS.author),
    ("SITENAME", SiteInfoConfig::FIELDS.name),
    ("SITESUBTITLE", SiteInfoConfig::FIELDS.subtitle),
    ("SITEURL", SiteInfoConfig::FIELDS.url),
    ("DEFAULT_DATE_FORMAT", SiteInfoConfig::FIELDS.date_format),
    ("TIMEZONE", SiteInfoConfig::FIELDS.timezone),
    ("DEFAULT_LANG", SiteInfoConfig::FIELDS.language),
    ("ARTICLE_URL", UrlConfig::FIELDS.article),
    ("ARTICLE_SAVE_AS", UrlConfig::FIELDS.article_save_as),
    ("MENUITEMS", MenuConfig::FIELDS.items),
    ("NEWEST_FIRST_ARCHIVES", MenuConfig::FIELDS.newest_first_archives),
    ("LINKS", MenuConfig::FIELDS.links),
    ("SOCIAL", MenuConfig::FIELDS.social),
    ("GITHUB_USER", GithubConfig::FIELDS.user),
    ("GITHUB_REPO_COUNT", GithubConfig::FIELDS.repo_count),
    ("GITHUB_SKIP_FORK", GithubConfig::FIELDS.skip_fork),
    ("GITHUB_SHOW_USER_LINK", GithubConfig::FIELDS.show_user_link),
    ("DEFAULT_PAGINATION", BuildConfig::FIELDS.default_pagination),
    ("STATIC_OUT_DIR", BuildConfig::FIELDS.static_out_dir),
    ("STATIC_PATHS", BuildConfig::FIELDS.static_paths),
    ("THEME", BuildConfig::FIELDS.theme),
    ("PLUGIN_PATH", BuildConfig::FIELDS.plugin_path),
    ("PLUGINS", BuildConfig::FIELDS.plugins),
    ("EXTRA_HEADER", HeaderConfig::FIELDS.markup),
];

/// Field path of a setting name.
pub fn setting_path(name: &str) -> Option<FieldPath> {
    SETTINGS
        .iter()
        .find(|(setting, _)| *setting == name)
        .map(|(_, field)| *field)
}

impl SiteConfig {
    /// Value of a setting by its conventional name.
    pub fn lookup(&self, name: &str) -> Option<JsonValue> {
        let path = setting_path(name)?;
        resolve(&self.to_json()?, path).cloned()
    }

    /// All settings keyed by name, in declaration order.
    pub fn settings(&self) -> Map<String, JsonValue> {
        let Some(json) = self.to_json() else {
            return Map::new();
        };
        SETTINGS
            .iter()
            .filter_map(|(name, path)| Some((name.to_string(), resolve(&json, *path)?.clone())))
            .collect()
    }

    /// The record as JSON, including the fragment markup loaded at runtime.
    fn to_json(&self) -> Option<JsonValue> {
        let mut json = serde_json::to_value(self).ok()?;
        json.get_mut("header")?
            .as_object_mut()?
            .insert("markup".into(), JsonValue::String(self.header.markup.clone()));
        Some(json)
    }
}

fn resolve(json: &JsonValue, path: FieldPath) -> Option<&JsonValue> {
    path.keys().try_fold(json, |value, key| value.get(key))
}
