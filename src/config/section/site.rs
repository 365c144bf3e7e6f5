//! `[site]` section configuration.
//!
//! Basic site information: author, titles, base URL, date and language.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "Jake Vanderplas"
//! name = "Pythonic Perambulations"
//! subtitle = "Musings and ramblings through the world of Python"
//! url = ""
//! date_format = "%b %d, %Y"
//! timezone = "Europe/Paris"
//! language = "en"
//! ```

use crate::config::{ConfigDiagnostics, types::config_fields};
use crate::utils::date::check_format;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Author name.
    pub author: String,

    /// Site title.
    pub name: String,

    /// Subtitle shown under the title.
    pub subtitle: String,

    /// Base URL. Empty means relative URLs.
    pub url: String,

    /// strftime pattern for article dates.
    pub date_format: String,

    /// IANA timezone identifier (e.g. "Europe/Paris").
    pub timezone: String,

    /// Default language code (e.g. "en").
    pub language: String,
}

config_fields!(SiteInfoConfig => SiteInfoFields, "site" {
    author, name, subtitle, url, date_format, timezone, language,
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: "Jake Vanderplas".into(),
            name: "Pythonic Perambulations".into(),
            subtitle: "Musings and ramblings through the world of Python".into(),
            url: String::new(),
            date_format: "%b %d, %Y".into(),
            timezone: "Europe/Paris".into(),
            language: "en".into(),
        }
    }
}

static RE_TIMEZONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(UTC|[A-Za-z]+(/[A-Za-z0-9_+\-]+)+)$").unwrap());

static RE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` is empty or a valid http(s) URL with a host
    /// - `date_format` only uses supported strftime directives
    /// - `timezone` looks like `UTC` or `Area/Location`
    /// - `language` is a lowercase language tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.author.trim().is_empty() {
            diag.warn(Self::FIELDS.author, "author is empty");
        }
        if self.name.trim().is_empty() {
            diag.warn(Self::FIELDS.name, "site name is empty");
        }

        self.validate_url(diag);

        if let Err(e) = check_format(&self.date_format) {
            diag.error_with_hint(
                Self::FIELDS.date_format,
                format!("invalid date format '{}': {e}", self.date_format),
                "use strftime directives such as %Y, %m, %d, %b",
            );
        }

        if !RE_TIMEZONE.is_match(&self.timezone) {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("'{}' is not a timezone identifier", self.timezone),
                "use an IANA name like \"Europe/Paris\" or \"UTC\"",
            );
        }

        if !RE_LANGUAGE.is_match(&self.language) {
            diag.error_with_hint(
                Self::FIELDS.language,
                format!("'{}' is not a language code", self.language),
                "use a code like \"en\" or \"pt-BR\"",
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        // Empty url: the generator emits relative links
        if self.url.is_empty() {
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if self.url.ends_with('/') {
                    diag.warn(
                        Self::FIELDS.url,
                        "trailing '/' produces double slashes in generated links",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
