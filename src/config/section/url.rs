//! `[url]` section configuration and article URL templates.
//!
//! Templates mix literal text with placeholders:
//!
//! | Placeholder     | Expands to                                  |
//! |-----------------|---------------------------------------------|
//! | `{slug}`        | Article slug                                |
//! | `{date:FORMAT}` | Article date formatted with strftime FORMAT |
//! | `{category}`    | Article category (default `misc`)           |
//! | `{author}`      | Article author (default `site.author`)      |
//! | `{lang}`        | Article language (default `site.language`)  |
//!
//! # Example
//!
//! ```toml
//! [url]
//! article = "blog/{date:%Y}/{date:%m}/{date:%d}/{slug}/"
//! article_save_as = "blog/{date:%Y}/{date:%m}/{date:%d}/{slug}/index.html"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, types::config_fields};
use crate::utils::date::{DateTimeUtc, check_format};
use anyhow::{Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use std::sync::LazyLock;
use thiserror::Error;

/// Category used when an article does not name one.
pub const DEFAULT_CATEGORY: &str = "misc";

/// Article URL layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Public URL of an article, relative to `site.url`.
    pub article: String,

    /// Output file of an article, relative to the output directory.
    pub article_save_as: String,
}

config_fields!(UrlConfig => UrlFields, "url" { article, article_save_as });

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            article: "blog/{date:%Y}/{date:%m}/{date:%d}/{slug}/".into(),
            article_save_as: "blog/{date:%Y}/{date:%m}/{date:%d}/{slug}/index.html".into(),
        }
    }
}

impl UrlConfig {
    /// Parsed `article` template.
    pub fn article_template(&self) -> Result<UrlTemplate, TemplateError> {
        UrlTemplate::parse(&self.article)
    }

    /// Parsed `article_save_as` template.
    pub fn save_as_template(&self) -> Result<UrlTemplate, TemplateError> {
        UrlTemplate::parse(&self.article_save_as)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(template) = Self::check_template(&self.article, Self::FIELDS.article, diag)
            && template.is_absolute()
        {
            diag.warn(
                Self::FIELDS.article,
                "leading '/' bypasses site.url when links are generated",
            );
        }

        if Self::check_template(&self.article_save_as, Self::FIELDS.article_save_as, diag)
            .is_some()
        {
            self.validate_save_as(diag);
        }
    }

    /// Parse one template, reporting syntax errors and a missing `{slug}`.
    fn check_template(
        raw: &str,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) -> Option<UrlTemplate> {
        match UrlTemplate::parse(raw) {
            Ok(template) => {
                if !template.uses(Placeholder::Slug) {
                    diag.error_with_hint(
                        field,
                        format!("template '{raw}' has no {{slug}} placeholder"),
                        "articles published on the same day would collide",
                    );
                }
                Some(template)
            }
            Err(e) => {
                diag.error(field, format!("template '{raw}': {e}"));
                None
            }
        }
    }

    fn validate_save_as(&self, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.article_save_as;
        let path = Path::new(&self.article_save_as);

        for comp in path.components() {
            let reason = match comp {
                Component::ParentDir => "parent directory '..' not allowed",
                Component::Prefix(_) | Component::RootDir => "absolute paths not allowed",
                _ => continue,
            };
            diag.error(field, format!("path '{}': {reason}", path.display()));
        }

        if !self.article_save_as.ends_with(".html") {
            diag.error_with_hint(
                field,
                format!("'{}' does not name an .html file", self.article_save_as),
                "end the template with 'index.html' or '{slug}.html'",
            );
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Template placeholder kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Slug,
    Date,
    Category,
    Author,
    Lang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slug,
    Date(String),
    Category,
    Author,
    Lang,
}

impl Segment {
    const fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Literal(_) => None,
            Self::Slug => Some(Placeholder::Slug),
            Self::Date(_) => Some(Placeholder::Date),
            Self::Category => Some(Placeholder::Category),
            Self::Author => Some(Placeholder::Author),
            Self::Lang => Some(Placeholder::Lang),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unbalanced '{brace}' at byte {pos}")]
    UnbalancedBrace { brace: char, pos: usize },

    #[error("unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),

    #[error("'{{date}}' needs a format, e.g. '{{date:%Y}}'")]
    MissingDateFormat,

    #[error("invalid date format '{0}': {1}")]
    DateFormat(String, String),

    #[error("'{{{0}}}' does not take a format")]
    UnexpectedFormat(String),
}

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// A parsed URL or save-as template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in RE_PLACEHOLDER.captures_iter(raw) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            Self::push_literal(&mut segments, raw, last, whole.start())?;
            segments.push(Self::parse_placeholder(inner.as_str())?);
            last = whole.end();
        }
        Self::push_literal(&mut segments, raw, last, raw.len())?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Literal text between placeholders must not contain stray braces.
    fn push_literal(
        segments: &mut Vec<Segment>,
        raw: &str,
        start: usize,
        end: usize,
    ) -> Result<(), TemplateError> {
        let text = &raw[start..end];
        if let Some((offset, brace)) = text.char_indices().find(|(_, c)| matches!(c, '{' | '}')) {
            return Err(TemplateError::UnbalancedBrace {
                brace,
                pos: start + offset,
            });
        }
        if !text.is_empty() {
            segments.push(Segment::Literal(text.to_string()));
        }
        Ok(())
    }

    fn parse_placeholder(inner: &str) -> Result<Segment, TemplateError> {
        let (name, format) = match inner.split_once(':') {
            Some((name, format)) => (name.trim(), Some(format)),
            None => (inner.trim(), None),
        };

        let segment = match name {
            "date" => {
                let format = format
                    .filter(|f| !f.is_empty())
                    .ok_or(TemplateError::MissingDateFormat)?;
                check_format(format)
                    .map_err(|e| TemplateError::DateFormat(format.to_string(), e.to_string()))?;
                return Ok(Segment::Date(format.to_string()));
            }
            "slug" => Segment::Slug,
            "category" => Segment::Category,
            "author" => Segment::Author,
            "lang" => Segment::Lang,
            other => return Err(TemplateError::UnknownPlaceholder(other.to_string())),
        };

        if format.is_some() {
            return Err(TemplateError::UnexpectedFormat(name.to_string()));
        }
        Ok(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the template contains the given placeholder.
    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| s.placeholder() == Some(placeholder))
    }

    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with('/')
    }

    /// Expand the template for one article.
    ///
    /// `author` and `lang` fall back to the given defaults when the
    /// article does not set them.
    pub fn expand(&self, article: &ArticleRef, author: &str, lang: &str) -> Result<String> {
        let mut out = String::with_capacity(self.raw.len() + article.slug.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Date(format) => out.push_str(&article.date.format(format)?),
                Segment::Slug => out.push_str(path_segment("slug", &article.slug)?),
                Segment::Category => {
                    let category = article.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
                    out.push_str(path_segment("category", category)?);
                }
                Segment::Author => {
                    let author = article.author.as_deref().unwrap_or(author);
                    out.push_str(path_segment("author", author)?);
                }
                Segment::Lang => {
                    let lang = article.lang.as_deref().unwrap_or(lang);
                    out.push_str(path_segment("lang", lang)?);
                }
            }
        }
        Ok(out)
    }
}

/// A placeholder value must stay one path segment, so an expanded save-as
/// path never leaves the output directory.
fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        bail!("{name} '{value}' is not a single path segment");
    }
    Ok(value)
}

// ============================================================================
// Article reference
// ============================================================================

/// The article facts a URL template can refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    pub slug: String,
    pub date: DateTimeUtc,
    pub category: Option<String>,
    pub author: Option<String>,
    pub lang: Option<String>,
}

impl ArticleRef {
    pub fn new(slug: impl Into<String>, date: DateTimeUtc) -> Self {
        Self {
            slug: slug.into(),
            date,
            category: None,
            author: None,
            lang: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn article() -> ArticleRef {
        ArticleRef::new("hello", DateTimeUtc::from_ymd(2013, 5, 2))
    }

    fn errors_for(url: &UrlConfig) -> Vec<&'static str> {
        let mut diag = ConfigDiagnostics::new();
        url.validate(&mut diag);
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_default_templates_expand() {
        let url = UrlConfig::default();
        let a = article();
        assert_eq!(
            url.article_template().unwrap().expand(&a, "", "en").unwrap(),
            "blog/2013/05/02/hello/"
        );
        assert_eq!(
            url.save_as_template().unwrap().expand(&a, "", "en").unwrap(),
            "blog/2013/05/02/hello/index.html"
        );
        assert!(errors_for(&url).is_empty());
    }

    #[test]
    fn test_optional_placeholders() {
        let template = UrlTemplate::parse("{lang}/{category}/{author}/{slug}.html").unwrap();
        assert_eq!(
            template.expand(&article(), "jake", "en").unwrap(),
            "en/misc/jake/hello.html"
        );

        let a = article()
            .with_category("python")
            .with_author("guest")
            .with_lang("fr");
        assert_eq!(
            template.expand(&a, "jake", "en").unwrap(),
            "fr/python/guest/hello.html"
        );
    }

    #[test]
    fn test_values_stay_in_one_segment() {
        let template = UrlConfig::default().save_as_template().unwrap();
        let date = DateTimeUtc::from_ymd(2013, 5, 2);

        for slug in ["../../../etc/cron.d/x", "a/b", "a\\b", "..", ""] {
            let a = ArticleRef::new(slug, date);
            assert!(template.expand(&a, "", "en").is_err(), "{slug:?} accepted");
        }

        let by_category = UrlTemplate::parse("{category}/{slug}.html").unwrap();
        let a = article().with_category("../outside");
        assert!(by_category.expand(&a, "", "en").is_err());
        assert!(by_category.expand(&article(), "", "en").is_ok());
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let template = UrlTemplate::parse("{date:%b}/{slug}/").unwrap();
        let a = ArticleRef::new("hello", DateTimeUtc::from_ymd(2013, 0, 2));
        assert!(template.expand(&a, "", "en").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            UrlTemplate::parse("blog/{title}/"),
            Err(TemplateError::UnknownPlaceholder("title".into()))
        );
        assert_eq!(
            UrlTemplate::parse("blog/{date}/"),
            Err(TemplateError::MissingDateFormat)
        );
        assert_eq!(
            UrlTemplate::parse("blog/{slug:x}/"),
            Err(TemplateError::UnexpectedFormat("slug".into()))
        );
        assert_eq!(
            UrlTemplate::parse("blog/{slug/"),
            Err(TemplateError::UnbalancedBrace { brace: '{', pos: 5 })
        );
        assert_eq!(
            UrlTemplate::parse("blog/slug}/"),
            Err(TemplateError::UnbalancedBrace { brace: '}', pos: 9 })
        );
        assert!(matches!(
            UrlTemplate::parse("{date:%Q}"),
            Err(TemplateError::DateFormat(..))
        ));
    }

    #[test]
    fn test_uses() {
        let template = UrlTemplate::parse("{date:%Y}/{slug}/").unwrap();
        assert!(template.uses(Placeholder::Slug));
        assert!(template.uses(Placeholder::Date));
        assert!(!template.uses(Placeholder::Category));
        assert_eq!(template.as_str(), "{date:%Y}/{slug}/");
    }

    #[test]
    fn test_save_as_checks() {
        let url = UrlConfig {
            article_save_as: "../{slug}/index.html".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&url), ["url.article_save_as"]);

        let url = UrlConfig {
            article_save_as: "blog/{slug}/".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&url), ["url.article_save_as"]);
    }

    #[test]
    fn test_missing_slug() {
        let url = UrlConfig {
            article: "blog/{date:%Y}/".into(),
            ..Default::default()
        };
        assert_eq!(errors_for(&url), ["url.article"]);
    }

    #[test]
    fn test_parse_from_toml() {
        let config = test_parse_config("[url]\narticle = \"posts/{slug}.html\"");
        assert_eq!(config.url.article, "posts/{slug}.html");
        assert_eq!(
            config.url.article_save_as,
            UrlConfig::default().article_save_as
        );
    }
}
