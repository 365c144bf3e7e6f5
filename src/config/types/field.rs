//! Type-safe config field path.

use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Field paths are dot-separated TOML keys (e.g. `site.url`). Each
/// section struct exposes its paths through `config_fields!`:
///
/// ```ignore
/// config_fields!(SiteInfoConfig => SiteInfoFields, "site" { url });
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterate over the dot-separated keys.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.0.split('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Generate a `FIELDS` constant of [`FieldPath`]s for a section struct.
macro_rules! config_fields {
    ($config:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $config {
            pub const FIELDS: $fields = $fields {
                $(
                    $field: $crate::config::FieldPath::new(
                        concat!($section, ".", stringify!($field)),
                    ),
                )*
            };
        }
    };
}

pub(crate) use config_fields;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let path = FieldPath::new("build.static_paths");
        assert_eq!(path.keys().collect::<Vec<_>>(), ["build", "static_paths"]);
        assert_eq!(path.as_str(), "build.static_paths");
    }

    #[test]
    fn test_display_is_dotted_path() {
        assert_eq!(FieldPath::new("site.url").to_string(), "site.url");
    }
}
