//! `[github]` section configuration.
//!
//! Settings for the theme's GitHub sidebar (recent repositories).
//!
//! # Example
//!
//! ```toml
//! [github]
//! user = "jakevdp"
//! repo_count = 5
//! skip_fork = true
//! show_user_link = true
//! ```

use crate::config::{ConfigDiagnostics, types::config_fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// GitHub account whose repositories are listed.
    pub user: String,

    /// Number of recent repositories to show.
    pub repo_count: u32,

    /// Leave forked repositories out of the list.
    pub skip_fork: bool,

    /// Show a link to the user's GitHub profile.
    pub show_user_link: bool,
}

config_fields!(GithubConfig => GithubFields, "github" {
    user, repo_count, skip_fork, show_user_link,
});

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            user: "jakevdp".into(),
            repo_count: 5,
            skip_fork: true,
            show_user_link: true,
        }
    }
}

impl GithubConfig {
    /// Whether the sidebar has anything to render.
    pub fn is_enabled(&self) -> bool {
        !self.user.is_empty() && (self.repo_count > 0 || self.show_user_link)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.user.trim().is_empty() {
            if self.user.contains(char::is_whitespace) {
                diag.error(
                    Self::FIELDS.user,
                    format!("'{}' is not a GitHub user name", self.user),
                );
            }
            return;
        }

        let fields = Self::FIELDS;
        if self.repo_count > 0 {
            diag.error_with_hint(
                fields.user,
                format!("{} is set but {} is empty", fields.repo_count, fields.user),
                format!("set {} or use {} = 0", fields.user, fields.repo_count),
            );
        }
        if self.show_user_link {
            diag.error_with_hint(
                fields.user,
                format!("{} is enabled but {} is empty", fields.show_user_link, fields.user),
                format!("set {} or disable {}", fields.user, fields.show_user_link),
            );
        }
    }
}
