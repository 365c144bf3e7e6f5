//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blogconf.toml`:
//!
//! | Module   | TOML Section | Purpose                                   |
//! |----------|--------------|-------------------------------------------|
//! | `site`   | `[site]`     | Author, titles, base URL, dates, language |
//! | `url`    | `[url]`      | Article URL and save-as templates         |
//! | `menu`   | `[menu]`     | Menu entries, archives order, blogroll    |
//! | `github` | `[github]`   | GitHub sidebar integration                |
//! | `build`  | `[build]`    | Pagination, static paths, theme, plugins  |
//! | `header` | `[header]`   | Extra header fragment file                |

mod build;
mod github;
mod header;
mod menu;
mod site;
pub mod url;

pub use build::BuildConfig;
pub use github::GithubConfig;
pub use header::{DEFAULT_FRAGMENT, HeaderConfig};
pub use menu::{MenuConfig, MenuItem};
pub use site::SiteInfoConfig;
pub use url::{ArticleRef, TemplateError, UrlConfig, UrlTemplate};
