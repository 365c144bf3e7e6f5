//! blogconf - load-once site configuration for a Pelican-style blog.
//!
//! ```ignore
//! use blogconf::config::{SiteConfig, CONFIG_FILE, init_config};
//!
//! let config = init_config(SiteConfig::load(root, CONFIG_FILE.as_ref())?)?;
//! let title = config.lookup("SITENAME");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;

pub use config::{ConfigError, SiteConfig};
