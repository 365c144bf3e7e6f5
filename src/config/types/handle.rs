//! Global load-once configuration handle.
//!
//! The configuration is stored exactly once per process and shared as
//! `Arc<SiteConfig>`. There is no replacement path: a second
//! `init_config` fails with [`ConfigError::AlreadyLoaded`].

use crate::config::{ConfigError, SiteConfig};
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Shared read-only access to the loaded configuration.
///
/// Returns `None` before `init_config` has been called.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

/// Publish a loaded configuration for the rest of the process.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyLoaded)?;
    Ok(arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the handle is process-wide.
    #[test]
    fn test_init_once() {
        let first = init_config(SiteConfig::default()).unwrap();
        let shared = cfg().unwrap();
        assert!(Arc::ptr_eq(&first, &shared));

        let second = init_config(SiteConfig::default());
        assert!(matches!(second, Err(ConfigError::AlreadyLoaded)));
        assert!(Arc::ptr_eq(&first, &cfg().unwrap()));
    }
}
