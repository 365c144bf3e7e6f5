//! `check` command: report on a configuration that loaded cleanly.

use crate::config::SiteConfig;
use crate::log;

pub fn run(config: &SiteConfig) {
    log!("check"; "{}", summary(config));
}

fn summary(config: &SiteConfig) -> String {
    let source = match &config.config_path {
        Some(path) => format!("{}", path.display()),
        None => "built-in settings".to_string(),
    };
    let github = if config.github.is_enabled() {
        "on"
    } else {
        "off"
    };
    format!(
        "config ok ({source}): {} plugins, {} static paths, header {} bytes, github {github}",
        config.build.plugins.len(),
        config.build.static_paths.len(),
        config.header.markup.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary() {
        let mut config = SiteConfig::default();
        config.header.markup = "<meta>".into();
        assert_eq!(
            summary(&config),
            "config ok (built-in settings): 5 plugins, 5 static paths, header 6 bytes, github on"
        );

        config.github.user.clear();
        assert!(summary(&config).ends_with("github off"));

        config.config_path = Some(PathBuf::from("blogconf.toml"));
        assert!(summary(&config).starts_with("config ok (blogconf.toml)"));
    }
}
